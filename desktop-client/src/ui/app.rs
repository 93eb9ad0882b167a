use std::time::Instant;

use common::input::{GestureTracker, InputIntent};
use common::snake::{Mode, SessionPhase, SessionSnapshot, SnakeSession};
use common::HighScoreStore;
use eframe::egui::{self, RichText};

use super::board::paint_board;
use super::colors;
use super::input::{collect_key_intents, collect_swipe_intent};

pub struct SnakeApp<TStore: HighScoreStore> {
    session: SnakeSession<TStore>,
    gestures: GestureTracker,
    cell_size: f32,
    show_help: bool,
}

impl<TStore: HighScoreStore> SnakeApp<TStore> {
    pub fn new(session: SnakeSession<TStore>, cell_size: u32) -> Self {
        Self {
            session,
            gestures: GestureTracker::new(),
            cell_size: cell_size as f32,
            show_help: false,
        }
    }

    fn apply_intent(&mut self, intent: InputIntent, now: Instant) {
        match intent {
            InputIntent::Turn(direction) => {
                self.session.request_direction(direction, now);
            }
            InputIntent::TogglePause => {
                self.session.toggle_pause(now);
            }
            InputIntent::ToggleMode(mode) => {
                self.session.toggle_mode(mode);
            }
            InputIntent::Start => {
                self.session.start(now);
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot, now: Instant) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Score: {}", snapshot.score())).size(18.0));
            ui.add_space(20.0);
            ui.label(RichText::new(format!("Highscore: {}", snapshot.displayed_highscore())).size(18.0));
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let (label, enabled) = match snapshot.phase {
                SessionPhase::Idle => ("Start Game".to_string(), true),
                SessionPhase::Countdown { remaining } => (remaining.to_string(), false),
                SessionPhase::Running | SessionPhase::Paused => ("Start Game".to_string(), false),
                SessionPhase::GameOver { .. } => ("Restart Game".to_string(), true),
            };
            if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                self.session.start(now);
            }

            let wrap_enabled = snapshot.modes.is_enabled(Mode::Wrap);
            let fill = if wrap_enabled { colors::TOGGLE_ON } else { colors::TOGGLE_OFF };
            let toggle = egui::Button::new(RichText::new("Toggle Wrap mode").color(egui::Color32::WHITE)).fill(fill);
            if ui.add(toggle).clicked() {
                self.session.toggle_mode(Mode::Wrap);
            }

            if ui.button(if self.show_help { "Hide help" } else { "How to play" }).clicked() {
                self.show_help = !self.show_help;
            }
        });
    }

    fn render_help(ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Steer with the arrow keys or WASD, or swipe on the board.");
            ui.label("Space pauses and resumes. Enter starts a new game.");
            ui.label("E toggles wrap mode: leaving the board brings you back on the other side.");
            ui.label("Eat the red food to grow. The snake speeds up as your score climbs.");
        });
    }
}

impl<TStore: HighScoreStore> eframe::App for SnakeApp<TStore> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        for intent in collect_key_intents(ctx) {
            self.apply_intent(intent, now);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let snapshot = self.session.snapshot();
            self.render_header(ui, &snapshot, now);

            if self.show_help {
                Self::render_help(ui);
            }

            ui.add_space(10.0);

            let field = self.session.settings().field_size;
            let board_size = egui::vec2(
                field.width as f32 * self.cell_size,
                field.height as f32 * self.cell_size,
            );
            let (response, painter) = ui.allocate_painter(board_size, egui::Sense::click_and_drag());

            if let Some(intent) = collect_swipe_intent(&response, &mut self.gestures) {
                self.apply_intent(intent, now);
            }

            self.session.update(now);

            paint_board(&painter, response.rect, &self.session.snapshot(), self.cell_size);
        });

        if self.session.phase().is_live() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::snake::{Direction, SnakeSessionSettings};
    use common::{MemoryHighScoreStore, SessionRng};

    fn app() -> SnakeApp<MemoryHighScoreStore> {
        let session = SnakeSession::new(
            SnakeSessionSettings::default(),
            MemoryHighScoreStore::new(0),
            SessionRng::new(1),
        );
        SnakeApp::new(session, 20)
    }

    #[test]
    fn test_start_intent_begins_countdown() {
        let mut app = app();
        app.apply_intent(InputIntent::Start, Instant::now());
        assert!(matches!(app.session.phase(), SessionPhase::Countdown { .. }));
    }

    #[test]
    fn test_mode_intent_toggles_wrap() {
        let mut app = app();
        app.apply_intent(InputIntent::ToggleMode(Mode::Wrap), Instant::now());
        assert!(app.session.modes().is_enabled(Mode::Wrap));
        app.apply_intent(InputIntent::ToggleMode(Mode::Wrap), Instant::now());
        assert!(!app.session.modes().is_enabled(Mode::Wrap));
    }

    #[test]
    fn test_turn_before_start_leaves_session_idle() {
        let mut app = app();
        app.apply_intent(InputIntent::Turn(Direction::Left), Instant::now());
        assert_eq!(app.session.phase(), SessionPhase::Idle);
    }
}
