use common::snake::{BoundaryPolicy, Point, SessionPhase, SessionSnapshot};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind};

use super::colors;

const PORTAL_RINGS: usize = 4;

/// Paints one frame of the board. Purely a function of the snapshot, so it
/// can repaint unchanged state between logic ticks.
pub fn paint_board(painter: &egui::Painter, rect: Rect, snapshot: &SessionSnapshot, cell_size: f32) {
    painter.rect_filled(rect, 0.0, colors::BACKGROUND);
    paint_border(painter, rect, snapshot);

    if let Some(food) = snapshot.state.food {
        paint_cell(painter, rect.min, food, cell_size, colors::FOOD_FILL, colors::FOOD_STROKE);
    }

    if snapshot.started {
        for segment in snapshot.state.snake.cells() {
            paint_cell(painter, rect.min, segment, cell_size, colors::SNAKE_FILL, colors::SNAKE_STROKE);
        }
    }

    paint_overlay(painter, rect, snapshot);
}

fn paint_cell(painter: &egui::Painter, origin: Pos2, cell: Point, cell_size: f32, fill: Color32, stroke: Color32) {
    let cell_rect = Rect::from_min_size(
        egui::pos2(
            origin.x + cell.x as f32 * cell_size,
            origin.y + cell.y as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    );
    painter.rect_filled(cell_rect, 0.0, fill);
    painter.rect_stroke(cell_rect, 0.0, Stroke::new(1.0, stroke), StrokeKind::Inside);
}

fn paint_border(painter: &egui::Painter, rect: Rect, snapshot: &SessionSnapshot) {
    if snapshot.modes.draws_portal_frame() {
        for ring in 0..PORTAL_RINGS {
            let width = 2.0 + ring as f32 * 2.0;
            painter.rect_stroke(
                rect.expand(ring as f32 * 2.0),
                4.0,
                Stroke::new(width, colors::portal_glow(ring, PORTAL_RINGS)),
                StrokeKind::Outside,
            );
        }
        return;
    }

    match snapshot.modes.boundary_policy() {
        BoundaryPolicy::Lethal => {
            painter.rect_stroke(rect, 0.0, Stroke::new(2.0, colors::GRID_BORDER), StrokeKind::Outside);
        }
        BoundaryPolicy::Wrap => {
            let corners = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            painter.extend(egui::Shape::dashed_line(
                &corners,
                Stroke::new(2.0, colors::WRAP_BORDER),
                8.0,
                6.0,
            ));
        }
    }
}

fn paint_overlay(painter: &egui::Painter, rect: Rect, snapshot: &SessionSnapshot) {
    let lines: Vec<(String, f32)> = match snapshot.phase {
        SessionPhase::Idle | SessionPhase::Running => return,
        SessionPhase::Countdown { remaining } => vec![(remaining.to_string(), 64.0)],
        SessionPhase::Paused => vec![
            ("Game Paused".to_string(), 36.0),
            (format!("Current score: {}", snapshot.score()), 20.0),
        ],
        SessionPhase::GameOver { .. } => {
            let detail = if snapshot.new_highscore {
                "🎉 New Highscore 🎉".to_string()
            } else {
                format!("You scored: {}", snapshot.score())
            };
            vec![("Game Over".to_string(), 36.0), (detail, 20.0)]
        }
    };

    if !matches!(snapshot.phase, SessionPhase::Countdown { .. }) {
        painter.rect_filled(rect, 0.0, colors::OVERLAY);
    }

    let total_height: f32 = lines.iter().map(|(_, size)| size * 1.4).sum();
    let mut y = rect.center().y - total_height / 2.0;
    for (text, size) in lines {
        let line_height = size * 1.4;
        painter.text(
            egui::pos2(rect.center().x, y + line_height / 2.0),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            colors::OVERLAY_TEXT,
        );
        y += line_height;
    }
}
