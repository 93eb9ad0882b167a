use common::input::{key_intent, GestureTracker, InputIntent};
use common::log;
use eframe::egui;

/// Collects this frame's key presses as intents. Repeats are dropped so a
/// held arrow key steers once.
pub fn collect_key_intents(ctx: &egui::Context) -> Vec<InputIntent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key { key, pressed: true, repeat: false, .. } => {
                    let intent = key_intent(key.name());
                    if intent.is_none() {
                        log!("Unrecognized key: {}", key.name());
                    }
                    intent
                }
                _ => None,
            })
            .collect()
    })
}

/// Turns a press/release pair on the board into a swipe intent.
pub fn collect_swipe_intent(response: &egui::Response, tracker: &mut GestureTracker) -> Option<InputIntent> {
    let (pressed, released, origin, position) = response.ctx.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.press_origin(),
            i.pointer.interact_pos(),
        )
    });

    if pressed
        && let Some(origin) = origin
        && response.rect.contains(origin)
    {
        tracker.pointer_down(origin.x, origin.y);
    }

    if released && tracker.is_active() {
        let position = position?;
        return tracker
            .pointer_up(position.x, position.y)
            .map(InputIntent::Turn);
    }

    None
}
