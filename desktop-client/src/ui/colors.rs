use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1B, 0x1F, 0x2A);
pub const GRID_BORDER: Color32 = Color32::from_rgb(0x4A, 0x50, 0x5E);
pub const WRAP_BORDER: Color32 = Color32::from_rgb(0x38, 0xC1, 0x72);

pub const SNAKE_FILL: Color32 = Color32::from_rgb(0x01, 0x70, 0xF3);
pub const SNAKE_STROKE: Color32 = Color32::from_rgb(0x00, 0x37, 0x79);
pub const FOOD_FILL: Color32 = Color32::from_rgb(0xDC, 0x30, 0x30);
pub const FOOD_STROKE: Color32 = Color32::from_rgb(0x88, 0x1A, 0x1B);

pub const PORTAL_CORE: Color32 = Color32::from_rgb(0xB0, 0x5C, 0xFF);

pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 170);
pub const OVERLAY_TEXT: Color32 = Color32::WHITE;

pub const TOGGLE_ON: Color32 = Color32::from_rgb(0x1E, 0x8E, 0x3E);
pub const TOGGLE_OFF: Color32 = Color32::from_rgb(0xB0, 0x2A, 0x2A);

/// Portal glow ring `ring` of `rings`, fading outwards.
pub fn portal_glow(ring: usize, rings: usize) -> Color32 {
    let fade = 1.0 - ring as f32 / rings.max(1) as f32;
    let alpha = (40.0 + 180.0 * fade) as u8;
    Color32::from_rgba_unmultiplied(PORTAL_CORE.r(), PORTAL_CORE.g(), PORTAL_CORE.b(), alpha)
}
