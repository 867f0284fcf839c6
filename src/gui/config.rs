use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [1280., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 360.];

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0x2e, 0x8b, 0x57);
    pub const DEAD_COLOR: Color32 = Color32::WHITE;

    pub const WIDGET_GAP: f32 = 20.;
    pub const MAX_SEED_RATE: u32 = 1000;

    pub const MAX_FPS: f64 = 60.;

    /// Pixels left for the board in a window of `window` size.
    pub fn board_viewport(window: [f32; 2]) -> [f32; 2] {
        [
            window[0] - Self::CONTROL_PANEL_WIDTH - 3. * Self::FRAME_MARGIN,
            window[1] - 2. * Self::FRAME_MARGIN,
        ]
    }
}
