use super::{Config, FpsLimiter};
use crate::{LifeEngine, FORMS};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Pos2, Rect, TextureHandle,
    TextureOptions,
};
use std::time::Instant;

pub struct App {
    pub(super) engine: LifeEngine,          // Simulation state and playback.
    pub(super) seed_rate: u32,              // Value of the seed input.
    pub(super) selected_form: Option<usize>, // Index into `FORMS` last drawn.
    pub(super) last_update_duration: f64,   // Duration of the last generation in seconds.
    pub(super) texture: TextureHandle,      // One texel per cell.
    pub(super) board_rect: Option<Rect>,    // Part of the window displaying the board.
    pub(super) fps_limiter: FpsLimiter,
    pub(super) status: Option<String>,      // Last error shown under the controls.
}

impl App {
    pub fn new(ctx: &Context, engine: LifeEngine) -> Self {
        Self {
            seed_rate: engine.settings().seed_rate,
            engine,
            selected_form: None,
            last_update_duration: 0.,
            texture: ctx.load_texture("life board", ColorImage::default(), Self::TEXTURE_OPTIONS),
            board_rect: None,
            fps_limiter: FpsLimiter::default(),
            status: None,
        }
    }

    pub(super) const TEXTURE_OPTIONS: TextureOptions = TextureOptions::NEAREST;

    /// Cell under a pointer position inside the board, if any.
    pub(super) fn cell_at(&self, pos: Pos2) -> Option<crate::CellId> {
        let rect = self.board_rect?;
        if !rect.contains(pos) {
            return None;
        }
        let grid = self.engine.grid();
        let rel = (pos - rect.min) / rect.size();
        let x = ((rel.x * grid.width() as f32) as u32).min(grid.width() - 1);
        let y = ((rel.y * grid.height() as f32) as u32).min(grid.height() - 1);
        Some(grid.cell_id(x as i64, y as i64))
    }

    pub(super) fn board_image(&self) -> ColorImage {
        let grid = self.engine.grid();
        let mut image = ColorImage::new(
            [grid.width() as usize, grid.height() as usize],
            Config::DEAD_COLOR,
        );
        for id in self.engine.living().iter() {
            image.pixels[id as usize] = Config::ALIVE_COLOR;
        }
        image
    }

    pub(super) fn step_once(&mut self) {
        let timer = Instant::now();
        self.engine.step_generation();
        self.last_update_duration = timer.elapsed().as_secs_f64();
    }

    fn update_engine(&mut self) {
        let timer = Instant::now();
        if self.engine.tick(timer).is_some() {
            self.last_update_duration = timer.elapsed().as_secs_f64();
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                if self.engine.is_playing() {
                    self.engine.pause();
                } else {
                    self.engine.play();
                }
            }
            if input.key_pressed(Key::N) {
                self.engine.pause();
                self.step_once();
            }
            if input.key_pressed(Key::Plus) {
                self.engine.speed_up();
            }
            if input.key_pressed(Key::Minus) {
                self.engine.slow_down();
            }
        });
    }

    pub(super) fn draw_form(&mut self, index: usize) {
        match FORMS[index].pattern() {
            Ok(pattern) => {
                self.engine.draw_form(&pattern);
                self.selected_form = Some(index);
                self.status = None;
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", FORMS[index].name);
                self.status = Some(err.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);
                self.update_engine();
                self.draw(ui);
            });

        let deadline = self.engine.time_until_tick(Instant::now());
        self.fps_limiter.sleep(Config::MAX_FPS, deadline);
    }
}
