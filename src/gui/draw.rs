use super::{App, Config};
use crate::FORMS;
use eframe::egui::{
    load::SizedTexture, Button, ComboBox, DragValue, Image, RichText, Sense, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_playback_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.engine.is_playing() {
                "Pause"
            } else {
                "Play"
            };
            if ui.add(Self::new_button(text)).clicked() {
                if self.engine.is_playing() {
                    self.engine.pause();
                } else {
                    self.engine.play();
                }
            }

            if ui.add(Self::new_button("Step")).clicked() {
                self.step_once();
                self.engine.pause();
            }

            if ui.add(Self::new_button("Clear")).clicked() {
                self.engine.clear();
                self.selected_form = None;
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Slower")).clicked() {
                self.engine.slow_down();
            }
            if ui.add(Self::new_button("Faster")).clicked() {
                self.engine.speed_up();
            }
            ui.label(Self::new_text(&format!("{} ms", self.engine.speed())));
        });
    }

    fn draw_seed_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Random")).clicked() {
                self.engine.random_seed(self.seed_rate);
                self.selected_form = None;
            }
            ui.label(Self::new_text("one cell in "));
            ui.add(DragValue::new(&mut self.seed_rate).range(1..=Config::MAX_SEED_RATE));
        });

        let selected = self.selected_form.map_or("Pick a pattern", |i| FORMS[i].name);
        let mut picked = None;
        ComboBox::from_id_source("forms")
            .selected_text(Self::new_text(selected))
            .show_ui(ui, |ui| {
                for (i, form) in FORMS.iter().enumerate() {
                    if ui
                        .selectable_label(self.selected_form == Some(i), form.name)
                        .clicked()
                    {
                        picked = Some(i);
                    }
                }
            });
        if let Some(i) = picked {
            self.draw_form(i);
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let grid = *self.engine.grid();
        ui.label(Self::new_text(&format!(
            "Board: {} x {}",
            grid.width(),
            grid.height()
        )));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.engine.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Living cells: {}",
            self.engine.living_count()
        )));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms",
            self.last_update_duration * 1e3
        )));
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
        if let Some(status) = &self.status {
            ui.label(RichText::new(status).color(eframe::egui::Color32::DARK_RED));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_playback_controls(ui);
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_seed_controls(ui);
                });
            });
            ui.add_space(Config::WIDGET_GAP);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_stats(ui);
                });
            });
        });
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let image = self.board_image();
        self.texture.set(image, Self::TEXTURE_OPTIONS);

        let grid = *self.engine.grid();
        let pitch = {
            let s = self.engine.settings();
            (s.cell_size + s.cell_border) as f32
        };
        let wanted = Vec2::new(grid.width() as f32, grid.height() as f32) * pitch;
        // shrink to the available area, keeping cells square
        let available = ui.available_size();
        let scale = (available.x / wanted.x).min(available.y / wanted.y).min(1.);
        let size = wanted * scale;

        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));
        self.board_rect.replace(response.rect);

        if self.engine.settings().interactive && response.clicked() {
            if let Some(id) = response
                .interact_pointer_pos()
                .and_then(|pos| self.cell_at(pos))
            {
                self.engine.toggle(id);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);
            ui.add_space(Config::FRAME_MARGIN);
            self.draw_board(ui);
        });
    }
}
