//! Gallery window: GalleryApp implements eframe::App.

use egui::{Align2, Color32, FontId, Pos2, Rect, TextureHandle};
use tracing::debug;

use morfo_colormap::image_to_rgba;
use morfo_core::Gallery;

use crate::layout::{cell_rect, fit_image, TITLE_HEIGHT};

/// Read-only viewer over a finished gallery.
pub struct GalleryApp {
    gallery: Gallery,
    /// One texture per panel, uploaded on first paint
    textures: Vec<Option<TextureHandle>>,
}

impl GalleryApp {
    pub fn new(gallery: Gallery) -> Self {
        let textures = vec![None; gallery.len()];
        Self { gallery, textures }
    }

    fn ensure_textures(&mut self, ctx: &egui::Context) {
        for (panel, texture) in self.gallery.iter().zip(self.textures.iter_mut()) {
            if texture.is_some() {
                continue;
            }
            let (size, rgba) = image_to_rgba(&panel.image);
            let image = egui::ColorImage::from_rgba_unmultiplied(size, &rgba);
            *texture = Some(ctx.load_texture(&panel.title, image, egui::TextureOptions::NEAREST));
            debug!(title = %panel.title, width = size[0], height = size[1], "texture uploaded");
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_textures(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_rect_before_wrap();
            let painter = ui.painter_at(area);
            let grid = self.gallery.grid();

            for (index, (panel, texture)) in self.gallery.iter().zip(&self.textures).enumerate() {
                let Some((row, col)) = self.gallery.cell(index) else {
                    continue;
                };
                let cell = cell_rect(area, grid, row, col);

                painter.text(
                    Pos2::new(cell.center().x, cell.min.y + TITLE_HEIGHT / 2.0),
                    Align2::CENTER_CENTER,
                    &panel.title,
                    FontId::proportional(14.0),
                    ui.visuals().text_color(),
                );

                let Some(tex) = texture else {
                    continue;
                };
                let top_left = Pos2::new(cell.min.x, cell.min.y + TITLE_HEIGHT);
                let bounds = Rect::from_min_max(top_left, cell.max);
                let (rows, cols) = panel.image.shape();
                painter.image(
                    tex.id(),
                    fit_image(bounds, [cols, rows]),
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            ui.allocate_rect(area, egui::Sense::hover());
        });
    }
}
