use crate::device_display::interface::DeviceDisplay;
use crate::device_picker::interface::Photo;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Larger photos are downscaled before upload to the GPU.
const MAX_TEXTURE_SIDE: u32 = 1024;
const TEXT_AREA_HEIGHT: f32 = 80.0;

#[derive(Default)]
struct ScreenBuffer {
    text: String,
    photo: Option<Photo>,
}

/// Writes go to a shared buffer; the window draws it through a `DisplayView`.
#[derive(Clone, Default)]
pub struct DeviceDisplayGui {
    buffer: Arc<Mutex<ScreenBuffer>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DisplayView {
        DisplayView {
            buffer: self.buffer.clone(),
            texture: None,
        }
    }

    /// Current text field contents.
    pub fn text(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| buffer.text.clone())
            .unwrap_or_default()
    }

    fn with_buffer(
        &self,
        f: impl FnOnce(&mut ScreenBuffer),
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buffer = self.buffer.lock().map_err(|e| e.to_string())?;
        f(&mut buffer);
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show_image(&mut self, photo: &Photo) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_buffer(|buffer| buffer.photo = Some(photo.clone()))
    }

    fn clear_image(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_buffer(|buffer| buffer.photo = None)
    }

    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_buffer(|buffer| buffer.text = text.to_string())
    }
}

pub struct DisplayView {
    buffer: Arc<Mutex<ScreenBuffer>>,
    texture: Option<(Photo, egui::TextureHandle)>,
}

impl DisplayView {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let (text, photo) = match self.buffer.lock() {
            Ok(buffer) => (buffer.text.clone(), buffer.photo.clone()),
            Err(_) => return,
        };

        match photo {
            Some(photo) => {
                let stale = self
                    .texture
                    .as_ref()
                    .map_or(true, |(shown, _)| *shown != photo);
                if stale {
                    let texture = load_texture(ui.ctx(), &photo);
                    self.texture = Some((photo, texture));
                }
            }
            None => self.texture = None,
        }

        if let Some((_, texture)) = &self.texture {
            let available = ui.available_size();
            let max = egui::vec2(
                available.x,
                (available.y - TEXT_AREA_HEIGHT).max(TEXT_AREA_HEIGHT),
            );
            let size = fit(texture.size_vec2(), max);
            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                texture.id(),
                size,
            )));
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new(text).size(18.0));
    }
}

fn load_texture(ctx: &egui::Context, photo: &Photo) -> egui::TextureHandle {
    let image = photo.image();
    let rgba = if image.width() > MAX_TEXTURE_SIDE || image.height() > MAX_TEXTURE_SIDE {
        image.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE).to_rgba8()
    } else {
        image.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    ctx.load_texture("picked_photo", color_image, egui::TextureOptions::LINEAR)
}

/// Largest size with the same aspect ratio that fits in `max`, never upscaled.
fn fit(size: egui::Vec2, max: egui::Vec2) -> egui::Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (max.x / size.x).min(max.y / size.y).min(1.0).max(0.0);
    size * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    #[test]
    fn test_fit_shrinks_keeping_aspect() {
        let size = fit(egui::vec2(800.0, 400.0), egui::vec2(400.0, 400.0));
        assert_eq!(size, egui::vec2(400.0, 200.0));
    }

    #[test]
    fn test_fit_never_upscales() {
        let size = fit(egui::vec2(100.0, 50.0), egui::vec2(400.0, 400.0));
        assert_eq!(size, egui::vec2(100.0, 50.0));
    }

    #[test]
    fn test_writes_reach_view_buffer() {
        let mut display = DeviceDisplayGui::new();
        let view = display.view();
        let photo = Photo::new(DynamicImage::new_rgb8(2, 2));

        display.show_image(&photo).unwrap();
        display.write_text("Prediction: jeep \nConfidence: 0.5").unwrap();

        let buffer = view.buffer.lock().unwrap();
        assert_eq!(buffer.text, "Prediction: jeep \nConfidence: 0.5");
        assert_eq!(buffer.photo, Some(photo));
    }
}
