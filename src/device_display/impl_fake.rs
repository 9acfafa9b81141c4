use crate::device_display::interface::DeviceDisplay;
use crate::device_picker::interface::Photo;
use std::error::Error;

/// Remembers what is on screen and every text change.
#[derive(Default)]
pub struct DeviceDisplayFake {
    pub text: String,
    pub photo: Option<Photo>,
    pub text_history: Vec<String>,
    pub image_changes: usize,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show_image(&mut self, photo: &Photo) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.photo.as_ref() != Some(photo) {
            self.photo = Some(photo.clone());
            self.image_changes += 1;
        }
        Ok(())
    }

    fn clear_image(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.photo.take().is_some() {
            self.image_changes += 1;
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.text != text {
            self.text = text.to_string();
            self.text_history.push(self.text.clone());
        }
        Ok(())
    }
}
