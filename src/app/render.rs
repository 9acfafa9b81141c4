use crate::app::core::State;
use crate::device_display::interface::DeviceDisplay;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        match &state.photo {
            Some(photo) => device_display.show_image(photo)?,
            None => device_display.clear_image()?,
        }

        device_display.write_text(&state.display_text)?;

        Ok(())
    }
}
