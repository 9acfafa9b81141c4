use crate::device_display::interface::DeviceDisplay;
use crate::device_picker::interface::Photo;
use std::error::Error;

/// Mirrors every write to each display in order.
pub struct DeviceDisplayMulti {
    displays: Vec<Box<dyn DeviceDisplay + Send + Sync>>,
}

impl DeviceDisplayMulti {
    pub fn new(displays: Vec<Box<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { displays }
    }
}

impl DeviceDisplay for DeviceDisplayMulti {
    fn show_image(&mut self, photo: &Photo) -> Result<(), Box<dyn Error + Send + Sync>> {
        for display in &mut self.displays {
            display.show_image(photo)?;
        }
        Ok(())
    }

    fn clear_image(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        for display in &mut self.displays {
            display.clear_image()?;
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        for display in &mut self.displays {
            display.write_text(text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_display::impl_gui::DeviceDisplayGui;
    use image::DynamicImage;

    #[test]
    fn test_writes_reach_every_display() {
        let first = DeviceDisplayGui::new();
        let second = DeviceDisplayGui::new();
        let displays: Vec<Box<dyn DeviceDisplay + Send + Sync>> =
            vec![Box::new(first.clone()), Box::new(second.clone())];
        let mut multi = DeviceDisplayMulti::new(displays);

        multi.write_text("Error: Unexpected results").unwrap();
        multi
            .show_image(&Photo::new(DynamicImage::new_rgb8(1, 1)))
            .unwrap();

        assert_eq!(first.text(), "Error: Unexpected results");
        assert_eq!(second.text(), "Error: Unexpected results");
    }
}
