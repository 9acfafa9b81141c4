use crate::device_display::interface::DeviceDisplay;
use crate::device_picker::interface::Photo;
use std::error::Error;

const WIDTH: usize = 32;

/// Prints the screen whenever it changes.
pub struct DeviceDisplayConsole {
    text: String,
    photo: Option<Photo>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            photo: None,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(WIDTH));
        let photo_line = match &self.photo {
            Some(photo) => format!("[photo {}x{}]", photo.image().width(), photo.image().height()),
            None => "[no photo]".to_string(),
        };
        println!("│{:<width$}│", photo_line, width = WIDTH);
        for line in self.text.lines() {
            let line: String = line.chars().take(WIDTH).collect();
            println!("│{:<width$}│", line, width = WIDTH);
        }
        println!("└{}┘", "─".repeat(WIDTH));
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show_image(&mut self, photo: &Photo) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.photo.as_ref() != Some(photo) {
            self.photo = Some(photo.clone());
            self.render_display();
        }
        Ok(())
    }

    fn clear_image(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.photo.take().is_some() {
            self.render_display();
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.text != text {
            self.text = text.to_string();
            self.render_display();
        }
        Ok(())
    }
}
