use crate::device_picker::interface::Photo;
use std::error::Error;

/// The single screen: one photo and one text field.
pub trait DeviceDisplay: Send + Sync {
    fn show_image(&mut self, photo: &Photo) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn clear_image(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replaces the whole text field.
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
