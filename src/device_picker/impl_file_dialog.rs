use crate::device_picker::interface::{DevicePicker, PickerOutcome, Photo};
use crate::library::logger::interface::Logger;
use rfd::AsyncFileDialog;
use std::sync::Arc;

pub struct DevicePickerFileDialog {
    extensions: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DevicePickerFileDialog {
    pub fn new(extensions: Vec<String>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            extensions,
            logger: logger.with_namespace("picker").with_namespace("file_dialog"),
        }
    }
}

impl DevicePicker for DevicePickerFileDialog {
    fn pick(&self) -> Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening photo picker...")?;

        // The dialog itself runs on the UI thread; this worker waits for it.
        let dialog = AsyncFileDialog::new()
            .set_title("Choose a photo")
            .add_filter("Images", self.extensions.as_slice())
            .pick_file();

        let Some(file) = futures::executor::block_on(dialog) else {
            self.logger.info("Picker cancelled")?;
            return Ok(PickerOutcome::Cancelled);
        };

        let path = file.path();
        match image::open(path) {
            Ok(image) => {
                self.logger.info(&format!(
                    "Picked {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                ))?;
                Ok(PickerOutcome::Selected(Photo::new(image)))
            }
            Err(e) => {
                self.logger
                    .error(&format!("Unable to decode {}: {}", path.display(), e))?;
                Ok(PickerOutcome::NoImage)
            }
        }
    }
}
