use image::DynamicImage;
use std::fmt;
use std::sync::Arc;

/// A decoded photo shared between the display and the inference worker.
#[derive(Clone)]
pub struct Photo(pub Arc<DynamicImage>);

impl Photo {
    pub fn new(image: DynamicImage) -> Self {
        Self(Arc::new(image))
    }

    pub fn image(&self) -> &DynamicImage {
        &self.0
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo({}x{})", self.0.width(), self.0.height())
    }
}

/// Same photo, not same pixels.
impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    Selected(Photo),
    Cancelled,
    /// The user picked something but no usable image came back.
    NoImage,
}

pub trait DevicePicker: Send + Sync {
    /// Presents the selection surface and blocks until it is dismissed.
    fn pick(&self) -> Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>>;
}
