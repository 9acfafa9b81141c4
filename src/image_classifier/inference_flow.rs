use crate::image_classifier::interface::{
    Classification, ClassificationError, ClassificationResult,
};
use crate::image_classifier::model_handle::ModelHandle;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, RgbImage};
use std::sync::Arc;

/// Turns one bitmap into one top-1 classification. Every call is independent;
/// failures are terminal for that call and never retried.
///
/// `classify` blocks for the duration of inference, so callers on the
/// interactive context run it from a worker (see `Effect::Classify`).
pub struct InferenceFlow {
    model: ModelHandle,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceFlow {
    pub fn new(model: ModelHandle, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            model,
            logger: logger.with_namespace("inference"),
        }
    }

    pub fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<ClassificationResult, ClassificationError> {
        let pixels = to_pixels(image).map_err(|e| self.fail(e))?;

        let classifier = self
            .model
            .classifier()
            .ok_or_else(|| self.fail(ClassificationError::ModelUnavailable))?;

        let request = classifier
            .new_request()
            .map_err(|e| self.fail(ClassificationError::RequestConstruction(e.to_string())))?;

        let classifications = request
            .perform(&pixels)
            .map_err(|e| self.fail(ClassificationError::InferenceExecution(e.to_string())))?;

        let top = top_classification(classifications)
            .ok_or_else(|| self.fail(ClassificationError::NoResults))?;

        let _ = self
            .logger
            .info(&format!("Classified as {} ({})", top.label, top.confidence));

        Ok(top.into())
    }

    fn fail(&self, error: ClassificationError) -> ClassificationError {
        let detail = match &error {
            ClassificationError::ImageConversion(detail)
            | ClassificationError::RequestConstruction(detail) => format!("{}: {}", error, detail),
            _ => error.to_string(),
        };
        let _ = self.logger.error(&detail);
        error
    }
}

/// Converts to the 8-bit RGB layout the models consume.
pub fn to_pixels(image: &DynamicImage) -> Result<RgbImage, ClassificationError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassificationError::ImageConversion(format!(
            "image has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }
    Ok(image.to_rgb8())
}

/// Highest finite confidence wins; ties keep the model's order.
pub fn top_classification(classifications: Vec<Classification>) -> Option<Classification> {
    classifications
        .into_iter()
        .filter(|c| c.confidence.is_finite())
        .reduce(|best, c| if c.confidence > best.confidence { c } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_rejects_empty_image() {
        let image = DynamicImage::new_rgb8(0, 10);
        assert!(matches!(
            to_pixels(&image),
            Err(ClassificationError::ImageConversion(_))
        ));
    }

    #[test]
    fn test_to_pixels_converts_rgba() {
        let image = DynamicImage::new_rgba8(4, 3);
        let pixels = to_pixels(&image).unwrap();
        assert_eq!(pixels.dimensions(), (4, 3));
    }

    #[test]
    fn test_top_classification_picks_highest() {
        let top = top_classification(vec![
            Classification::new("tow_truck", 0.09),
            Classification::new("pickup_truck", 0.87),
        ]);
        assert_eq!(top, Some(Classification::new("pickup_truck", 0.87)));
    }

    #[test]
    fn test_top_classification_keeps_first_on_tie() {
        let top = top_classification(vec![
            Classification::new("minivan", 0.5),
            Classification::new("jeep", 0.5),
        ]);
        assert_eq!(top.map(|c| c.label), Some("minivan".to_string()));
    }

    #[test]
    fn test_top_classification_empty_or_malformed() {
        assert_eq!(top_classification(vec![]), None);
        assert_eq!(
            top_classification(vec![Classification::new("jeep", f32::NAN)]),
            None
        );
    }
}
