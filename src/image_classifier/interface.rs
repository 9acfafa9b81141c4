use image::RgbImage;
use std::error::Error;
use std::fmt;

/// One labelled score as reported by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// The single top-ranked classification shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f32,
}

impl From<Classification> for ClassificationResult {
    fn from(classification: Classification) -> Self {
        Self {
            label: classification.label,
            confidence: classification.confidence,
        }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prediction: {} \nConfidence: {}",
            self.label,
            format_confidence(self.confidence)
        )
    }
}

/// Shortest round-trip digits with a fractional part always present. Tiny and
/// huge magnitudes switch to a signed two-digit exponent (`1e-05`).
fn format_confidence(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude < 1e-4 || magnitude > 16_777_216.0) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exponent) => {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
                }
                Err(_) => formatted,
            },
            None => formatted,
        };
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    #[error("Unable to convert image")]
    ImageConversion(String),
    #[error("Model is not loaded")]
    ModelUnavailable,
    #[error("Unable to build inference request")]
    RequestConstruction(String),
    #[error("{0}")]
    InferenceExecution(String),
    #[error("Unexpected results")]
    NoResults,
}

/// A loaded classifier. Each classification builds one request bound to it.
pub trait ImageClassifier: Send + Sync {
    fn new_request(
        &self,
    ) -> Result<Box<dyn ClassificationRequest + '_>, Box<dyn Error + Send + Sync>>;
}

pub trait ClassificationRequest {
    /// Runs the model synchronously and returns its scores, ranked best first.
    fn perform(
        &self,
        pixels: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn Error + Send + Sync>>;
}
