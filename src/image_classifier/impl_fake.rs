use crate::image_classifier::interface::{Classification, ClassificationRequest, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const RANDOM_LABELS: [&str; 12] = [
    "pickup_truck",
    "tow_truck",
    "trailer_truck",
    "fire_engine",
    "garbage_truck",
    "minivan",
    "jeep",
    "moving_van",
    "police_van",
    "sports_car",
    "golden_retriever",
    "tabby",
];

#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Classifications(Vec<Classification>),
    Random,
    RequestFails(String),
    ExecutionFails(String),
    Panics(String),
}

#[derive(Debug, Clone)]
struct FakeResponse {
    width: Option<u32>,
    delay: Duration,
    outcome: FakeOutcome,
}

/// Classifier that answers from a script. Responses registered with
/// `when_width` apply to images of that width, everything else gets the
/// default outcome.
pub struct ImageClassifierFake {
    default: FakeResponse,
    by_width: Vec<FakeResponse>,
    performed: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            default: FakeResponse {
                width: None,
                delay: Duration::ZERO,
                outcome: FakeOutcome::Random,
            },
            by_width: Vec::new(),
            performed: AtomicUsize::new(0),
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    pub fn returning(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        Self::new(logger).with_outcome(FakeOutcome::Classifications(classifications))
    }

    pub fn with_outcome(mut self, outcome: FakeOutcome) -> Self {
        self.default.outcome = outcome;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.default.delay = delay;
        self
    }

    pub fn when_width(
        mut self,
        width: u32,
        delay: Duration,
        classifications: Vec<Classification>,
    ) -> Self {
        self.by_width.push(FakeResponse {
            width: Some(width),
            delay,
            outcome: FakeOutcome::Classifications(classifications),
        });
        self
    }

    /// Number of requests that reached execution.
    pub fn performed(&self) -> usize {
        self.performed.load(Ordering::SeqCst)
    }

    fn response_for(&self, pixels: &RgbImage) -> &FakeResponse {
        self.by_width
            .iter()
            .find(|response| response.width == Some(pixels.width()))
            .unwrap_or(&self.default)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn new_request(
        &self,
    ) -> Result<Box<dyn ClassificationRequest + '_>, Box<dyn std::error::Error + Send + Sync>>
    {
        if let FakeOutcome::RequestFails(message) = &self.default.outcome {
            return Err(message.clone().into());
        }
        Ok(Box::new(FakeRequest { classifier: self }))
    }
}

struct FakeRequest<'a> {
    classifier: &'a ImageClassifierFake,
}

impl ClassificationRequest for FakeRequest<'_> {
    fn perform(
        &self,
        pixels: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let classifier = self.classifier;
        classifier.performed.fetch_add(1, Ordering::SeqCst);
        classifier.logger.info(&format!(
            "Classifying {}x{} image...",
            pixels.width(),
            pixels.height()
        ))?;

        let response = classifier.response_for(pixels);
        if !response.delay.is_zero() {
            std::thread::sleep(response.delay);
        }

        match &response.outcome {
            FakeOutcome::Classifications(classifications) => Ok(classifications.clone()),
            FakeOutcome::Random => random_classifications(),
            FakeOutcome::RequestFails(message) | FakeOutcome::ExecutionFails(message) => {
                Err(message.clone().into())
            }
            FakeOutcome::Panics(message) => panic!("{}", message),
        }
    }
}

fn random_classifications() -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>
{
    let mut rng = rand::rng();
    let index_dist = Uniform::new(0, RANDOM_LABELS.len())?;
    let confidence_dist = Uniform::new(0.0f32, 1.0)?;

    let mut classifications: Vec<Classification> = (0..3)
        .map(|_| Classification {
            label: RANDOM_LABELS[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        })
        .collect();
    classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    Ok(classifications)
}
