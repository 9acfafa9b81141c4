use crate::image_classifier::impl_fake::{FakeOutcome, ImageClassifierFake};
use crate::image_classifier::interface::{
    Classification, ClassificationError, ClassificationResult,
};
use crate::image_classifier::test::fixture::{truck_photo, Fixture};
use image::{DynamicImage, Rgb, RgbaImage, Rgba, RgbImage};
use rand::Rng;

fn truck_scores() -> Vec<Classification> {
    vec![
        Classification::new("pickup_truck", 0.87),
        Classification::new("tow_truck", 0.09),
    ]
}

#[test]
fn test_classify_returns_top_result() {
    let f = Fixture::new(|logger| ImageClassifierFake::returning(logger, truck_scores()));

    let result = f.inference_flow.classify(&truck_photo());

    assert_eq!(
        result,
        Ok(ClassificationResult {
            label: "pickup_truck".to_string(),
            confidence: 0.87,
        })
    );
    assert_eq!(f.image_classifier.performed(), 1);
}

#[test]
fn test_classify_display_text() {
    let f = Fixture::new(|logger| ImageClassifierFake::returning(logger, truck_scores()));

    let result = f.inference_flow.classify(&truck_photo()).unwrap();

    assert_eq!(
        result.to_string(),
        "Prediction: pickup_truck \nConfidence: 0.87"
    );
}

#[test]
fn test_classify_random_images_yield_one_result_in_unit_range() {
    let f = Fixture::new(ImageClassifierFake::new);
    let mut rng = rand::rng();

    for _ in 0..20 {
        let width = rng.random_range(1..64);
        let height = rng.random_range(1..64);
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |_, _| {
            Rgba([rng.random(), rng.random(), rng.random(), rng.random()])
        }));

        let result = f.inference_flow.classify(&image).unwrap();
        assert!(!result.label.is_empty());
        assert!((0.0..=1.0).contains(&result.confidence));
    }
}

#[test]
fn test_classify_without_model_always_unavailable() {
    let flow = Fixture::without_model();

    for image in [
        truck_photo(),
        DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]))),
        DynamicImage::new_luma8(300, 200),
    ] {
        assert_eq!(
            flow.classify(&image),
            Err(ClassificationError::ModelUnavailable)
        );
    }
}

#[test]
fn test_classify_without_model_display_text() {
    let flow = Fixture::without_model();

    let error = flow.classify(&truck_photo()).unwrap_err();

    assert_eq!(format!("Error: {}", error), "Error: Model is not loaded");
}

#[test]
fn test_classify_empty_results() {
    let f = Fixture::new(|logger| ImageClassifierFake::returning(logger, vec![]));

    for image in [truck_photo(), DynamicImage::new_rgb8(3, 3)] {
        assert_eq!(
            f.inference_flow.classify(&image),
            Err(ClassificationError::NoResults)
        );
    }
}

#[test]
fn test_classify_unconvertible_image_checked_before_model() {
    let flow = Fixture::without_model();

    let result = flow.classify(&DynamicImage::new_rgb8(0, 0));

    assert!(matches!(result, Err(ClassificationError::ImageConversion(_))));
}

#[test]
fn test_classify_request_construction_failure() {
    let f = Fixture::new(|logger| {
        ImageClassifierFake::new(logger)
            .with_outcome(FakeOutcome::RequestFails("input is not an image".to_string()))
    });

    let result = f.inference_flow.classify(&truck_photo());

    assert_eq!(
        result,
        Err(ClassificationError::RequestConstruction(
            "input is not an image".to_string()
        ))
    );
    assert_eq!(f.image_classifier.performed(), 0);
}

#[test]
fn test_classify_execution_failure_reports_runtime_message() {
    let f = Fixture::new(|logger| {
        ImageClassifierFake::new(logger)
            .with_outcome(FakeOutcome::ExecutionFails("shape mismatch".to_string()))
    });

    let error = f.inference_flow.classify(&truck_photo()).unwrap_err();

    assert_eq!(
        error,
        ClassificationError::InferenceExecution("shape mismatch".to_string())
    );
    assert_eq!(format!("Error: {}", error), "Error: shape mismatch");
}

#[test]
fn test_classify_does_not_renormalize_confidence() {
    let f = Fixture::new(|logger| {
        ImageClassifierFake::returning(
            logger,
            vec![
                Classification::new("jeep", 0.3),
                Classification::new("minivan", 0.2),
            ],
        )
    });

    let result = f.inference_flow.classify(&truck_photo()).unwrap();

    assert_eq!(result.label, "jeep");
    assert_eq!(result.confidence, 0.3);
}
