use crate::image_classifier::interface::{Classification, ClassificationRequest, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::{resize_image_to_tensor, Normalization};
use crate::image_classifier::tract::labels::load_labels;
use crate::image_classifier::tract::scores::rank_output;
use crate::library::logger::interface::Logger;
use image::RgbImage;
use std::sync::Arc;
use tract_onnx::prelude::*;
use tract_onnx::tract_hir::internal::DimLike;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("tract_onnx");
        let labels = load_labels(&config.labels_path)?;
        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path.display(),
            labels.len()
        ))?;

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

/// (width, height) of a concrete `[1, 3, H, W]` input shape.
pub fn input_size(shape: &[TDim]) -> Result<(u32, u32), Box<dyn std::error::Error + Send + Sync>> {
    let dims = shape
        .iter()
        .map(|dim| dim.to_usize())
        .collect::<TractResult<Vec<usize>>>()
        .map_err(|_| format!("Model input shape {:?} is not concrete", shape))?;

    match dims.as_slice() {
        [1, 3, height, width] if *height > 0 && *width > 0 => {
            Ok((u32::try_from(*width)?, u32::try_from(*height)?))
        }
        _ => Err(format!("Unsupported model input shape {:?}", dims).into()),
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn new_request(
        &self,
    ) -> Result<Box<dyn ClassificationRequest + '_>, Box<dyn std::error::Error + Send + Sync>>
    {
        if self.labels.is_empty() {
            return Err("Model has no labels".into());
        }

        let fact = self.model.model().input_fact(0)?;
        let (width, height) = input_size(&fact.shape)?;

        Ok(Box::new(TractOnnxRequest {
            classifier: self,
            width,
            height,
        }))
    }
}

struct TractOnnxRequest<'a> {
    classifier: &'a ImageClassifierTractOnnx,
    width: u32,
    height: u32,
}

impl ClassificationRequest for TractOnnxRequest<'_> {
    fn perform(
        &self,
        pixels: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let config = &self.classifier.config;
        let normalization = Normalization {
            mean: config.mean,
            std: config.std,
        };

        let input = resize_image_to_tensor(pixels, self.width, self.height, normalization);
        let outputs = self.classifier.model.run(tvec!(input.into()))?;
        let output = outputs.first().ok_or("Model produced no outputs")?;
        let view = output.to_array_view::<f32>()?;

        let ranked = rank_output(view, &self.classifier.labels, config.apply_softmax)?;

        if let Some(top) = ranked.first() {
            self.classifier
                .logger
                .info(&format!("Top score {} ({})", top.label, top.confidence))?;
        }

        Ok(ranked)
    }
}
