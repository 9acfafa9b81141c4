use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (height, width) of the model input.
    pub input_shape: (u32, u32),
    pub mean: [f32; 3],
    pub std: [f32; 3],
    /// Set for models whose output is raw logits rather than probabilities.
    pub apply_softmax: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let models_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models");
        Self {
            onnx_model_path: models_dir.join("mobilenetv2-7.onnx"),
            labels_path: models_dir.join("imagenet_labels.txt"),
            input_shape: (224, 224),
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            apply_softmax: true,
        }
    }
}
