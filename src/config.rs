use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub model: ModelConfig,
    pub picker_extensions: Vec<String>,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            logger_timezone: utc(),
            model: ModelConfig::default(),
            picker_extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            window_title: "Truck".to_string(),
            window_size: [480.0, 640.0],
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
