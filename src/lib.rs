pub mod app;
pub mod config;
pub mod device_display;
pub mod device_picker;
pub mod image_classifier;
pub mod library;
