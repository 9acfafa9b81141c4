use crate::app::core::{Effect, Event};
use crate::device_picker::interface::{DevicePicker, PickerOutcome};
use crate::image_classifier::inference_flow::InferenceFlow;
use crate::image_classifier::interface::ClassificationError;
use crate::library::logger::interface::Logger;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs one effect to completion on the calling (worker) thread and sends the
/// outcome back to the foreground loop.
#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    device_picker: Arc<dyn DevicePicker + Send + Sync>,
    inference_flow: Arc<InferenceFlow>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_picker: Arc<dyn DevicePicker + Send + Sync>,
        inference_flow: Arc<InferenceFlow>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            device_picker,
            inference_flow,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        let event = match effect {
            Effect::OpenPicker => {
                let outcome = self.device_picker.pick().unwrap_or_else(|e| {
                    let _ = self.logger.error(&format!("Picker failed: {}", e));
                    PickerOutcome::NoImage
                });
                Event::PickerDone(outcome)
            }
            Effect::Classify { request_id, photo } => {
                // A panicking model must still resolve the request.
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    self.inference_flow.classify(photo.image())
                }))
                .unwrap_or_else(|payload| {
                    let message = panic_message(payload.as_ref());
                    let _ = self
                        .logger
                        .error(&format!("Classification {} panicked: {}", request_id, message));
                    Err(ClassificationError::InferenceExecution(message))
                });
                Event::ClassifyDone { request_id, result }
            }
        };

        if self.event_sender.send(event).is_err() {
            let _ = self.logger.info("Foreground loop is gone, dropping result");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Inference panicked".to_string()
    }
}
