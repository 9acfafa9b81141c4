use crate::device_picker::interface::{DevicePicker, PickerOutcome};
use crate::library::logger::interface::Logger;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Replays queued outcomes in order, then reports cancellation.
pub struct DevicePickerFake {
    outcomes: Mutex<VecDeque<PickerOutcome>>,
    presented: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DevicePickerFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            presented: AtomicUsize::new(0),
            logger: logger.with_namespace("picker").with_namespace("fake"),
        }
    }

    pub fn push_outcome(&self, outcome: PickerOutcome) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    pub fn presented(&self) -> usize {
        self.presented.load(Ordering::SeqCst)
    }
}

impl DevicePicker for DevicePickerFake {
    fn pick(&self) -> Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.presented.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .outcomes
            .lock()
            .map_err(|e| e.to_string())?
            .pop_front()
            .unwrap_or(PickerOutcome::Cancelled);
        self.logger.info(&format!("Picker outcome {:?}", outcome))?;
        Ok(outcome)
    }
}
