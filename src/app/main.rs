use crate::app::core::{init, transition, Effect, Event, State};
use crate::app::render::Render;
use crate::app::run_effect::RunEffect;
use crate::device_display::interface::DeviceDisplay;
use crate::device_picker::interface::DevicePicker;
use crate::image_classifier::inference_flow::InferenceFlow;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The foreground context. Owns the state; only this type applies events and
/// touches the display. Effects run on worker threads and report back through
/// the event channel.
pub struct App {
    state: State,
    logger: Arc<dyn Logger + Send + Sync>,
    render: Render,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
}

impl App {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_picker: Arc<dyn DevicePicker + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        inference_flow: Arc<InferenceFlow>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("app");

        Self {
            state: State::default(),
            run_effect: RunEffect::new(
                logger.clone(),
                device_picker,
                inference_flow,
                event_sender,
            ),
            render: Render::new(device_display),
            logger,
            event_receiver,
        }
    }

    pub fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (state, effects) = init();
        self.state = state;
        self.render.render(&self.state)?;
        self.spawn_effects(effects);
        Ok(())
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn dispatch(&mut self, event: Event) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info(&format!(
            "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
            self.state, event
        ));

        let (new_state, effects) = transition(self.state.clone(), event);

        let _ = self.logger.info(&format!(
            "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state, effects
        ));

        self.state = new_state;
        self.render.render(&self.state)?;
        self.spawn_effects(effects);

        Ok(())
    }

    /// Applies every event already delivered, without blocking. Returns how
    /// many were handled.
    pub fn pump(&mut self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut handled = 0;
        loop {
            match self.event_receiver.try_recv() {
                Ok(event) => {
                    self.dispatch(event)?;
                    handled += 1;
                }
                Err(TryRecvError::Empty) => return Ok(handled),
                Err(TryRecvError::Disconnected) => return Err("Event channel closed".into()),
            }
        }
    }

    /// Waits up to `timeout` for the next event and applies it. Returns false
    /// on timeout.
    pub fn process_next(
        &mut self,
        timeout: Duration,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event)?;
                Ok(true)
            }
            Err(RecvTimeoutError::Timeout) => Ok(false),
            Err(RecvTimeoutError::Disconnected) => Err("Event channel closed".into()),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
