use crate::device_picker::interface::{Photo, PickerOutcome};
use crate::image_classifier::interface::{ClassificationError, ClassificationResult};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub picker: PickerState,
    pub photo: Option<Photo>,
    pub display_text: String,
    pub pending_requests: usize,
    pub next_request_id: RequestId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    OpenPickerClicked,
    PickerDone(PickerOutcome),
    ClassifyDone {
        request_id: RequestId,
        result: Result<ClassificationResult, ClassificationError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    OpenPicker,
    Classify { request_id: RequestId, photo: Photo },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.picker, event) {
        (PickerState::Closed, Event::OpenPickerClicked) => (
            State {
                picker: PickerState::Open,
                ..state
            },
            vec![Effect::OpenPicker],
        ),
        // The picker is modal; a second click while it is up does nothing.
        (PickerState::Open, Event::OpenPickerClicked) => (state, vec![]),

        (_, Event::PickerDone(PickerOutcome::Selected(photo))) => {
            let request_id = state.next_request_id;
            (
                State {
                    picker: PickerState::Closed,
                    photo: Some(photo.clone()),
                    pending_requests: state.pending_requests + 1,
                    next_request_id: request_id + 1,
                    ..state
                },
                vec![Effect::Classify { request_id, photo }],
            )
        }
        (_, Event::PickerDone(PickerOutcome::Cancelled | PickerOutcome::NoImage)) => (
            State {
                picker: PickerState::Closed,
                ..state
            },
            vec![],
        ),

        // Requests are not ordered against each other: whichever finishes
        // last owns the text.
        (_, Event::ClassifyDone { result, .. }) => (
            State {
                display_text: display_text(&result),
                pending_requests: state.pending_requests.saturating_sub(1),
                ..state
            },
            vec![],
        ),
    }
}

pub fn display_text(result: &Result<ClassificationResult, ClassificationError>) -> String {
    match result {
        Ok(classification) => classification.to_string(),
        Err(error) => format!("Error: {}", error),
    }
}

impl State {
    pub fn is_busy(&self) -> bool {
        self.picker == PickerState::Open || self.pending_requests > 0
    }
}
