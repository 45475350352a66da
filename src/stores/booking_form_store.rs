// ============================================================================
// BOOKING FORM STORE
// ============================================================================
// Draft + in-flight flag + inline error. Driven through use_reducer so async
// completions always apply to the latest state.
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{BookingDraft, BookingField};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFormStore {
    pub draft: BookingDraft,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every reset; keys inputs that hold DOM-side state
    pub generation: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingFormAction {
    SetField(BookingField, String),
    SubmitStarted,
    /// The backend accepted the draft
    Created,
    Failed(String),
}

impl Reducible for BookingFormStore {
    type Action = BookingFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingFormAction::SetField(field, value) => next.draft.set(field, &value),
            BookingFormAction::SubmitStarted => {
                next.loading = true;
                next.error = None;
            }
            BookingFormAction::Created => {
                next.draft = BookingDraft::default();
                next.generation = next.generation.wrapping_add(1);
                next.loading = false;
                next.error = None;
            }
            // The draft stays so the user can retry without retyping
            BookingFormAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}
