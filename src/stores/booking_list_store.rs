// ============================================================================
// BOOKING LIST STORE
// ============================================================================
// Fetched collection + the single row being edited. Nothing survives a
// remount: the component key changes and this starts from Loading again.
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{Booking, BookingEdit, BookingField, BookingId};

#[derive(Clone, Debug, PartialEq)]
pub enum ListPhase {
    Loading,
    Failed(String),
    Ready(Vec<Booking>),
}

/// At most one row is editable at a time
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    pub id: BookingId,
    pub form: BookingEdit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingListStore {
    pub phase: ListPhase,
    pub editing: Option<EditSession>,
}

impl Default for BookingListStore {
    fn default() -> Self {
        Self {
            phase: ListPhase::Loading,
            editing: None,
        }
    }
}

impl BookingListStore {
    pub fn bookings(&self) -> &[Booking] {
        match &self.phase {
            ListPhase::Ready(bookings) => bookings,
            _ => &[],
        }
    }

    pub fn is_editing(&self, id: &BookingId) -> bool {
        self.editing.as_ref().is_some_and(|session| &session.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingListAction {
    FetchStarted,
    Loaded(Vec<Booking>),
    FetchFailed(String),
    StartEdit(Booking),
    EditField(BookingField, String),
    EditStatus(String),
    CancelEdit,
    EditSaved,
}

impl Reducible for BookingListStore {
    type Action = BookingListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingListAction::FetchStarted => next.phase = ListPhase::Loading,
            BookingListAction::Loaded(bookings) => {
                // The edited row may have been deleted elsewhere
                if let Some(session) = &next.editing {
                    if !bookings.iter().any(|booking| booking.id == session.id) {
                        next.editing = None;
                    }
                }
                next.phase = ListPhase::Ready(bookings);
            }
            BookingListAction::FetchFailed(message) => next.phase = ListPhase::Failed(message),
            BookingListAction::StartEdit(booking) => {
                next.editing = Some(EditSession {
                    id: booking.id.clone(),
                    form: BookingEdit::from(&booking),
                });
            }
            BookingListAction::EditField(field, value) => {
                if let Some(session) = next.editing.as_mut() {
                    session.form.set(field, &value);
                }
            }
            BookingListAction::EditStatus(value) => {
                if let Some(session) = next.editing.as_mut() {
                    session.form.set_status(&value);
                }
            }
            BookingListAction::CancelEdit | BookingListAction::EditSaved => next.editing = None,
        }
        Rc::new(next)
    }
}
