// ============================================================================
// BOOKING FORM VIEWMODEL
// ============================================================================
// Submit flow for the creation form. Returns values and dispatches store
// actions; the hook owns the Yew state.
// ============================================================================

use crate::error::CREATE_FAILED;
use crate::models::Booking;
use crate::services::{ApiClient, BookingApi};
use crate::stores::{BookingFormAction, BookingFormStore};

pub struct BookingFormViewModel<A = ApiClient> {
    api: A,
}

impl BookingFormViewModel {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl<A: BookingApi> BookingFormViewModel<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Sends the draft once. Returns the created booking on success.
    pub async fn submit(
        &self,
        store: &BookingFormStore,
        dispatch: &dyn Fn(BookingFormAction),
    ) -> Option<Booking> {
        if store.loading {
            log::warn!("⚠️ Submit ignored, a creation request is already in flight");
            return None;
        }

        if let Err(e) = store.draft.validate() {
            log::warn!("⚠️ Draft rejected: {}", e);
            dispatch(BookingFormAction::Failed(e.to_string()));
            return None;
        }

        dispatch(BookingFormAction::SubmitStarted);

        match self.api.create_booking(&store.draft).await {
            Ok(booking) => {
                dispatch(BookingFormAction::Created);
                Some(booking)
            }
            Err(e) => {
                log::error!("❌ Error creating booking: {}", e);
                dispatch(BookingFormAction::Failed(e.user_message(CREATE_FAILED)));
                None
            }
        }
    }
}
