// ============================================================================
// BOOKING LIST VIEWMODEL
// ============================================================================
// Read / update / delete. Every successful mutation is followed by a full
// re-fetch; nothing is patched locally, so server-computed fields (price,
// status) always come from the backend.
// ============================================================================

use crate::error::{DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED};
use crate::models::BookingId;
use crate::services::{ApiClient, BookingApi, BrowserDialogs, Dialogs};
use crate::stores::{BookingListAction, EditSession};
use crate::utils::constants::DELETE_CONFIRMATION;

pub struct BookingListViewModel<A = ApiClient, D = BrowserDialogs> {
    api: A,
    dialogs: D,
}

impl BookingListViewModel {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), BrowserDialogs)
    }
}

impl<A: BookingApi, D: Dialogs> BookingListViewModel<A, D> {
    pub fn with(api: A, dialogs: D) -> Self {
        Self { api, dialogs }
    }

    pub async fn refresh(&self, dispatch: &dyn Fn(BookingListAction)) {
        dispatch(BookingListAction::FetchStarted);
        match self.api.list_bookings().await {
            Ok(bookings) => dispatch(BookingListAction::Loaded(bookings)),
            Err(e) => {
                log::error!("❌ Error loading bookings: {}", e);
                dispatch(BookingListAction::FetchFailed(e.user_message(LOAD_FAILED)));
            }
        }
    }

    /// Sends the full edit form. On failure the edit stays open.
    pub async fn save_edit(&self, session: &EditSession, dispatch: &dyn Fn(BookingListAction)) -> bool {
        match self.api.update_booking(&session.id, &session.form).await {
            Ok(()) => {
                dispatch(BookingListAction::EditSaved);
                self.refresh(dispatch).await;
                true
            }
            Err(e) => {
                log::error!("❌ Error updating booking {}: {}", session.id, e);
                self.dialogs.alert(&e.user_message(UPDATE_FAILED));
                false
            }
        }
    }

    /// Asks first; declining sends nothing
    pub async fn remove(&self, id: &BookingId, dispatch: &dyn Fn(BookingListAction)) -> bool {
        if !self.dialogs.confirm(DELETE_CONFIRMATION) {
            log::info!("↩️ Delete of booking {} cancelled", id);
            return false;
        }

        match self.api.delete_booking(id).await {
            Ok(()) => {
                self.refresh(dispatch).await;
                true
            }
            Err(e) => {
                log::error!("❌ Error deleting booking {}: {}", id, e);
                self.dialogs.alert(&e.user_message(DELETE_FAILED));
                false
            }
        }
    }
}
