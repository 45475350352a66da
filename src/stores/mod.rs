pub mod booking_form_store;
pub mod booking_list_store;

pub use booking_form_store::{BookingFormAction, BookingFormStore};
pub use booking_list_store::{BookingListAction, BookingListStore, EditSession, ListPhase};
