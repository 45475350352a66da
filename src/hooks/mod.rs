pub mod use_booking_form;
pub mod use_booking_list;

pub use use_booking_form::{use_booking_form, UseBookingFormHandle};
pub use use_booking_list::{use_booking_list, UseBookingListHandle};
