pub mod booking;

pub use booking::{Booking, BookingDraft, BookingEdit, BookingField, BookingId, DraftError, RoomType};
