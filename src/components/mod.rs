pub mod app;
pub mod booking_form;
pub mod booking_list;
pub mod booking_row;
pub mod fields;
pub mod header;

pub use app::App;
pub use booking_form::BookingForm;
pub use booking_list::BookingList;
pub use booking_row::{BookingEditRow, BookingRow};
pub use header::Header;
