pub mod booking_form_viewmodel;
pub mod booking_list_viewmodel;

pub use booking_form_viewmodel::BookingFormViewModel;
pub use booking_list_viewmodel::BookingListViewModel;
