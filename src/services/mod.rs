pub mod api_client;
pub mod dialogs;

pub use api_client::{ApiClient, BookingApi};
pub use dialogs::{BrowserDialogs, Dialogs};
