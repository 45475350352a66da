/// Booking collection endpoint, relative to the backend base URL
pub const BOOKINGS_PATH: &str = "/api/bookings";

/// Nights bounds (enforced by the UI only)
pub const MIN_NIGHTS: u32 = 1;
pub const MAX_NIGHTS: u32 = 60;

/// Rooms bounds (enforced by the UI only)
pub const MIN_ROOMS: u32 = 1;
pub const MAX_ROOMS: u32 = 20;

pub const DELETE_CONFIRMATION: &str = "Delete this booking?";
