use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::utils::constants::{MAX_NIGHTS, MAX_ROOMS, MIN_NIGHTS, MIN_ROOMS};
use crate::utils::format::parse_booking_date;

/// Backend-assigned identifier. The backend may send it as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => BookingId(n.to_string()),
            RawId::Text(s) => BookingId(s),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
        }
    }

    /// Select option label
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "suite" => Ok(RoomType::Suite),
            other => Err(format!("Unknown room type: {}", other)),
        }
    }
}

/// A booking as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub guest_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Raw value; display falls back to it when it can't be parsed
    pub start_date: String,
    pub duration_days: u32,
    pub rooms: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_type: RoomType,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub total_price: f64,
}

/// Missing and `null` both read as the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Editable fields shared by the creation draft and the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    GuestName,
    Email,
    StartDate,
    DurationDays,
    Rooms,
    RoomType,
    Notes,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Guest name is required")]
    MissingGuestName,

    #[error("Check-in date is required")]
    MissingStartDate,

    #[error("Check-in date is not a valid date: {0}")]
    InvalidStartDate(String),

    #[error("Nights must be between {} and {}", MIN_NIGHTS, MAX_NIGHTS)]
    NightsOutOfRange,

    #[error("Rooms must be between {} and {}", MIN_ROOMS, MAX_ROOMS)]
    RoomsOutOfRange,
}

/// Creation payload. Serialises to exactly the seven fields the backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub guest_name: String,
    pub email: String,
    pub start_date: String,
    pub duration_days: u32,
    pub rooms: u32,
    pub room_type: RoomType,
    pub notes: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            guest_name: String::new(),
            email: String::new(),
            start_date: String::new(),
            duration_days: MIN_NIGHTS,
            rooms: MIN_ROOMS,
            room_type: RoomType::Standard,
            notes: String::new(),
        }
    }
}

impl BookingDraft {
    /// Applies one keystroke. Numeric fields are coerced on every change.
    pub fn set(&mut self, field: BookingField, raw: &str) {
        match field {
            BookingField::GuestName => self.guest_name = raw.to_string(),
            BookingField::Email => self.email = raw.to_string(),
            BookingField::StartDate => self.start_date = raw.to_string(),
            BookingField::DurationDays => self.duration_days = coerce_count(raw),
            BookingField::Rooms => self.rooms = coerce_count(raw),
            BookingField::Notes => self.notes = raw.to_string(),
            BookingField::RoomType => match raw.parse() {
                Ok(room_type) => self.room_type = room_type,
                Err(e) => log::warn!("⚠️ {}", e),
            },
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.guest_name.trim().is_empty() {
            return Err(DraftError::MissingGuestName);
        }
        if self.start_date.trim().is_empty() {
            return Err(DraftError::MissingStartDate);
        }
        if parse_booking_date(&self.start_date).is_none() {
            return Err(DraftError::InvalidStartDate(self.start_date.clone()));
        }
        if !(MIN_NIGHTS..=MAX_NIGHTS).contains(&self.duration_days) {
            return Err(DraftError::NightsOutOfRange);
        }
        if !(MIN_ROOMS..=MAX_ROOMS).contains(&self.rooms) {
            return Err(DraftError::RoomsOutOfRange);
        }
        Ok(())
    }
}

/// Full update payload: the draft fields plus the backend's status tag,
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingEdit {
    #[serde(flatten)]
    pub fields: BookingDraft,
    pub status: String,
}

impl BookingEdit {
    pub fn set(&mut self, field: BookingField, raw: &str) {
        self.fields.set(field, raw);
    }

    pub fn set_status(&mut self, raw: &str) {
        self.status = raw.to_string();
    }
}

impl From<&Booking> for BookingEdit {
    fn from(booking: &Booking) -> Self {
        Self {
            fields: BookingDraft {
                guest_name: booking.guest_name.clone(),
                email: booking.email.clone().unwrap_or_default(),
                start_date: booking.start_date.clone(),
                duration_days: booking.duration_days,
                rooms: booking.rooms,
                room_type: booking.room_type,
                notes: booking.notes.clone().unwrap_or_default(),
            },
            status: booking.status.clone(),
        }
    }
}

/// Number inputs report "" or junk mid-typing; those read as 0 and are
/// caught by validation.
fn coerce_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            guest_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            start_date: "2025-03-14".to_string(),
            duration_days: 3,
            rooms: 2,
            room_type: RoomType::Deluxe,
            notes: "Late arrival".to_string(),
        }
    }

    #[test]
    fn draft_defaults() {
        let draft = BookingDraft::default();
        assert_eq!(draft.guest_name, "");
        assert_eq!(draft.duration_days, 1);
        assert_eq!(draft.rooms, 1);
        assert_eq!(draft.room_type, RoomType::Standard);
    }

    #[test]
    fn draft_serialises_exactly_the_creation_fields() {
        let value = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(
            value,
            json!({
                "guest_name": "Ada Lovelace",
                "email": "ada@example.com",
                "start_date": "2025-03-14",
                "duration_days": 3,
                "rooms": 2,
                "room_type": "deluxe",
                "notes": "Late arrival"
            })
        );
    }

    #[test]
    fn numeric_fields_are_coerced_on_input() {
        let mut draft = BookingDraft::default();
        draft.set(BookingField::DurationDays, "7");
        draft.set(BookingField::Rooms, "");
        assert_eq!(draft.duration_days, 7);
        assert_eq!(draft.rooms, 0);
        draft.set(BookingField::Rooms, "abc");
        assert_eq!(draft.rooms, 0);
    }

    #[test]
    fn unknown_room_type_keeps_previous_value() {
        let mut draft = BookingDraft::default();
        draft.set(BookingField::RoomType, "suite");
        assert_eq!(draft.room_type, RoomType::Suite);
        draft.set(BookingField::RoomType, "penthouse");
        assert_eq!(draft.room_type, RoomType::Suite);
    }

    #[test]
    fn validation_rules() {
        assert_eq!(valid_draft().validate(), Ok(()));

        let mut draft = valid_draft();
        draft.guest_name = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingGuestName));

        let mut draft = valid_draft();
        draft.start_date.clear();
        assert_eq!(draft.validate(), Err(DraftError::MissingStartDate));

        let mut draft = valid_draft();
        draft.start_date = "next tuesday".to_string();
        assert!(matches!(draft.validate(), Err(DraftError::InvalidStartDate(_))));

        let mut draft = valid_draft();
        draft.duration_days = 61;
        assert_eq!(draft.validate(), Err(DraftError::NightsOutOfRange));

        let mut draft = valid_draft();
        draft.rooms = 0;
        assert_eq!(draft.validate(), Err(DraftError::RoomsOutOfRange));

        let mut draft = valid_draft();
        draft.duration_days = 60;
        draft.rooms = 20;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn booking_accepts_numeric_id_and_missing_optionals() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 42,
            "guest_name": "Grace",
            "start_date": "2025-01-02",
            "duration_days": 2,
            "rooms": 1,
            "total_price": 199.5
        }))
        .unwrap();

        assert_eq!(booking.id, BookingId::new("42"));
        assert_eq!(booking.email, None);
        assert_eq!(booking.room_type, RoomType::Standard);
        assert_eq!(booking.status, "");
    }

    #[test]
    fn booking_tolerates_null_room_type_and_status() {
        let bookings: Vec<Booking> = serde_json::from_value(json!([{
            "id": 5,
            "guest_name": "Grace",
            "email": null,
            "start_date": "2025-01-02",
            "duration_days": 2,
            "rooms": 1,
            "room_type": null,
            "notes": null,
            "status": null,
            "total_price": 120.0
        }]))
        .unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].room_type, RoomType::Standard);
        assert_eq!(bookings[0].status, "");
        assert_eq!(BookingEdit::from(&bookings[0]).fields.room_type, RoomType::Standard);
    }

    #[test]
    fn booking_accepts_string_id() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b7d1",
            "guest_name": "Grace",
            "email": null,
            "start_date": "2025-01-02",
            "duration_days": 2,
            "rooms": 1,
            "room_type": "suite",
            "notes": "Quiet room",
            "status": "confirmed",
            "total_price": 450.0
        }))
        .unwrap();

        assert_eq!(booking.id.as_str(), "b7d1");
        assert_eq!(booking.room_type, RoomType::Suite);
        assert_eq!(booking.status, "confirmed");
    }

    #[test]
    fn edit_form_is_prefilled_from_booking() {
        let booking = Booking {
            id: BookingId::new("9"),
            guest_name: "Grace".to_string(),
            email: None,
            start_date: "2025-01-02".to_string(),
            duration_days: 2,
            rooms: 2,
            room_type: RoomType::Deluxe,
            notes: None,
            status: "pending".to_string(),
            total_price: 300.0,
        };

        let edit = BookingEdit::from(&booking);
        assert_eq!(edit.fields.email, "");
        assert_eq!(edit.fields.notes, "");
        assert_eq!(edit.fields.rooms, 2);
        assert_eq!(edit.status, "pending");

        let value = serde_json::to_value(&edit).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["room_type"], "deluxe");
        assert!(value.get("id").is_none());
        assert!(value.get("total_price").is_none());
    }
}
