// ============================================================================
// API CLIENT - HTTP ONLY (stateless)
// ============================================================================
// No UI state in here. Every call maps the response onto ApiError so the
// view models decide what the user sees.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Booking, BookingDraft, BookingEdit, BookingId};
use crate::utils::constants::BOOKINGS_PATH;

/// Booking collection operations offered by the backend
#[async_trait(?Send)]
pub trait BookingApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError>;

    async fn create_booking(&self, draft: &BookingDraft) -> Result<Booking, ApiError>;

    /// Success/failure only, the response body is ignored
    async fn update_booking(&self, id: &BookingId, edit: &BookingEdit) -> Result<(), ApiError>;

    async fn delete_booking(&self, id: &BookingId) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn bookings_url(&self) -> String {
        format!("{}{}", self.base_url, BOOKINGS_PATH)
    }

    pub fn booking_url(&self, id: &BookingId) -> String {
        format!("{}{}/{}", self.base_url, BOOKINGS_PATH, id)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-2xx responses become `ApiError::Status` carrying the body text
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

#[async_trait(?Send)]
impl BookingApi for ApiClient {
    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let url = self.bookings_url();
        log::info!("📋 Loading bookings from {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_success(response).await?;

        let bookings = response
            .json::<Vec<Booking>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ {} bookings loaded", bookings.len());
        Ok(bookings)
    }

    async fn create_booking(&self, draft: &BookingDraft) -> Result<Booking, ApiError> {
        let url = self.bookings_url();
        log::info!("📝 Creating booking for {}", draft.guest_name);

        let response = Request::post(&url)
            .json(draft)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_success(response).await?;

        let booking = response
            .json::<Booking>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ Booking {} created", booking.id);
        Ok(booking)
    }

    async fn update_booking(&self, id: &BookingId, edit: &BookingEdit) -> Result<(), ApiError> {
        let url = self.booking_url(id);
        log::info!("✏️ Updating booking {}", id);

        let response = Request::put(&url)
            .json(edit)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await?;

        log::info!("✅ Booking {} updated", id);
        Ok(())
    }

    async fn delete_booking(&self, id: &BookingId) -> Result<(), ApiError> {
        let url = self.booking_url(id);
        log::info!("🗑️ Deleting booking {}", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await?;

        log::info!("✅ Booking {} deleted", id);
        Ok(())
    }
}
