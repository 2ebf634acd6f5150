/// HTTP client for the booking site's appointment search
pub mod client;
/// Extraction of slots from the availability page
pub mod parser;

pub use client::TeleserviceClient;

use async_trait::async_trait;

use crate::models::Slot;
use crate::utils::error::FetchError;

/// Where candidate slots come from. The polling loop only depends on this
/// interface, so tests can script arbitrary tick sequences.
#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch_slots(&self) -> Result<Vec<Slot>, FetchError>;
}
