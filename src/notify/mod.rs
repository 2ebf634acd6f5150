/// Telegram delivery of slot notifications
pub mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;

use crate::models::Slot;
use crate::utils::error::NotifyError;

/// Delivery channel for qualifying slots. The polling loop only depends on
/// this interface; tests record sends instead of talking to Telegram.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, slot: &Slot) -> Result<(), NotifyError>;
}
