use async_trait::async_trait;
use teloxide::types::{ChatId, ParseMode};
use teloxide::{prelude::*, Bot};

use crate::config::TelegramTarget;
use crate::models::Slot;
use crate::notify::Notifier;
use crate::utils::datetime::format_slot_datetime;
use crate::utils::error::NotifyError;
use crate::utils::html::escape_html;

/// Search page users land on to actually book the slot.
const BOOKING_PAGE: &str =
    "https://teleservices.paris.fr/rdvtitres/jsp/site/Portal.jsp?page=appointmentsearch&view=search&category=titres";

/// Sends one HTML-mode Telegram message per qualifying slot.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(target: &TelegramTarget) -> Self {
        Self {
            bot: Bot::new(target.token.clone()),
            chat_id: ChatId(target.chat_id),
        }
    }

    fn message_for(slot: &Slot) -> String {
        format!(
            "Rendez-vous ! <b>{}</b>\n<b>{}</b>\n{}\n{}",
            format_slot_datetime(slot.date, slot.time),
            escape_html(&slot.location),
            escape_html(&slot.address),
            BOOKING_PAGE
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, slot: &Slot) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, Self::message_for(slot))
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }
}
