use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::Slot;
use crate::site::{parser, SlotSource};
use crate::utils::error::FetchError;

/// Appointment search endpoint of the Paris téléservices portal.
pub const TELESERVICE_URL: &str = "https://teleservices.paris.fr/rdvtitres/jsp/site/Portal.jsp";

const MAX_RETRIES: u32 = 10;
const RETRY_PAUSE: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Hidden form fields the search page always posts, independent of the
// configured time window (06:00 and 21:00 expressed in day-minutes).
const FROM_DAY_MINUTE: &str = "360";
const TO_DAY_MINUTE: &str = "1260";

/// Production [`SlotSource`]: posts the appointment search form and parses
/// the returned availability page.
pub struct TeleserviceClient {
    http: Client,
    url: String,
    search: SearchParams,
}

#[derive(Debug, Clone)]
struct SearchParams {
    from_date: Option<NaiveDate>,
    to_date: NaiveDate,
    from_time: Option<NaiveTime>,
    to_time: Option<NaiveTime>,
    person_number: u32,
    days: BTreeSet<u8>,
}

impl TeleserviceClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Self::with_url(TELESERVICE_URL, config)
    }

    /// Same as [`TeleserviceClient::new`] but against an explicit endpoint.
    pub fn with_url(url: &str, config: &Config) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.to_owned(),
            search: SearchParams {
                from_date: config.from_date,
                to_date: config.to_date,
                from_time: config.from_time,
                to_time: config.to_time,
                person_number: config.person_number,
                days: config.days.clone(),
            },
        })
    }

    fn search_form(&self) -> Vec<(&'static str, String)> {
        let fmt_date = |d: NaiveDate| d.format("%d/%m/%Y").to_string();
        let fmt_time = |t: NaiveTime| t.format("%H:%M").to_string();

        let mut form = vec![
            ("page", "appointmentsearch".to_owned()),
            ("role", "none".to_owned()),
            (
                "from_date",
                self.search.from_date.map(fmt_date).unwrap_or_default(),
            ),
            (
                "from_time",
                self.search.from_time.map(fmt_time).unwrap_or_default(),
            ),
            ("to_date", fmt_date(self.search.to_date)),
            (
                "to_time",
                self.search.to_time.map(fmt_time).unwrap_or_default(),
            ),
            ("from_day_minute", FROM_DAY_MINUTE.to_owned()),
            ("to_day_minute", TO_DAY_MINUTE.to_owned()),
            ("nb_consecutive_slots", self.search.person_number.to_string()),
            ("action_search", "Rechercher".to_owned()),
        ];
        for day in &self.search.days {
            form.push(("days_of_week", day.to_string()));
        }
        form
    }

    async fn try_fetch(&self) -> Result<Vec<Slot>, FetchError> {
        let resp = self
            .http
            .post(&self.url)
            .form(&self.search_form())
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            warn!("booking site returned 404, treating as no availability");
            return Ok(Vec::new());
        }
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        parser::parse_appointments(&body, self.search.person_number)
    }
}

#[async_trait]
impl SlotSource for TeleserviceClient {
    /// Fetches the current candidate slots.
    ///
    /// Transport errors are retried up to ten times with a short pause; the
    /// upstream site drops connections regularly under load.
    /// Non-404 HTTP errors and parse failures are surfaced immediately.
    async fn fetch_slots(&self) -> Result<Vec<Slot>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.try_fetch().await {
                Ok(slots) => return Ok(slots),
                Err(FetchError::Request(err)) if attempt < MAX_RETRIES => {
                    attempt += 1;
                    debug!("attempt {attempt}/{MAX_RETRIES} to reach the booking site failed: {err}");
                    tokio::time::sleep(RETRY_PAUSE).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
