//! Extraction of appointment slots from the availability page.
//!
//! The page lists one block per office under `.nextAvailableAppointments`,
//! with the office name in an `h4`, the street address in a nested
//! paragraph, and one anchor per bookable datetime.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::Slot;
use crate::utils::datetime::parse_slot_datetime;
use crate::utils::error::FetchError;

/// Parses the availability page into slots.
///
/// Entries whose datetime text cannot be parsed are skipped with a debug
/// log; a malformed entry must not take down the whole tick. Anchors may
/// carry a `data-places` attribute with the consecutive-place count; when
/// absent, the count requested in the search form is assumed since the site
/// already filtered on it.
pub fn parse_appointments(html: &str, requested_places: u32) -> Result<Vec<Slot>, FetchError> {
    let document = Html::parse_document(html);
    let place_sel = selector(".nextAvailableAppointments > div")?;
    let location_sel = selector("h4")?;
    let address_sel = selector(":nth-child(2) > div > p")?;
    let slot_sel = selector("ul > li > a")?;

    let mut slots = Vec::new();
    for place in document.select(&place_sel) {
        let Some(location) = first_text(place, &location_sel) else {
            debug!("skipping a place block without a location heading");
            continue;
        };
        let address = first_text(place, &address_sel).unwrap_or_default();

        for entry in place.select(&slot_sel) {
            let text = element_text(entry);
            let Some((date, time)) = parse_slot_datetime(&text) else {
                debug!("skipping unparseable slot entry `{text}`");
                continue;
            };
            let places = entry
                .value()
                .attr("data-places")
                .and_then(|value| value.parse().ok())
                .unwrap_or(requested_places);
            slots.push(Slot {
                location: location.clone(),
                address: address.clone(),
                date,
                time,
                places,
            });
        }
    }
    Ok(slots)
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|err| FetchError::Parse(format!("bad selector `{css}`: {err}")))
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
