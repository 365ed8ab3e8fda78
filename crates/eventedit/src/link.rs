//! Google Calendar "create event" links.
//!
//! Builds a URL that opens the event editor with the title, description,
//! dates and guests already filled in. Nothing is fetched or submitted; the
//! link is meant to be opened in a browser.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use eventedit::{event_edit_url, EventDetails};
//!
//! let event = EventDetails::new("Some event").with_guest("hello@example.com");
//! let url = event_edit_url(&Utc, &event);
//! assert_eq!(
//!     url.as_str(),
//!     "https://calendar.google.com/calendar/u/0/r/eventedit?text=Some%20event&details=&add=hello%40example.com"
//! );
//! ```

use std::sync::LazyLock;

use chrono::TimeZone;
use url::Url;

use crate::event::EventDetails;

/// Event editor page every link points at.
static EVENT_EDIT_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://calendar.google.com/calendar/u/0/r/eventedit")
        .expect("Invalid event edit URL")
});

/// Joins guest addresses into the `add` parameter value.
///
/// Returns `None` for an empty list so the parameter is left out entirely.
pub fn format_guests<S: AsRef<str>>(guests: &[S]) -> Option<String> {
    if guests.is_empty() {
        return None;
    }
    Some(
        guests
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Builds the prefilled event editor URL.
///
/// `text` and `details` are always present, even when empty. `dates` is
/// added when the duration resolves to something, `add` when there is at
/// least one guest. Every value is percent-encoded as a query component,
/// except the commas separating guests.
pub fn event_edit_url<Tz: TimeZone>(zone: &Tz, event: &EventDetails) -> Url {
    let dates = event.duration.resolve(zone);

    tracing::debug!(
        has_dates = dates.is_some(),
        guest_count = event.guests.len(),
        "Building event edit URL"
    );

    let mut params = vec![
        format!("text={}", urlencoding::encode(&event.title)),
        format!("details={}", urlencoding::encode(&event.details)),
    ];
    if let Some(dates) = dates {
        params.push(format!("dates={}", urlencoding::encode(&dates)));
    }

    // Guests are encoded one by one so the separators stay literal commas.
    let encoded_guests: Vec<_> = event
        .guests
        .iter()
        .map(|guest| urlencoding::encode(guest))
        .collect();
    if let Some(add) = format_guests(&encoded_guests) {
        params.push(format!("add={}", add));
    }

    let mut url = EVENT_EDIT_URL.clone();
    url.set_query(Some(&params.join("&")));

    tracing::trace!(url = %url, "Built event edit URL");
    url
}

/// Same as [`event_edit_url`], serialized to a string.
pub fn event_edit_url_string<Tz: TimeZone>(zone: &Tz, event: &EventDetails) -> String {
    event_edit_url(zone, event).into()
}
