//! Prefilled Google Calendar "create event" links.
//!
//! Given an [`EventDetails`] and a timezone, [`event_edit_url`] builds a URL
//! that opens the calendar's event editor with the title, description,
//! dates and guests filled in.
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use eventedit::{event_edit_url, Duration, EventDetails};
//!
//! let start = DateTime::from_timestamp_millis(1_612_508_680_856).unwrap();
//! let event = EventDetails::new("Some event")
//!     .with_duration(Duration::TimeSpan { from: start, to: start });
//!
//! let url = event_edit_url(&Utc, &event);
//! assert_eq!(url.query_pairs().count(), 3);
//! assert!(url.as_str().ends_with("&dates=20210205T070440%2F20210205T070440"));
//! ```

pub mod event;
pub mod link;
pub mod time;
pub mod tracing;

pub use event::{Duration, EventDetails};
pub use link::{event_edit_url, event_edit_url_string, format_guests};
pub use time::format_timestamp;
pub use tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
