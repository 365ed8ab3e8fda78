//! Event draft types.
//!
//! - [`EventDetails`]: everything needed to prefill the event editor
//! - [`Duration`]: how the event's dates are specified, if at all

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::time::format_timestamp;

/// Date specification for a prefilled event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Duration {
    /// Leave the dates empty so the user picks them in the editor.
    #[default]
    NoDurationLetUserChoose,
    /// An explicit start and end instant.
    TimeSpan {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    /// A literal date or date range passed through verbatim.
    ///
    /// Nothing checks the format. All-day events use `YYYYMMDD/YYYYMMDD`,
    /// see [`Duration::all_day`].
    CustomDates(String),
}

impl Duration {
    /// Creates a `TimeSpan` from instants in any timezone.
    pub fn time_span<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> Self {
        Self::TimeSpan {
            from: from.with_timezone(&Utc),
            to: to.with_timezone(&Utc),
        }
    }

    /// Creates an all-day range covering `first_day` through `last_day`.
    ///
    /// The calendar reads the end of the range as exclusive, so the literal
    /// ends on the day after `last_day`.
    pub fn all_day(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        let end = last_day.succ_opt().unwrap_or(last_day);
        Self::CustomDates(format!(
            "{}/{}",
            first_day.format("%Y%m%d"),
            end.format("%Y%m%d")
        ))
    }

    /// Returns `true` if the user is left to choose the dates.
    pub fn is_let_user_choose(&self) -> bool {
        matches!(self, Self::NoDurationLetUserChoose)
    }

    /// Returns `true` if this is an explicit time span.
    pub fn is_time_span(&self) -> bool {
        matches!(self, Self::TimeSpan { .. })
    }

    /// Returns `true` if this is a custom date literal.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::CustomDates(_))
    }

    /// Resolves the value of the `dates` query parameter.
    ///
    /// Time spans are rendered as `start/end` timestamps localized to `zone`.
    /// Custom literals are returned unchanged.
    pub fn resolve<Tz: TimeZone>(&self, zone: &Tz) -> Option<String> {
        match self {
            Self::NoDurationLetUserChoose => None,
            Self::TimeSpan { from, to } => Some(format!(
                "{}/{}",
                format_timestamp(zone, from),
                format_timestamp(zone, to)
            )),
            Self::CustomDates(dates) => Some(dates.clone()),
        }
    }
}

/// The fields used to prefill a new calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event title.
    pub title: String,
    /// How the event's dates are set.
    #[serde(default)]
    pub duration: Duration,
    /// Free-text description. May contain newlines and HTML.
    #[serde(default)]
    pub details: String,
    /// Guest email addresses, in invitation order.
    #[serde(default)]
    pub guests: Vec<String>,
}

impl EventDetails {
    /// Creates an event with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: Duration::default(),
            details: String::new(),
            guests: Vec::new(),
        }
    }

    /// Sets the date specification.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Appends a guest.
    #[must_use]
    pub fn with_guest(mut self, guest: impl Into<String>) -> Self {
        self.guests.push(guest.into());
        self
    }

    /// Appends several guests, keeping their order.
    #[must_use]
    pub fn with_guests<I, S>(mut self, guests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guests.extend(guests.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod duration {
        use super::*;

        #[test]
        fn default_lets_user_choose() {
            let duration = Duration::default();
            assert!(duration.is_let_user_choose());
            assert!(!duration.is_time_span());
            assert!(!duration.is_custom());
        }

        #[test]
        fn let_user_choose_resolves_to_none() {
            assert_eq!(Duration::NoDurationLetUserChoose.resolve(&Utc), None);
        }

        #[test]
        fn time_span_resolves_to_range() {
            let duration = Duration::TimeSpan {
                from: utc(2024, 3, 1, 9, 0, 0),
                to: utc(2024, 3, 1, 10, 30, 0),
            };
            assert_eq!(
                duration.resolve(&Utc).as_deref(),
                Some("20240301T090000/20240301T103000")
            );
        }

        #[test]
        fn time_span_uses_supplied_zone() {
            let duration = Duration::TimeSpan {
                from: utc(2024, 3, 1, 22, 0, 0),
                to: utc(2024, 3, 1, 23, 0, 0),
            };
            let paris = FixedOffset::east_opt(3600).unwrap();
            assert_eq!(
                duration.resolve(&paris).as_deref(),
                Some("20240301T230000/20240302T000000")
            );
        }

        #[test]
        fn time_span_constructor_normalizes_to_utc() {
            let offset = FixedOffset::east_opt(2 * 3600).unwrap();
            let from = offset.with_ymd_and_hms(2024, 5, 10, 14, 0, 0).unwrap();
            let to = offset.with_ymd_and_hms(2024, 5, 10, 15, 0, 0).unwrap();

            let duration = Duration::time_span(from, to);
            assert!(duration.is_time_span());
            assert_eq!(
                duration,
                Duration::TimeSpan {
                    from: utc(2024, 5, 10, 12, 0, 0),
                    to: utc(2024, 5, 10, 13, 0, 0),
                }
            );
        }

        #[test]
        fn custom_dates_pass_through_unchanged() {
            let duration = Duration::CustomDates("not really a date".to_string());
            assert!(duration.is_custom());
            assert_eq!(duration.resolve(&Utc).as_deref(), Some("not really a date"));
        }

        #[test]
        fn custom_dates_ignore_zone() {
            let duration = Duration::CustomDates("20240101/20240102".to_string());
            let offset = FixedOffset::west_opt(8 * 3600).unwrap();
            assert_eq!(
                duration.resolve(&offset).as_deref(),
                Some("20240101/20240102")
            );
        }

        #[test]
        fn all_day_single_day_has_exclusive_end() {
            let duration = Duration::all_day(date(2024, 1, 1), date(2024, 1, 1));
            assert_eq!(
                duration,
                Duration::CustomDates("20240101/20240102".to_string())
            );
        }

        #[test]
        fn all_day_spans_month_boundary() {
            let duration = Duration::all_day(date(2024, 2, 27), date(2024, 2, 29));
            assert_eq!(duration.resolve(&Utc).as_deref(), Some("20240227/20240301"));
        }
    }

    mod details {
        use super::*;

        #[test]
        fn new_has_empty_fields() {
            let event = EventDetails::new("Standup");
            assert_eq!(event.title, "Standup");
            assert!(event.details.is_empty());
            assert!(event.guests.is_empty());
            assert!(event.duration.is_let_user_choose());
        }

        #[test]
        fn builders_set_fields() {
            let event = EventDetails::new("Planning")
                .with_details("Agenda")
                .with_duration(Duration::CustomDates("20240101".to_string()))
                .with_guest("a@example.com")
                .with_guests(["b@example.com", "c@example.com"]);

            assert_eq!(event.details, "Agenda");
            assert!(event.duration.is_custom());
            assert_eq!(
                event.guests,
                vec!["a@example.com", "b@example.com", "c@example.com"]
            );
        }

        #[test]
        fn serializes_with_tagged_duration() {
            let event = EventDetails::new("Review").with_duration(Duration::TimeSpan {
                from: utc(2024, 4, 2, 8, 0, 0),
                to: utc(2024, 4, 2, 9, 0, 0),
            });

            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "title": "Review",
                    "duration": {
                        "type": "TimeSpan",
                        "value": {
                            "from": "2024-04-02T08:00:00Z",
                            "to": "2024-04-02T09:00:00Z"
                        }
                    },
                    "details": "",
                    "guests": []
                })
            );
        }

        #[test]
        fn deserializes_with_defaults() {
            let event: EventDetails = serde_json::from_str(r#"{"title": "Lunch"}"#).unwrap();
            assert_eq!(event, EventDetails::new("Lunch"));
        }

        #[test]
        fn roundtrips_custom_dates() {
            let event = EventDetails::new("Offsite")
                .with_duration(Duration::all_day(date(2024, 6, 3), date(2024, 6, 5)))
                .with_guest("team@example.com");

            let json = serde_json::to_string(&event).unwrap();
            let back: EventDetails = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
