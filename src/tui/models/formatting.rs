//! Formatting helpers for location table cells.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::model::Location;

/// `MM-DD HH:mm:ss:SSS`
const TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S:%3f";

/// Format latitude/longitude rounded to 6 decimal places.
pub(crate) fn format_coordinate(latitude: f64, longitude: f64) -> String {
    format!("{:.6}, {:.6}", latitude, longitude)
}

/// Format an instant as `MM-DD HH:mm:ss:SSS` in local time.
pub(crate) fn format_timestamp(instant: &DateTime<Utc>) -> String {
    format_naive(instant.with_timezone(&Local).naive_local())
}

fn format_naive(local: NaiveDateTime) -> String {
    local.format(TIMESTAMP_FORMAT).to_string()
}

/// Format the event tag. Geofence events carry the transition details;
/// other tags render verbatim; no tag renders empty.
pub(crate) fn format_event(location: &Location) -> String {
    match (location.event.as_deref(), location.geofence.as_ref()) {
        (Some("geofence"), Some(geofence)) => {
            format!("geofence: {} {}", geofence.action, geofence.identifier)
        }
        (Some(event), _) => event.to_string(),
        (None, _) => String::new(),
    }
}

/// Format motion activity with its confidence percentage.
pub(crate) fn format_activity(activity_type: &str, confidence: u8) -> String {
    format!("{} ({}%)", activity_type, confidence)
}

/// Format a 0..=1 battery fraction as an integer percentage.
pub(crate) fn format_battery(level: f64) -> String {
    format!("{:.0}%", level * 100.0)
}

/// Booleans render as literal strings, matching the wire representation.
pub(crate) fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::Geofence;

    #[test]
    fn coordinate_rounds_to_six_places() {
        assert_eq!(
            format_coordinate(37.1234567, -122.7654321),
            "37.123457, -122.765432"
        );
    }

    #[test]
    fn timestamp_pattern_includes_milliseconds() {
        let local = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 42)
            .unwrap();
        assert_eq!(format_naive(local), "03-07 14:05:09:042");
    }

    #[test]
    fn timestamp_is_pure() {
        let instant = Utc::now();
        assert_eq!(format_timestamp(&instant), format_timestamp(&instant));
    }

    #[test]
    fn geofence_event_includes_action_and_identifier() {
        let location = Location {
            event: Some("geofence".to_string()),
            geofence: Some(Geofence {
                action: "ENTER".to_string(),
                identifier: "home".to_string(),
            }),
            ..Location::default()
        };
        assert_eq!(format_event(&location), "geofence: ENTER home");
    }

    #[test]
    fn plain_event_renders_verbatim() {
        let location = Location {
            event: Some("motionchange".to_string()),
            ..Location::default()
        };
        assert_eq!(format_event(&location), "motionchange");
    }

    #[test]
    fn missing_event_renders_empty() {
        assert_eq!(format_event(&Location::default()), "");
    }

    #[test]
    fn battery_rounds_to_whole_percent() {
        assert_eq!(format_battery(0.873), "87%");
        assert_eq!(format_battery(1.0), "100%");
        assert_eq!(format_battery(0.0), "0%");
    }

    #[test]
    fn activity_includes_confidence() {
        assert_eq!(format_activity("on_foot", 92), "on_foot (92%)");
    }

    #[test]
    fn bools_render_as_literal_strings() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }
}
