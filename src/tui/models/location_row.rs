//! LocationRow: the flattened, display-ready projection of one record.

use super::formatting::*;
use crate::model::Location;

/// One row of the location table. Purely textual/numeric, recomputed on
/// demand, carries no identity beyond the source uuid.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub uuid: String,
    pub device_id: String,
    pub coordinate: String,
    pub recorded_at: String,
    pub created_at: String,
    pub is_moving: String,
    pub accuracy: f64,
    pub speed: f64,
    pub odometer: f64,
    pub activity: String,
    pub event: String,
    pub battery_level: String,
    /// Kept as a boolean for styling, not stringified.
    pub battery_is_charging: bool,
}

impl LocationRow {
    /// Projects one location record into a display row. Pure; assumes a
    /// well-formed record.
    pub fn from_location(location: &Location) -> Self {
        Self {
            uuid: location.uuid.clone(),
            device_id: location.device_id.clone(),
            coordinate: format_coordinate(location.latitude, location.longitude),
            recorded_at: format_timestamp(&location.recorded_at),
            created_at: format_timestamp(&location.created_at),
            is_moving: format_bool(location.is_moving).to_string(),
            accuracy: location.accuracy,
            speed: location.speed,
            odometer: location.odometer,
            activity: format_activity(&location.activity_type, location.activity_confidence),
            event: format_event(location),
            battery_level: format_battery(location.battery_level),
            battery_is_charging: location.battery_is_charging,
        }
    }

    pub fn headers() -> [&'static str; 11] {
        [
            "UUID",
            "RECORDED AT",
            "CREATED AT",
            "COORDINATE",
            "ACCURACY",
            "SPEED",
            "ODOMETER",
            "EVENT",
            "IS MOVING",
            "ACTIVITY",
            "BATTERY",
        ]
    }

    pub fn widths() -> [u16; 11] {
        [36, 18, 18, 24, 8, 6, 9, 26, 9, 18, 7]
    }

    pub fn cells(&self) -> [String; 11] {
        [
            self.uuid.clone(),
            self.recorded_at.clone(),
            self.created_at.clone(),
            self.coordinate.clone(),
            self.accuracy.to_string(),
            self.speed.to_string(),
            self.odometer.to_string(),
            self.event.clone(),
            self.is_moving.clone(),
            self.activity.clone(),
            self.battery_level.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::Geofence;

    fn sample() -> Location {
        Location {
            uuid: "u-1".to_string(),
            device_id: "pixel-7".to_string(),
            latitude: 37.1234567,
            longitude: -122.7654321,
            accuracy: 5.0,
            speed: 1.25,
            odometer: 1042.5,
            recorded_at: Utc.with_ymd_and_hms(2026, 8, 25, 17, 4, 9).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 25, 17, 4, 10).unwrap(),
            is_moving: true,
            activity_type: "on_foot".to_string(),
            activity_confidence: 92,
            battery_level: 0.873,
            battery_is_charging: false,
            event: Some("geofence".to_string()),
            geofence: Some(Geofence {
                action: "ENTER".to_string(),
                identifier: "home".to_string(),
            }),
        }
    }

    #[test]
    fn projects_all_fields() {
        let row = LocationRow::from_location(&sample());
        assert_eq!(row.uuid, "u-1");
        assert_eq!(row.device_id, "pixel-7");
        assert_eq!(row.coordinate, "37.123457, -122.765432");
        assert_eq!(row.is_moving, "true");
        assert_eq!(row.activity, "on_foot (92%)");
        assert_eq!(row.event, "geofence: ENTER home");
        assert_eq!(row.battery_level, "87%");
        assert!(!row.battery_is_charging);
    }

    #[test]
    fn projection_is_idempotent() {
        let location = sample();
        assert_eq!(
            LocationRow::from_location(&location),
            LocationRow::from_location(&location)
        );
    }

    #[test]
    fn cells_match_header_count() {
        let row = LocationRow::from_location(&sample());
        assert_eq!(row.cells().len(), LocationRow::headers().len());
        assert_eq!(LocationRow::widths().len(), LocationRow::headers().len());
    }
}
