//! Location records as they arrive from the tracking backend.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geofence transition attached to a location when `event` is `"geofence"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    /// Transition action (ENTER/EXIT/DWELL).
    pub action: String,
    /// Geofence identifier.
    pub identifier: String,
}

/// One raw location record. Immutable once created; the dashboard only reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub uuid: String,
    pub device_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in meters.
    pub accuracy: f64,
    /// Speed in m/s.
    pub speed: f64,
    /// Total distance traveled in meters.
    pub odometer: f64,
    /// When the device recorded the fix.
    pub recorded_at: DateTime<Utc>,
    /// When the server stored the record.
    pub created_at: DateTime<Utc>,
    pub is_moving: bool,
    /// Motion activity classification (still/walking/in_vehicle/...).
    pub activity_type: String,
    /// Classification confidence as a percentage.
    pub activity_confidence: u8,
    /// Battery charge as a fraction in 0..=1.
    pub battery_level: f64,
    pub battery_is_charging: bool,
    /// Optional event tag (motionchange/geofence/heartbeat/...).
    #[serde(default)]
    pub event: Option<String>,
    /// Present when `event` is `"geofence"`.
    #[serde(default)]
    pub geofence: Option<Geofence>,
}

/// Loads location records from a JSON array file.
pub fn load_locations(path: &Path) -> io::Result<Vec<Location>> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "uuid": "8a9f0b2c-0001-4a60-9c2e-000000000001",
            "device_id": "pixel-7",
            "latitude": 37.330427,
            "longitude": -122.030344,
            "accuracy": 5.0,
            "speed": 1.3,
            "odometer": 1042.5,
            "recorded_at": "2026-08-25T17:04:09.042Z",
            "created_at": "2026-08-25T17:04:10.000Z",
            "is_moving": true,
            "activity_type": "on_foot",
            "activity_confidence": 92,
            "battery_level": 0.873,
            "battery_is_charging": false,
            "event": "geofence",
            "geofence": { "action": "ENTER", "identifier": "home" }
        },
        {
            "uuid": "8a9f0b2c-0002-4a60-9c2e-000000000002",
            "device_id": "pixel-7",
            "latitude": 37.330501,
            "longitude": -122.030398,
            "accuracy": 10.0,
            "speed": 0.0,
            "odometer": 1042.5,
            "recorded_at": "2026-08-25T17:05:00.000Z",
            "created_at": "2026-08-25T17:05:01.000Z",
            "is_moving": false,
            "activity_type": "still",
            "activity_confidence": 100,
            "battery_level": 0.87,
            "battery_is_charging": true
        }
    ]"#;

    #[test]
    fn loads_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let locations = load_locations(file.path()).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].device_id, "pixel-7");
        assert_eq!(locations[0].geofence.as_ref().unwrap().action, "ENTER");
        // Optional fields absent on the second record
        assert_eq!(locations[1].event, None);
        assert_eq!(locations[1].geofence, None);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let err = load_locations(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_propagates() {
        let err = load_locations(Path::new("/nonexistent/locations.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
