//! JSON rendering. Field order follows the event structs; timestamps are
//! epoch seconds as floats.

use active_window_core::WindowEvent;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

fn epoch_seconds(ts: DateTime<Utc>) -> f64 {
    ts.timestamp_micros() as f64 / 1_000_000.0
}

/// One event as a JSON object.
pub fn to_value(event: &WindowEvent) -> Value {
    match event {
        WindowEvent::Computer(e) => json!({
            "timestamp": epoch_seconds(e.timestamp),
            "duration": e.duration,
            "app": e.app,
            "title": e.title,
        }),
        WindowEvent::Android(e) => json!({
            "timestamp": epoch_seconds(e.timestamp),
            "duration": e.duration,
            "app": e.app,
            "classname": e.classname,
            "package": e.package,
        }),
        WindowEvent::WindowWatcher(e) => json!({
            "timestamp": epoch_seconds(e.timestamp),
            "duration": e.duration,
            "app": e.app,
            "title": e.title,
        }),
    }
}

/// All events as one compact JSON array.
pub fn render(events: &[WindowEvent]) -> serde_json::Result<String> {
    serde_json::to_string(&Value::Array(events.iter().map(to_value).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use active_window_core::ComputerEvent;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_sub_second_precision() {
        let ts = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        let value = to_value(&WindowEvent::Computer(ComputerEvent {
            timestamp: ts,
            duration: 1.0,
            app: "code".into(),
            title: "lib.rs".into(),
        }));
        assert_eq!(value["timestamp"], json!(1609459200.25));
    }

    #[test]
    fn empty_sequence_is_empty_array() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }
}
