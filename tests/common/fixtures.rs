//! Static dump corpora used across harnesses.
#![allow(dead_code)]

/// Two rows, the second with a non-numeric duration.
pub const CSV_ONE_BAD_DURATION: &str =
    "1609459200,5.5,firefox,Example Page\n1609459260,bad,chrome,Another\n";

/// A window watcher log as written on Windows, with a quoted title.
pub const CSV_CRLF: &str = "1609459200,12,explorer.exe,Downloads\r\n\
1609459212,3.25,code.exe,\"lib.rs - active-window, workspace\"\r\n\
1609459215,60,firefox.exe,GitHub\r\n";

/// A row whose app name was corrupted with a NUL byte between two good rows.
pub const CSV_NUL: &str = "1609459200,1,xterm,one\n1609459201,1,x\0term,two\n1609459202,1,xterm,three\n";

/// Rows broken in every way the reader recognises, each followed by a good row.
pub const CSV_MIXED_DAMAGE: &str = "1609459200,1,a,ok-1\n\
not-a-time,1,a,bad-ts\n\
1609459201,1,a,ok-2\n\
1609459202,NaN,a,bad-duration\n\
1609459203,1,a,ok-3\n\
1609459204,1,short\n\
1609459205,1,a,ok-4\n";

/// Scenario: a single desktop bucket with one event.
pub const JSON_DESKTOP: &str = r#"{"buckets":{"b1":{"events":[{"timestamp":"2021-01-01T00:00:00","duration":10,"data":{"app":"code","title":"main.py"}}]}}}"#;

/// A realistic export: afk bucket, desktop bucket, android bucket, empty bucket.
pub fn json_full_export() -> String {
    serde_json::json!({
        "buckets": {
            "aw-watcher-afk_laptop": {
                "id": "aw-watcher-afk_laptop",
                "type": "afkstatus",
                "events": [
                    {"timestamp": "2021-01-01T00:00:00Z", "duration": 300.0, "data": {"status": "not-afk"}}
                ]
            },
            "aw-watcher-window_laptop": {
                "id": "aw-watcher-window_laptop",
                "type": "currentwindow",
                "events": [
                    {"timestamp": "2021-01-01T00:00:00.000000+00:00", "duration": 12, "data": {"app": "Alacritty", "title": "nvim"}},
                    {"timestamp": "2021-01-01T00:00:12.000000+00:00", "duration": 40, "data": {"app": "firefox", "title": "docs.rs"}}
                ]
            },
            "aw-watcher-android-test": {
                "id": "aw-watcher-android-test",
                "type": "currentwindow",
                "events": [
                    {"timestamp": "2021-01-01T08:00:00Z", "duration": 5, "data": {"app": "Signal", "classname": "org.thoughtcrime.securesms.MainActivity", "package": "org.thoughtcrime.securesms"}}
                ]
            },
            "aw-watcher-web-firefox": {
                "id": "aw-watcher-web-firefox",
                "events": []
            }
        }
    })
    .to_string()
}

/// Generate `n` well-formed CSV rows, one second apart.
pub fn csv_rows(n: usize) -> String {
    (0..n)
        .map(|i| format!("{},{}.5,app-{},title {}\n", 1_609_459_200 + i, i % 60, i % 7, i))
        .collect()
}
