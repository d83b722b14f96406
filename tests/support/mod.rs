#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Two paper exchanges, email off, no relay.
pub const PAPER_CONFIG: &str = r#"
[logging]
level = "warn"
format = "pretty"

[balance]
poll_interval_secs = 60
fetch_timeout_secs = 5

[[exchanges]]
name = "CoinDynasty"
paper_balance = "123.45"

[[exchanges]]
name = "CoinSnake"
paper_balance = "987.65"
"#;

/// Write `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("spreadbot-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}
