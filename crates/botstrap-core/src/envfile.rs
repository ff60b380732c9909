//! `.env` file parsing and validation of the keys the bot reads at startup.
//!
//! Parsing covers the common python-dotenv subset: `KEY=VALUE` lines, full-line
//! and unquoted inline `#` comments, single/double quoted values.

use std::collections::HashMap;

/// Keys the bot reads at startup.
pub const BOT_KEYS: &[&str] = &[
    "BOT_TOKEN",
    "CHANNEL_ID",
    "TRIAL_DAYS",
    "ADMIN_IDS",
    "WELCOME_VIDEO_FILE_ID",
];

/// Parse `.env` content into key/value pairs, in file order.
pub fn parse(content: &str) -> Vec<(String, String)> {
    content.lines().filter_map(parse_line).collect()
}

/// Parse one `KEY=VALUE` line. Returns `None` for blanks and comments.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let mut value = line[eq_pos + 1..].trim();
    // Strip inline comment (# not inside quotes)
    if let Some(hash_pos) = value.find('#') {
        let before_hash = value[..hash_pos].trim_end();
        if !before_hash.contains('"') && !before_hash.contains('\'') {
            value = before_hash;
        }
    }
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        value = &value[1..value.len() - 1];
    }
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// Outcome of validating one configuration key.
#[derive(Debug)]
pub enum KeyStatus {
    /// Present and well-formed; carries a short human summary.
    Ok(String),
    /// Optional key absent; carries the effective default.
    Defaulted(String),
    /// Required key absent or empty.
    Missing,
    /// Present but malformed; carries the reason.
    Invalid(String),
}

#[derive(Debug)]
pub struct KeyReport {
    pub key: &'static str,
    pub status: KeyStatus,
}

impl KeyReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, KeyStatus::Missing | KeyStatus::Invalid(_))
    }
}

/// Validate the keys the bot reads. `vars` is the merged view of the config
/// file and the real environment (env wins, matching the bot's own reads).
pub fn check_bot_keys(vars: &HashMap<String, String>) -> Vec<KeyReport> {
    let mut reports = Vec::new();

    reports.push(KeyReport {
        key: "BOT_TOKEN",
        status: match vars.get("BOT_TOKEN").map(String::as_str) {
            None | Some("") => KeyStatus::Missing,
            Some(v) if is_placeholder(v) => KeyStatus::Invalid(
                "placeholder value — paste the token from @BotFather".to_string(),
            ),
            Some(_) => KeyStatus::Ok("set".to_string()),
        },
    });

    reports.push(KeyReport {
        key: "CHANNEL_ID",
        status: match vars.get("CHANNEL_ID").map(String::as_str) {
            None | Some("") => KeyStatus::Missing,
            Some(v) => match v.parse::<i64>() {
                Ok(id) => KeyStatus::Ok(format!("{}", id)),
                Err(_) => KeyStatus::Invalid(format!("\"{}\" is not an integer", v)),
            },
        },
    });

    reports.push(KeyReport {
        key: "TRIAL_DAYS",
        status: match vars.get("TRIAL_DAYS").map(String::as_str) {
            None | Some("") => KeyStatus::Defaulted("3 days".to_string()),
            Some(v) => match v.parse::<u32>() {
                Ok(days) => KeyStatus::Ok(format!("{} days", days)),
                Err(_) => KeyStatus::Invalid(format!("\"{}\" is not a whole number of days", v)),
            },
        },
    });

    reports.push(KeyReport {
        key: "ADMIN_IDS",
        status: match vars.get("ADMIN_IDS").map(String::as_str) {
            None | Some("") => KeyStatus::Defaulted("no admins".to_string()),
            Some(v) => {
                let ids: Vec<&str> = v.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
                if ids.iter().all(|s| s.parse::<i64>().is_ok()) {
                    KeyStatus::Ok(format!("{} admin(s)", ids.len()))
                } else {
                    KeyStatus::Invalid(format!(
                        "\"{}\" is not a comma-separated list of integers",
                        v
                    ))
                }
            }
        },
    });

    reports.push(KeyReport {
        key: "WELCOME_VIDEO_FILE_ID",
        status: match vars.get("WELCOME_VIDEO_FILE_ID").map(String::as_str) {
            None | Some("") => KeyStatus::Defaulted("no welcome video".to_string()),
            Some(_) => KeyStatus::Ok("set".to_string()),
        },
    });

    reports
}

fn is_placeholder(value: &str) -> bool {
    let v = value.to_lowercase();
    v.contains("your_") || v.contains("xxx") || v == "changeme"
}
