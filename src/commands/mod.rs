//! CLI commands module.

pub mod call;
pub mod chat;
pub mod completions;
pub mod files;
pub mod health;
pub mod keys;
pub mod models;
pub mod operations;

use ai_stats_sdk::Params;

/// Parse a `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Collect parsed pairs into a parameter map. Later pairs win.
pub fn to_params(pairs: &[(String, String)]) -> Params {
    pairs.iter().cloned().collect()
}
