//! Shared formatting and projection helpers for adapters

use super::error::ExportError;
use crate::config::compile_time::export::LENGTH_UNIT;
use crate::tokens::TokenModel;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Shortest decimal form: `8.0` → `8`, `0.5` → `0.5`
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Number with the length unit appended
pub fn with_unit(value: f64) -> String {
    format!("{}{}", format_number(value), LENGTH_UNIT)
}

/// RFC 3339 in UTC with second precision
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Two-space pretty JSON terminated by a newline
pub fn to_pretty_json<T: Serialize>(adapter: &'static str, value: &T) -> Result<String, ExportError> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|source| ExportError::Serialization { adapter, source })?;
    json.push('\n');
    Ok(json)
}

/// Scalar colors only; gradients are skipped
pub fn scalar_colors(model: &TokenModel) -> IndexMap<&str, &str> {
    model
        .colors()
        .iter()
        .filter_map(|(name, value)| value.as_hex().map(|hex| (name.as_str(), hex)))
        .collect()
}

pub fn spacing_numbers(model: &TokenModel) -> IndexMap<&str, f64> {
    model
        .spacing()
        .iter()
        .filter_map(|(name, value)| value.as_number().map(|n| (name.as_str(), n)))
        .collect()
}

pub fn border_numbers(model: &TokenModel) -> IndexMap<&str, f64> {
    model
        .borders()
        .iter()
        .filter_map(|(name, value)| value.as_number().map(|n| (name.as_str(), n)))
        .collect()
}
