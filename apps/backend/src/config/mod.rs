//! Environment-driven configuration.

pub mod game;
pub mod server;

use std::str::FromStr;

use crate::error::AppError;

/// Parse an optional variable, falling back to `default` when unset.
pub(crate) fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}': {e}"
            ))
        }),
    }
}

pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
