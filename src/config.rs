//! Environment configuration.

use std::env;

use crate::core::color::Color;

pub const DEBUG_VAR: &str = "MODAL_OVERLAY_DEBUG";
pub const WRITE_LOG_VAR: &str = "MODAL_OVERLAY_WRITE_LOG";
pub const LOG_FILTER_VAR: &str = "MODAL_OVERLAY_LOG";
pub const BORDER_COLOR_VAR: &str = "MODAL_OVERLAY_BORDER_COLOR";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub debug: bool,
    pub write_log: Option<String>,
    pub log_filter: Option<String>,
    pub border_color: Option<Color>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag(DEBUG_VAR),
            write_log: env_string_opt(WRITE_LOG_VAR),
            log_filter: env_string_opt(LOG_FILTER_VAR),
            border_color: env_string_opt(BORDER_COLOR_VAR).and_then(|value| value.parse().ok()),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
