// src/config/defaults.rs
use crate::config::app::LoggingConfig;
use crate::consts::DEFAULT_LOG_FILTER;

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
        }
    }
}
