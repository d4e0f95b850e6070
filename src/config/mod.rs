use std::env;

use crate::utils::error::DisplayError;

/// Remaining stock at or below this share of capacity counts as low stock.
pub const LOW_STOCK_PERCENT: u8 = 10;

const LOW_STOCK_PERCENT_VAR: &str = "AKSESS_LOW_STOCK_PERCENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub low_stock_percent: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            low_stock_percent: LOW_STOCK_PERCENT,
        }
    }
}

impl DisplayConfig {
    pub fn from_env() -> Self {
        let low_stock_percent = match env::var(LOW_STOCK_PERCENT_VAR) {
            Ok(raw) => parse_percent(&raw).unwrap_or_else(|e| {
                e.log();
                LOW_STOCK_PERCENT
            }),
            Err(_) => LOW_STOCK_PERCENT,
        };

        tracing::info!(low_stock_percent, "Display config loaded");

        Self { low_stock_percent }
    }
}

fn parse_percent(raw: &str) -> Result<u8, DisplayError> {
    let invalid = || DisplayError::InvalidConfig {
        key: LOW_STOCK_PERCENT_VAR,
        value: raw.to_string(),
    };

    match raw.trim().parse::<u8>() {
        Ok(value) if (1..=100).contains(&value) => Ok(value),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_named_threshold() {
        assert_eq!(DisplayConfig::default().low_stock_percent, 10);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("25"), Ok(25));
        assert_eq!(parse_percent(" 100 "), Ok(100));
        assert!(parse_percent("0").is_err());
        assert!(parse_percent("101").is_err());
        assert!(parse_percent("ten").is_err());
    }

    #[test]
    fn test_from_env_falls_back_on_invalid_value() {
        crate::utils::init_test_tracing();

        std::env::set_var(LOW_STOCK_PERCENT_VAR, "not-a-number");
        let config = DisplayConfig::from_env();
        std::env::remove_var(LOW_STOCK_PERCENT_VAR);

        assert_eq!(config.low_stock_percent, LOW_STOCK_PERCENT);
    }
}
