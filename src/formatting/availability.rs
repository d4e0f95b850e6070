use serde::Serialize;

use crate::config::LOW_STOCK_PERCENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AvailabilityStatus {
    /// Capacity is zero or negative; the record is inconsistent.
    Unavailable,
    SoldOut,
    LowStock,
    Available,
}

/// How loudly the renderer should present a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Muted,
    Critical,
    Warning,
    Positive,
}

impl AvailabilityStatus {
    pub fn derive(max_quantity: i32, tickets_purchased: i32) -> Self {
        Self::derive_with_threshold(max_quantity, tickets_purchased, LOW_STOCK_PERCENT)
    }

    /// Low stock is inclusive: exactly `low_stock_percent`% remaining counts.
    pub fn derive_with_threshold(
        max_quantity: i32,
        tickets_purchased: i32,
        low_stock_percent: u8,
    ) -> Self {
        let max = i64::from(max_quantity);
        let remaining = max - i64::from(tickets_purchased);

        if max <= 0 {
            AvailabilityStatus::Unavailable
        } else if remaining <= 0 {
            AvailabilityStatus::SoldOut
        } else if remaining * 100 <= max * i64::from(low_stock_percent) {
            AvailabilityStatus::LowStock
        } else {
            AvailabilityStatus::Available
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::Unavailable => "Tidak Valid",
            AvailabilityStatus::SoldOut => "Habis",
            AvailabilityStatus::LowStock => "Hampir Habis",
            AvailabilityStatus::Available => "Tersedia",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AvailabilityStatus::Unavailable => Severity::Muted,
            AvailabilityStatus::SoldOut => Severity::Critical,
            AvailabilityStatus::LowStock => Severity::Warning,
            AvailabilityStatus::Available => Severity::Positive,
        }
    }
}
