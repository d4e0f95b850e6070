use serde::Serialize;

use super::availability::AvailabilityStatus;
use super::date_range::DisplayDateRange;
use super::time_range::DisplayTimeRange;
use crate::config::DisplayConfig;
use crate::models::{EventInfo, TicketCategory};

/// Display-ready availability and schedule for one ticket category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDisplay {
    pub status: AvailabilityStatus,
    pub date: DisplayDateRange,
    pub time: DisplayTimeRange,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TicketAvailabilityFormatter {
    config: DisplayConfig,
}

impl TicketAvailabilityFormatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, ticket: &TicketCategory, event: &EventInfo) -> TicketDisplay {
        let status = AvailabilityStatus::derive_with_threshold(
            ticket.capacity(),
            ticket.purchased(),
            self.config.low_stock_percent,
        );
        let date = DisplayDateRange::resolve(ticket.date_source(), event);
        let time = DisplayTimeRange::resolve(ticket.time_source(), event);

        tracing::trace!(
            ticket = %ticket.name,
            status = ?status,
            inherited_date = date.inherited,
            "Formatted ticket display"
        );

        TicketDisplay { status, date, time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event() -> EventInfo {
        EventInfo {
            name: "Aksess Summit".to_string(),
            date_display: "Jumat, 1 Maret 2024".to_string(),
            time_display: "08:00 - 17:00".to_string(),
            timezone: Some("WIB".to_string()),
            location: "Jakarta Convention Center".to_string(),
            poster_url: None,
        }
    }

    fn ticket(value: serde_json::Value) -> TicketCategory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_inherits_event_schedule() {
        let formatter = TicketAvailabilityFormatter::default();
        let display = formatter.format(
            &ticket(json!({
                "name": "Reguler",
                "maxQuantity": 100,
                "ticketsPurchased": 95,
                "useEventSchedule": true,
                "ticketStartDate": "2024-05-01",
                "ticketEndDate": "2024-05-02",
                "ticketStartTime": "10:00"
            })),
            &event(),
        );

        assert_eq!(display.status, AvailabilityStatus::LowStock);
        assert_eq!(display.date.text, "Jumat, 1 Maret 2024");
        assert_eq!(display.time.text, "08:00 - 17:00");
        assert_eq!(display.time.timezone.as_deref(), Some("WIB"));
    }

    #[test]
    fn test_own_schedule_open_ended() {
        let formatter = TicketAvailabilityFormatter::default();
        let display = formatter.format(
            &ticket(json!({
                "name": "Malam Puncak",
                "maxQuantity": 50,
                "useEventSchedule": false,
                "ticketStartDate": "2024-03-30",
                "ticketEndDate": "2024-04-02",
                "ticketStartTime": "19:00",
                "ticketIsTimeRange": false
            })),
            &event(),
        );

        assert_eq!(display.status, AvailabilityStatus::Available);
        assert_eq!(display.date.text, "30 Maret - 2 April 2024");
        assert_eq!(display.time.text, "19:00 – Selesai");
        assert_eq!(display.time.timezone.as_deref(), Some("WIB"));
    }

    #[test]
    fn test_own_schedule_range_with_timezone() {
        let formatter = TicketAvailabilityFormatter::default();
        let display = formatter.format(
            &ticket(json!({
                "name": "Workshop",
                "maxQuantity": 100,
                "ticketsPurchased": 100,
                "useEventSchedule": false,
                "ticketStartDate": "2024-03-01",
                "ticketEndDate": "2024-03-01",
                "ticketStartTime": "19:00",
                "ticketEndTime": "21:00",
                "ticketIsTimeRange": true,
                "ticketTimezone": "WITA"
            })),
            &event(),
        );

        assert_eq!(display.status, AvailabilityStatus::SoldOut);
        assert_eq!(display.date.text, "1 Maret 2024");
        assert_eq!(display.time.labelled(), "19:00 - 21:00 WITA");
    }

    #[test]
    fn test_own_dates_without_start_time_keep_event_time() {
        let formatter = TicketAvailabilityFormatter::default();
        let display = formatter.format(
            &ticket(json!({
                "name": "Hari Kedua",
                "maxQuantity": 20,
                "useEventSchedule": false,
                "ticketStartDate": "2024-03-02",
                "ticketTimezone": "WIT"
            })),
            &event(),
        );

        assert_eq!(display.date.text, "2 Maret 2024");
        assert_eq!(display.time.text, "08:00 - 17:00");
        assert_eq!(display.time.timezone.as_deref(), Some("WIB"));
    }

    #[test]
    fn test_missing_capacity_is_unavailable() {
        let formatter = TicketAvailabilityFormatter::default();
        let display = formatter.format(&ticket(json!({ "name": "Draft" })), &event());
        assert_eq!(display.status, AvailabilityStatus::Unavailable);
    }

    #[test]
    fn test_configured_threshold() {
        let formatter = TicketAvailabilityFormatter::new(DisplayConfig {
            low_stock_percent: 25,
        });
        let display = formatter.format(
            &ticket(json!({
                "name": "Reguler",
                "maxQuantity": 100,
                "ticketsPurchased": 75
            })),
            &event(),
        );
        assert_eq!(display.status, AvailabilityStatus::LowStock);
    }

    #[test]
    fn test_repeatable() {
        let formatter = TicketAvailabilityFormatter::default();
        let t = ticket(json!({
            "name": "Reguler",
            "maxQuantity": 10,
            "useEventSchedule": false,
            "ticketStartDate": "2024-12-31",
            "ticketEndDate": "2025-01-01"
        }));
        let first = formatter.format(&t, &event());
        let second = formatter.format(&t, &event());
        assert_eq!(first, second);
        assert_eq!(first.date.text, "31 Desember 2024 - 1 Januari 2025");
    }
}
