use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::formatting::date_range::DateSource;
use crate::formatting::time_range::{TimeEnd, TimeSource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCategory {
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub max_quantity: Option<i32>,
    #[serde(default)]
    pub tickets_purchased: Option<i32>,
    #[serde(default = "default_use_event_schedule")]
    pub use_event_schedule: bool,
    #[serde(default)]
    pub ticket_start_date: Option<String>,
    #[serde(default)]
    pub ticket_end_date: Option<String>,
    #[serde(default)]
    pub ticket_start_time: Option<String>,
    #[serde(default)]
    pub ticket_end_time: Option<String>,
    #[serde(default)]
    pub ticket_is_time_range: bool,
    #[serde(default)]
    pub ticket_timezone: Option<String>,
}

fn default_use_event_schedule() -> bool {
    true
}

/// Blank strings from form inputs count as unset.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl TicketCategory {
    pub fn new(name: impl Into<String>, max_quantity: i32) -> Self {
        Self {
            name: name.into(),
            price: None,
            max_quantity: Some(max_quantity),
            tickets_purchased: None,
            use_event_schedule: true,
            ticket_start_date: None,
            ticket_end_date: None,
            ticket_start_time: None,
            ticket_end_time: None,
            ticket_is_time_range: false,
            ticket_timezone: None,
        }
    }

    pub fn purchased(&self) -> i32 {
        self.tickets_purchased.unwrap_or(0)
    }

    pub fn capacity(&self) -> i32 {
        self.max_quantity.unwrap_or(0)
    }

    pub fn is_paid(&self) -> bool {
        self.price.is_some_and(|p| p > Decimal::ZERO)
    }

    /// Timezone configured on the ticket itself, if it runs on its own schedule.
    pub fn own_timezone(&self) -> Option<&str> {
        if self.use_event_schedule {
            None
        } else {
            present(&self.ticket_timezone)
        }
    }

    pub fn date_source(&self) -> DateSource<'_> {
        match (self.use_event_schedule, present(&self.ticket_start_date)) {
            (false, Some(start)) => DateSource::Explicit {
                start,
                end: present(&self.ticket_end_date),
            },
            _ => DateSource::EventSchedule,
        }
    }

    pub fn time_source(&self) -> TimeSource<'_> {
        match (self.use_event_schedule, present(&self.ticket_start_time)) {
            (false, Some(start)) => TimeSource::Explicit {
                start,
                end: if self.ticket_is_time_range {
                    TimeEnd::Until(present(&self.ticket_end_time))
                } else {
                    TimeEnd::UntilFinished
                },
                timezone: present(&self.ticket_timezone),
            },
            _ => TimeSource::EventSchedule,
        }
    }
}
