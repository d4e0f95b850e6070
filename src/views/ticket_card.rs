use serde::Serialize;

use crate::formatting::availability::Severity;
use crate::formatting::currency::format_currency;
use crate::formatting::{TicketAvailabilityFormatter, TicketDisplay};
use crate::models::{EventInfo, TicketCategory};

const UNLIMITED: &str = "Tidak Terbatas";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketType {
    Paid,
    Free,
}

impl TicketType {
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Paid => "Berbayar",
            TicketType::Free => "Gratis",
        }
    }
}

/// Everything the dashboard ticket card shows for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCardView {
    pub name: String,
    pub event_name: String,
    pub ticket_type: TicketType,
    pub purchased_text: String,
    pub quantity_text: String,
    pub status_text: &'static str,
    pub status_severity: Severity,
    pub date_text: String,
    pub time_text: String,
    pub ticket_timezone: Option<String>,
    pub price_text: String,
    pub edit_label: String,
    pub delete_label: String,
    #[serde(skip)]
    pub display: TicketDisplay,
}

impl TicketCardView {
    pub fn build(
        formatter: &TicketAvailabilityFormatter,
        ticket: &TicketCategory,
        event: &EventInfo,
    ) -> Self {
        let display = formatter.format(ticket, event);
        let ticket_type = if ticket.is_paid() {
            TicketType::Paid
        } else {
            TicketType::Free
        };

        Self {
            name: ticket.name.clone(),
            event_name: event.name.clone(),
            ticket_type,
            purchased_text: ticket.purchased().to_string(),
            quantity_text: ticket
                .max_quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| UNLIMITED.to_string()),
            status_text: display.status.label(),
            status_severity: display.status.severity(),
            date_text: display.date.text.clone(),
            time_text: display.time.labelled(),
            ticket_timezone: ticket.own_timezone().map(str::to_string),
            price_text: format_currency(ticket.price),
            edit_label: format!("Edit tiket {}", ticket.name),
            delete_label: format!("Hapus tiket {}", ticket.name),
            display,
        }
    }
}
