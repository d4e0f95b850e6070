use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::event::EventInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTicket {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    pub event: EventInfo,
    #[serde(default)]
    pub selected_tickets: Vec<SelectedTicket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHolder {
    pub full_name: String,
    pub whats_app_number: String,
}

/// Booker details captured by the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFormData {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub additional_ticket_holders: Vec<TicketHolder>,
}
