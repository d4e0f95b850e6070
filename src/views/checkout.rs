use rust_decimal::Decimal;
use serde::Serialize;

use crate::formatting::calendar::{format_or_raw, padded_day_month_year};
use crate::formatting::currency::format_rupiah;
use crate::models::{CheckoutInfo, TransactionFormData};

pub const FALLBACK_POSTER_URL: &str =
    "https://via.placeholder.com/640x360/cccccc/888888?text=Event+Poster";

const EMPTY_FIELD: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookerView {
    pub full_name: String,
    pub gender_text: String,
    pub date_of_birth_text: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderView {
    pub label: String,
    pub full_name: String,
    pub whats_app_number: String,
}

/// Order confirmation shown before payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummaryView {
    pub event_name: String,
    pub poster_url: String,
    pub date_text: String,
    pub time_text: String,
    pub location: String,
    pub booker: BookerView,
    pub holders: Vec<HolderView>,
    pub total_tickets: u32,
    pub total_label: String,
    pub total_price_text: String,
}

impl CheckoutSummaryView {
    /// `effective_total` is the payable amount after any discounts applied upstream.
    pub fn build(
        checkout: &CheckoutInfo,
        form: &TransactionFormData,
        effective_total: Decimal,
    ) -> Self {
        let event = &checkout.event;
        let total_tickets: u32 = checkout
            .selected_tickets
            .iter()
            .map(|t| t.quantity)
            .sum();

        let holders = form
            .additional_ticket_holders
            .iter()
            .enumerate()
            .map(|(index, holder)| HolderView {
                label: format!("Tiket {}", index + 1),
                full_name: holder.full_name.clone(),
                whats_app_number: holder.whats_app_number.clone(),
            })
            .collect();

        Self {
            event_name: event.name.clone(),
            poster_url: filled(event.poster_url.as_deref())
                .unwrap_or(FALLBACK_POSTER_URL)
                .to_string(),
            date_text: event.date_display.clone(),
            time_text: event.time_display.clone(),
            location: event.location.clone(),
            booker: BookerView {
                full_name: form.full_name.clone(),
                gender_text: filled(form.gender.as_deref())
                    .unwrap_or(EMPTY_FIELD)
                    .to_string(),
                date_of_birth_text: filled(form.date_of_birth.as_deref())
                    .map(|dob| format_or_raw(dob, padded_day_month_year))
                    .unwrap_or_else(|| EMPTY_FIELD.to_string()),
                email: form.email.clone(),
                phone_number: form.phone_number.clone(),
            },
            holders,
            total_tickets,
            total_label: format!("Total ({} Tiket)", total_tickets),
            total_price_text: format_rupiah(effective_total),
        }
    }
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
