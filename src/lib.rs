//! Display derivations for the Aksess ticketing and business-matching
//! dashboard: availability buckets, Indonesian date/time ranges, Rupiah
//! amounts and the card/summary views built from them.

pub mod config;
pub mod formatting;
pub mod models;
pub mod utils;
pub mod views;

pub use config::DisplayConfig;
pub use formatting::{AvailabilityStatus, TicketAvailabilityFormatter, TicketDisplay};
pub use views::{BusinessCardView, CheckoutSummaryView, TicketCardView};
