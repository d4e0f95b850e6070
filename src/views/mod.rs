pub mod business;
pub mod checkout;
pub mod ticket_card;

pub use business::BusinessCardView;
pub use checkout::CheckoutSummaryView;
pub use ticket_card::{TicketCardView, TicketType};
