pub mod business;
pub mod checkout;
pub mod event;
pub mod ticket;

pub use business::BusinessMatchingCardData;
pub use checkout::{CheckoutInfo, SelectedTicket, TicketHolder, TransactionFormData};
pub use event::EventInfo;
pub use ticket::TicketCategory;
