pub mod availability;
pub mod calendar;
pub mod currency;
pub mod date_range;
pub mod ticket;
pub mod time_range;

pub use availability::{AvailabilityStatus, Severity};
pub use currency::format_currency;
pub use date_range::{format_ticket_date_range, DateSource, DisplayDateRange};
pub use ticket::{TicketAvailabilityFormatter, TicketDisplay};
pub use time_range::{DisplayTimeRange, TimeEnd, TimeSource};
