mod booking;
mod rejection;

pub use booking::{Booking, BookingStatus};
pub use rejection::RejectionReason;
