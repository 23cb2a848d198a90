//! Checkout domain: the aggregate under validation and everything it prices.

mod checkout_session;
mod discount;
mod errors;
mod event;
mod identity;
pub mod pricing;
mod request;
mod voucher;

pub use checkout_session::{Attendee, CheckoutSession, CheckoutStatus};
pub use discount::{Discount, DiscountKind, DiscountScope};
pub use errors::{CheckoutError, ErrorKind, LookupError};
pub use event::{Event, EventSession};
pub use identity::{Company, Employee, Enrollment, SeatHolder, WaitlistEntry};
pub use request::ProcessPaymentRequest;
pub use voucher::Voucher;
