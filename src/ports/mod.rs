//! Lookup and reservation contracts the pipeline depends on.
//!
//! Every lookup is a pure query from the pipeline's perspective; the only
//! mutation in the flow is [`SeatReservationStore::reserve`], invoked by the
//! settlement gate after all validators pass.

mod discount_lookup;
mod employee_directory;
mod enrollment_lookup;
mod hold_counter;
mod permission_checker;
mod seat_reservation_store;
mod voucher_lookup;
mod waitlist_lookup;

pub use discount_lookup::DiscountLookup;
pub use employee_directory::EmployeeDirectory;
pub use enrollment_lookup::EnrollmentLookup;
pub use hold_counter::HoldCounter;
pub use permission_checker::PermissionChecker;
pub use seat_reservation_store::{
    ReservationError, ReserveSeatsRequest, SeatReservation, SeatReservationStore,
};
pub use voucher_lookup::VoucherLookup;
pub use waitlist_lookup::WaitlistLookup;
