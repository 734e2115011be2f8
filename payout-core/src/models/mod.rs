mod payout;
mod vacation_type;

pub use payout::VacationPayout;
pub use vacation_type::VacationType;
