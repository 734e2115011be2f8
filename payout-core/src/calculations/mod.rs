//! Vacation payout calculation modules.
//!
//! This module provides the calculation logic behind the payout form:
//! date derivation, input coercion, and the payout worksheet itself.

pub mod common;
pub mod dates;
pub mod payout;

pub use dates::{default_salary_from, default_vacation_end, working_days};
pub use payout::PayoutInput;
