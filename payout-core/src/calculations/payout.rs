//! Vacation payout worksheet.
//!
//! This module computes the settlement paid out when an employee starts a
//! vacation: the pro-rated salary for days already worked in the current
//! salary period, the flat vacation salary, and the GOSI deduction.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Working days: vacation start minus salary period opening, in days |
//! | 2    | Working-days salary: monthly-rate components × days/30 plus flat components |
//! | 3    | Vacation salary: basic salary, flat |
//! | 4    | Deductions: GOSI, flat |
//! | 5    | Component selection by vacation type |
//! | 6    | Total payment: selected components minus deductions |
//!
//! Basic salary, transport, food, and other allowances are monthly rates and
//! are pro-rated over the worked days; housing allowance, production bonus,
//! and fixed allowances are paid flat. A 30-day month is assumed throughout.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payout_core::calculations::PayoutInput;
//! use payout_core::models::VacationType;
//!
//! let input = PayoutInput {
//!     basic_salary: dec!(3000.00),
//!     housing_allowance: dec!(0.00),
//!     transport_allowance: dec!(0.00),
//!     food_allowance: dec!(0.00),
//!     production_bonus: dec!(0.00),
//!     fixed_allowances: dec!(0.00),
//!     other_allowances: dec!(0.00),
//!     gosi: dec!(0.00),
//!     working_days: 30,
//!     vacation_type: VacationType::Annual,
//! };
//!
//! let payout = input.calculate();
//!
//! assert_eq!(payout.working_days_salary, dec!(3000));
//! assert_eq!(payout.vacation_salary, dec!(3000));
//! assert_eq!(payout.total_payment, dec!(6000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_to_unit;
use crate::models::{VacationPayout, VacationType};

/// Days in the pro-ration month.
const MONTH_DAYS: i64 = 30;

/// Parsed numeric inputs for the payout worksheet.
///
/// Produced from the form by the coercion rules (empty or unparsable
/// monetary text is zero); the worksheet itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutInput {
    /// Monthly basic salary.
    pub basic_salary: Decimal,

    /// Housing allowance, paid flat.
    pub housing_allowance: Decimal,

    /// Monthly transport allowance, pro-rated.
    pub transport_allowance: Decimal,

    /// Monthly food allowance, pro-rated.
    pub food_allowance: Decimal,

    /// Production bonus, paid flat.
    pub production_bonus: Decimal,

    /// Fixed allowances, paid flat.
    pub fixed_allowances: Decimal,

    /// Monthly other allowances, pro-rated.
    pub other_allowances: Decimal,

    /// GOSI withholding.
    pub gosi: Decimal,

    /// Days worked in the current salary period. May be negative when the
    /// period opens after the vacation starts.
    pub working_days: i64,

    /// Which payout components the settlement includes.
    pub vacation_type: VacationType,
}

impl PayoutInput {
    /// Runs the payout worksheet.
    ///
    /// Each output field is rounded to the nearest whole unit independently:
    /// the total is computed from the unrounded selected components and then
    /// rounded itself.
    pub fn calculate(&self) -> VacationPayout {
        let working_days_salary = self.working_days_salary();
        let vacation_salary = self.basic_salary;
        let deductions = self.gosi;

        let (working_days_salary, vacation_salary) =
            self.select_components(working_days_salary, vacation_salary);

        let total_payment = working_days_salary + vacation_salary - deductions;

        VacationPayout {
            working_days_salary: round_to_unit(working_days_salary),
            vacation_salary: round_to_unit(vacation_salary),
            deductions: round_to_unit(deductions),
            total_payment: round_to_unit(total_payment),
        }
    }

    /// Pro-rated salary and allowances for the worked days (step 2).
    fn working_days_salary(&self) -> Decimal {
        let days = Decimal::from(self.working_days);
        let month = Decimal::from(MONTH_DAYS);

        self.basic_salary / month * days
            + self.housing_allowance
            + self.transport_allowance / month * days
            + self.food_allowance / month * days
            + self.production_bonus
            + self.fixed_allowances
            + self.other_allowances / month * days
    }

    /// Zeroes the components the vacation type excludes (step 5).
    fn select_components(
        &self,
        working_days_salary: Decimal,
        vacation_salary: Decimal,
    ) -> (Decimal, Decimal) {
        match self.vacation_type {
            VacationType::Annual => (working_days_salary, vacation_salary),
            VacationType::Personal => (working_days_salary, Decimal::ZERO),
            VacationType::Encashment => (Decimal::ZERO, vacation_salary),
        }
    }
}
