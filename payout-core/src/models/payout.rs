use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a vacation payout calculation.
///
/// All four fields are whole-unit monetary values; each is rounded
/// independently from its own unrounded precursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationPayout {
    /// Pro-rated salary and allowances for the days worked in the current
    /// salary period.
    pub working_days_salary: Decimal,
    /// Flat basic salary paid for the vacation period itself.
    pub vacation_salary: Decimal,
    /// Flat GOSI withholding.
    pub deductions: Decimal,
    /// Selected components minus deductions.
    pub total_payment: Decimal,
}
