//! The payout form record and its change API.
//!
//! [`PayoutForm`] is the snapshot the presentation layer owns: raw text for
//! the monetary fields, typed dates, and the vacation-type selector. Changes
//! arrive as `(field name, new value)` string pairs through [`PayoutForm::set`];
//! the calculate trigger is [`PayoutForm::calculate`], which either produces a
//! [`VacationPayout`] or a [`ValidationError`] carrying the message to display.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::parse_money;
use crate::calculations::{PayoutInput, default_salary_from, default_vacation_end, working_days};
use crate::models::{VacationPayout, VacationType};

/// Validation failures that block a calculation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The required basic salary field is empty.
    #[error("Please enter Basic Salary Details!")]
    MissingBasicSalary,

    /// Every monetary field is empty.
    #[error("Please enter Package Details!")]
    AllFieldsBlank,
}

/// A change notification that cannot be represented in the typed record.
///
/// Monetary text is never an error here; it coerces to a number (or zero) at
/// calculation time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid date '{value}' for {field}")]
    InvalidDate { field: FormField, value: String },

    #[error("unknown vacation type '{0}'")]
    UnknownVacationType(String),
}

/// Names of the form's fields, as the presentation boundary spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    BasicSalary,
    HousingAllowance,
    TransportAllowance,
    FoodAllowance,
    ProductionBonus,
    FixedAllowances,
    OtherAllowances,
    Gosi,
    SalaryFrom,
    VacationStartDate,
    VacationEndDate,
    VacationType,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicSalary => "basicSalary",
            Self::HousingAllowance => "housingAllowance",
            Self::TransportAllowance => "transportAllowance",
            Self::FoodAllowance => "foodAllowance",
            Self::ProductionBonus => "productionBonus",
            Self::FixedAllowances => "fixedAllowances",
            Self::OtherAllowances => "otherAllowances",
            Self::Gosi => "gosi",
            Self::SalaryFrom => "salaryFrom",
            Self::VacationStartDate => "vacationStartDate",
            Self::VacationEndDate => "vacationEndDate",
            Self::VacationType => "vacationType",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basicSalary" => Some(Self::BasicSalary),
            "housingAllowance" => Some(Self::HousingAllowance),
            "transportAllowance" => Some(Self::TransportAllowance),
            "foodAllowance" => Some(Self::FoodAllowance),
            "productionBonus" => Some(Self::ProductionBonus),
            "fixedAllowances" => Some(Self::FixedAllowances),
            "otherAllowances" => Some(Self::OtherAllowances),
            "gosi" => Some(Self::Gosi),
            "salaryFrom" => Some(Self::SalaryFrom),
            "vacationStartDate" => Some(Self::VacationStartDate),
            "vacationEndDate" => Some(Self::VacationEndDate),
            "vacationType" => Some(Self::VacationType),
            _ => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payout form's current field values.
///
/// Monetary fields hold the raw field text so that empty and unparsable
/// entries survive until the coercion rules apply at calculation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutForm {
    pub basic_salary: String,
    pub housing_allowance: String,
    pub transport_allowance: String,
    pub food_allowance: String,
    pub production_bonus: String,
    pub fixed_allowances: String,
    pub other_allowances: String,
    pub gosi: String,
    pub salary_from: NaiveDate,
    pub vacation_start_date: NaiveDate,
    pub vacation_end_date: NaiveDate,
    pub vacation_type: VacationType,
}

impl PayoutForm {
    /// Creates the form with its derived defaults: salary period opening on
    /// day 2 of `today`'s month, vacation starting `today` and ending 30
    /// days later, annual vacation type, all monetary fields empty.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            basic_salary: String::new(),
            housing_allowance: String::new(),
            transport_allowance: String::new(),
            food_allowance: String::new(),
            production_bonus: String::new(),
            fixed_allowances: String::new(),
            other_allowances: String::new(),
            gosi: String::new(),
            salary_from: default_salary_from(today),
            vacation_start_date: today,
            vacation_end_date: default_vacation_end(today),
            vacation_type: VacationType::Annual,
        }
    }

    /// Applies a `(field, value)` change notification.
    ///
    /// Monetary fields store the text verbatim. Date fields parse ISO dates
    /// (`YYYY-MM-DD`); the vacation-type field parses its tag. Setting the
    /// vacation start date re-derives the end date, overwriting any manual
    /// edit to it.
    pub fn set(
        &mut self,
        field: FormField,
        value: &str,
    ) -> Result<(), FormError> {
        match field {
            FormField::BasicSalary => self.basic_salary = value.to_string(),
            FormField::HousingAllowance => self.housing_allowance = value.to_string(),
            FormField::TransportAllowance => self.transport_allowance = value.to_string(),
            FormField::FoodAllowance => self.food_allowance = value.to_string(),
            FormField::ProductionBonus => self.production_bonus = value.to_string(),
            FormField::FixedAllowances => self.fixed_allowances = value.to_string(),
            FormField::OtherAllowances => self.other_allowances = value.to_string(),
            FormField::Gosi => self.gosi = value.to_string(),
            FormField::SalaryFrom => self.salary_from = parse_date(field, value)?,
            FormField::VacationStartDate => {
                self.set_vacation_start(parse_date(field, value)?);
            }
            FormField::VacationEndDate => self.vacation_end_date = parse_date(field, value)?,
            FormField::VacationType => {
                self.vacation_type = VacationType::parse(value)
                    .ok_or_else(|| FormError::UnknownVacationType(value.to_string()))?;
            }
        }
        Ok(())
    }

    /// Moves the vacation start date and re-derives the end date from it.
    pub fn set_vacation_start(
        &mut self,
        start: NaiveDate,
    ) {
        self.vacation_start_date = start;
        self.vacation_end_date = default_vacation_end(start);
    }

    /// Checks whether a calculation may proceed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.basic_salary.is_empty() {
            return Err(ValidationError::MissingBasicSalary);
        }
        // Only the monetary fields can be blank (dates and the vacation type
        // always carry a value), so a present basic salary already rules
        // this out.
        if self.monetary_fields().into_iter().all(str::is_empty) {
            return Err(ValidationError::AllFieldsBlank);
        }
        Ok(())
    }

    /// Coerces the form into the worksheet's numeric inputs.
    pub fn to_input(&self) -> PayoutInput {
        PayoutInput {
            basic_salary: parse_money(&self.basic_salary),
            housing_allowance: parse_money(&self.housing_allowance),
            transport_allowance: parse_money(&self.transport_allowance),
            food_allowance: parse_money(&self.food_allowance),
            production_bonus: parse_money(&self.production_bonus),
            fixed_allowances: parse_money(&self.fixed_allowances),
            other_allowances: parse_money(&self.other_allowances),
            gosi: parse_money(&self.gosi),
            working_days: working_days(self.salary_from, self.vacation_start_date),
            vacation_type: self.vacation_type,
        }
    }

    /// The calculate trigger: validate, coerce, run the worksheet.
    pub fn calculate(&self) -> Result<VacationPayout, ValidationError> {
        self.validate()?;
        Ok(self.to_input().calculate())
    }

    fn monetary_fields(&self) -> [&str; 8] {
        [
            &self.basic_salary,
            &self.housing_allowance,
            &self.transport_allowance,
            &self.food_allowance,
            &self.production_bonus,
            &self.fixed_allowances,
            &self.other_allowances,
            &self.gosi,
        ]
    }
}

fn parse_date(
    field: FormField,
    value: &str,
) -> Result<NaiveDate, FormError> {
    value.parse().map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_form() -> PayoutForm {
        let mut form = PayoutForm::with_defaults(date(2024, 2, 1));
        form.set(FormField::BasicSalary, "3000").unwrap();
        form.set(FormField::SalaryFrom, "2024-01-02").unwrap();
        form.set(FormField::VacationStartDate, "2024-02-01").unwrap();
        form
    }

    // =========================================================================
    // default derivation tests
    // =========================================================================

    #[test]
    fn defaults_derive_all_three_dates() {
        let form = PayoutForm::with_defaults(date(2024, 6, 17));

        assert_eq!(form.salary_from, date(2024, 6, 2));
        assert_eq!(form.vacation_start_date, date(2024, 6, 17));
        assert_eq!(form.vacation_end_date, date(2024, 7, 17));
        assert_eq!(form.vacation_type, VacationType::Annual);
    }

    #[test]
    fn defaults_leave_monetary_fields_empty() {
        let form = PayoutForm::with_defaults(date(2024, 6, 17));

        assert!(form.monetary_fields().into_iter().all(str::is_empty));
    }

    // =========================================================================
    // change notification tests
    // =========================================================================

    #[test]
    fn monetary_fields_store_text_verbatim() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));

        form.set(FormField::HousingAllowance, "abc").unwrap();

        assert_eq!(form.housing_allowance, "abc");
    }

    #[test]
    fn start_date_change_rederives_end_date() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));

        form.set(FormField::VacationStartDate, "2024-12-15").unwrap();

        assert_eq!(form.vacation_end_date, date(2025, 1, 14));
    }

    #[test]
    fn start_date_change_overwrites_manual_end_date_edit() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));

        form.set(FormField::VacationEndDate, "2024-06-20").unwrap();
        form.set(FormField::VacationStartDate, "2024-07-01").unwrap();

        assert_eq!(form.vacation_end_date, date(2024, 7, 31));
    }

    #[test]
    fn end_date_change_leaves_start_date_alone() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));

        form.set(FormField::VacationEndDate, "2024-06-20").unwrap();

        assert_eq!(form.vacation_start_date, date(2024, 6, 17));
        assert_eq!(form.vacation_end_date, date(2024, 6, 20));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));

        let err = form.set(FormField::SalaryFrom, "not-a-date").unwrap_err();

        assert_eq!(
            err,
            FormError::InvalidDate {
                field: FormField::SalaryFrom,
                value: "not-a-date".to_string(),
            }
        );
    }

    #[test]
    fn unknown_vacation_type_is_rejected() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));

        let err = form.set(FormField::VacationType, "sabbatical").unwrap_err();

        assert_eq!(
            err,
            FormError::UnknownVacationType("sabbatical".to_string())
        );
    }

    #[test]
    fn field_names_round_trip() {
        for field in [
            FormField::BasicSalary,
            FormField::Gosi,
            FormField::VacationStartDate,
            FormField::VacationType,
        ] {
            assert_eq!(FormField::parse(field.as_str()), Some(field));
        }
        assert_eq!(FormField::parse("unknownField"), None);
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn empty_basic_salary_blocks_calculation() {
        let form = PayoutForm::with_defaults(date(2024, 6, 17));

        let err = form.calculate().unwrap_err();

        assert_eq!(err, ValidationError::MissingBasicSalary);
        assert_eq!(err.to_string(), "Please enter Basic Salary Details!");
    }

    #[test]
    fn all_fields_blank_loses_to_basic_salary_check() {
        // With every monetary field empty the basic-salary check fires
        // first; the all-blank branch never wins through this path.
        let form = PayoutForm::with_defaults(date(2024, 6, 17));

        assert_eq!(form.validate(), Err(ValidationError::MissingBasicSalary));
    }

    #[test]
    fn all_fields_blank_message() {
        assert_eq!(
            ValidationError::AllFieldsBlank.to_string(),
            "Please enter Package Details!"
        );
    }

    #[test]
    fn whitespace_basic_salary_passes_validation() {
        let mut form = PayoutForm::with_defaults(date(2024, 6, 17));
        form.set(FormField::BasicSalary, " ").unwrap();

        assert_eq!(form.validate(), Ok(()));
    }

    // =========================================================================
    // calculate trigger tests
    // =========================================================================

    #[test]
    fn worked_example_annual() {
        let form = test_form();

        let payout = form.calculate().unwrap();

        assert_eq!(payout.working_days_salary, dec!(3000));
        assert_eq!(payout.vacation_salary, dec!(3000));
        assert_eq!(payout.deductions, dec!(0));
        assert_eq!(payout.total_payment, dec!(6000));
    }

    #[test]
    fn worked_example_personal() {
        let mut form = test_form();
        form.set(FormField::VacationType, "personal").unwrap();

        let payout = form.calculate().unwrap();

        assert_eq!(payout.vacation_salary, dec!(0));
        assert_eq!(payout.total_payment, dec!(3000));
    }

    #[test]
    fn unparsable_allowance_is_treated_as_zero() {
        let mut form = test_form();
        form.set(FormField::HousingAllowance, "abc").unwrap();

        let payout = form.calculate().unwrap();

        assert_eq!(payout.total_payment, dec!(6000));
    }

    #[test]
    fn salary_period_opening_after_vacation_start_goes_negative() {
        let mut form = test_form();
        form.set(FormField::SalaryFrom, "2024-02-10").unwrap();

        assert_eq!(form.to_input().working_days, -9);
    }

    #[test]
    fn recalculation_reflects_field_changes() {
        let mut form = test_form();

        let first = form.calculate().unwrap();
        form.set(FormField::Gosi, "300").unwrap();
        let second = form.calculate().unwrap();

        assert_eq!(first.total_payment, dec!(6000));
        assert_eq!(second.total_payment, dec!(5700));
    }
}
