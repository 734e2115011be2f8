//! Builds the payout form from command-line field values and renders the
//! calculated totals.

use std::fmt::Write as _;

use chrono::NaiveDate;
use tracing::debug;

use payout_core::{FormField, PayoutForm, VacationPayout};

/// Field values collected from the command line.
///
/// `None` leaves the corresponding form field at its derived default.
#[derive(Debug, Clone, Default)]
pub struct FormArgs {
    pub basic_salary: Option<String>,
    pub housing_allowance: Option<String>,
    pub transport_allowance: Option<String>,
    pub food_allowance: Option<String>,
    pub production_bonus: Option<String>,
    pub fixed_allowances: Option<String>,
    pub other_allowances: Option<String>,
    pub gosi: Option<String>,
    pub salary_from: Option<NaiveDate>,
    pub vacation_start: Option<NaiveDate>,
    pub vacation_end: Option<NaiveDate>,
    pub vacation_type: Option<String>,
}

/// Builds the form: derived defaults first, then the given overrides.
///
/// A vacation-start override re-derives the end date before an explicit end
/// override lands, matching the form's own change ordering.
pub fn build_form(
    args: &FormArgs,
    today: NaiveDate,
) -> anyhow::Result<PayoutForm> {
    let mut form = PayoutForm::with_defaults(today);

    let monetary = [
        (FormField::BasicSalary, &args.basic_salary),
        (FormField::HousingAllowance, &args.housing_allowance),
        (FormField::TransportAllowance, &args.transport_allowance),
        (FormField::FoodAllowance, &args.food_allowance),
        (FormField::ProductionBonus, &args.production_bonus),
        (FormField::FixedAllowances, &args.fixed_allowances),
        (FormField::OtherAllowances, &args.other_allowances),
        (FormField::Gosi, &args.gosi),
    ];
    for (field, value) in monetary {
        if let Some(value) = value {
            form.set(field, value)?;
        }
    }

    if let Some(date) = args.salary_from {
        form.salary_from = date;
    }
    if let Some(date) = args.vacation_start {
        form.set_vacation_start(date);
    }
    if let Some(date) = args.vacation_end {
        form.vacation_end_date = date;
    }
    if let Some(tag) = &args.vacation_type {
        form.set(FormField::VacationType, tag)?;
    }

    Ok(form)
}

/// Builds the form, runs the calculation, and renders the output block.
pub fn run(
    args: &FormArgs,
    today: NaiveDate,
) -> anyhow::Result<String> {
    let form = build_form(args, today)?;
    form.validate()?;

    let input = form.to_input();
    debug!(
        working_days = input.working_days,
        vacation_type = input.vacation_type.as_str(),
        "running payout worksheet"
    );
    let payout = input.calculate();

    Ok(render(&form, &payout))
}

/// Renders the vacation window and the four totals as an aligned text block.
pub fn render(
    form: &PayoutForm,
    payout: &VacationPayout,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Vacation window");
    let _ = writeln!(out, "  Salary From:         {}", form.salary_from);
    let _ = writeln!(out, "  Vacation Start:      {}", form.vacation_start_date);
    let _ = writeln!(out, "  Vacation End:        {}", form.vacation_end_date);
    let _ = writeln!(out, "Results");
    let _ = writeln!(out, "  Working Days Salary: {}", payout.working_days_salary);
    let _ = writeln!(out, "  Vacation Salary:     {}", payout.vacation_salary);
    let _ = writeln!(out, "  Deductions:          {}", payout.deductions);
    let _ = write!(out, "  Total Payment:       {}", payout.total_payment);
    out
}
