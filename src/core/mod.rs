mod benefit;
mod form;
mod timeline;
mod types;

pub use benefit::{BenefitField, FULL_RETIREMENT_AGE, PrefillState, estimate_monthly_benefit};
pub use form::PlannerForm;
pub use timeline::{
    Timeline, age_as_of, age_at_date, date_at_age, date_of_birth_from_age, parse_iso_date,
};
pub use types::{CalcResponse, Debt, DebtBalance, PathYear, Snapshot};
