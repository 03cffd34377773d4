/// Age at which the estimator applies neither an early reduction nor a
/// delayed credit.
pub const FULL_RETIREMENT_AGE: i32 = 67;

const MONTHLY_BENEFIT_CAP: f64 = 3_500.0;
const INCOME_REPLACEMENT_RATE: f64 = 0.42;
const EARLY_REDUCTION_PER_YEAR: f64 = 0.06;
const DELAYED_CREDIT_PER_YEAR: f64 = 0.08;
const WORKED_THIRTY_YEAR_FLOOR: f64 = 1_000.0;

/// Simplified monthly Social Security benefit: 42% of monthly income capped
/// at $3,500, reduced 6% per year claimed before 67 (floored at zero) or
/// credited 8% per year claimed after 67 (uncapped). `worked_thirty_years`
/// floors the final figure at $1,000. Rounded to cents.
///
/// Returns `None` when income or claim age is zero/absent; this mirrors the
/// authoritative estimate done server-side and exists only for prefill.
pub fn estimate_monthly_benefit(
    annual_income: f64,
    claim_age: i32,
    worked_thirty_years: bool,
) -> Option<f64> {
    if annual_income == 0.0 || annual_income.is_nan() || claim_age == 0 {
        return None;
    }

    let mut benefit = MONTHLY_BENEFIT_CAP.min(INCOME_REPLACEMENT_RATE * annual_income / 12.0);
    if claim_age < FULL_RETIREMENT_AGE {
        let years_early = (FULL_RETIREMENT_AGE - claim_age) as f64;
        benefit *= (1.0 - EARLY_REDUCTION_PER_YEAR * years_early).max(0.0);
    } else if claim_age > FULL_RETIREMENT_AGE {
        let years_delayed = (claim_age - FULL_RETIREMENT_AGE) as f64;
        benefit *= 1.0 + DELAYED_CREDIT_PER_YEAR * years_delayed;
    }
    if worked_thirty_years {
        benefit = benefit.max(WORKED_THIRTY_YEAR_FLOOR);
    }

    Some((benefit * 100.0).round() / 100.0)
}

/// Provenance of the benefit field's current value. Only `Unset` is eligible
/// for auto-prefill; an auto-filled value is treated the same as a
/// user-entered one until the field is explicitly cleared.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PrefillState {
    Unset,
    AutoFilled,
    UserEdited,
}

/// The monthly-benefit form field together with its prefill tri-state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BenefitField {
    value: Option<f64>,
    state: PrefillState,
}

impl Default for BenefitField {
    fn default() -> Self {
        Self {
            value: None,
            state: PrefillState::Unset,
        }
    }
}

impl BenefitField {
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn state(&self) -> PrefillState {
        self.state
    }

    /// Stores a value the user typed; reactive refreshes will not touch it.
    pub fn set_user_value(&mut self, value: f64) {
        self.value = Some(value);
        self.state = PrefillState::UserEdited;
    }

    /// Empties the field, making it eligible for auto-prefill again.
    pub fn clear(&mut self) {
        self.value = None;
        self.state = PrefillState::Unset;
    }

    /// Recomputes the estimate, but only while the field is still unset.
    pub fn refresh(&mut self, annual_income: f64, claim_age: i32, worked_thirty_years: bool) {
        if self.state != PrefillState::Unset {
            return;
        }
        if let Some(estimate) = estimate_monthly_benefit(annual_income, claim_age, worked_thirty_years)
        {
            self.value = Some(estimate);
            self.state = PrefillState::AutoFilled;
        }
    }
}
