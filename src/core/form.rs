use chrono::NaiveDate;

use super::benefit::{BenefitField, FULL_RETIREMENT_AGE};
use super::timeline::Timeline;
use super::types::{Debt, Snapshot};

// Fallback shown when neither an explicit age nor a birth date exists.
const DEFAULT_CURRENT_AGE: i32 = 30;

/// Every field of the planner form, with the reconciliation and prefill
/// wiring that keeps them consistent. One instance serves every host screen;
/// each setter is one atomic edit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerForm {
    as_of: NaiveDate,
    pub timeline: Timeline,

    pub income: f64,
    pub expenses: f64,
    pub return_rate: f64,
    pub inflation_rate: f64,

    pub contrib_after_tax: f64,
    pub contrib_tax_deferred: f64,
    pub contrib_tax_free: f64,

    pub sav_after_tax: f64,
    pub sav_tax_deferred: f64,
    pub sav_tax_free: f64,

    pub pension_start: Option<NaiveDate>,
    pub pension_yearly: f64,

    pub ss_start_age: i32,
    pub ss_monthly: BenefitField,
    pub worked_thirty_years: bool,

    pub debts: Vec<Debt>,
}

impl PlannerForm {
    /// An empty form anchored to `as_of`, the reference date for every age
    /// derivation. Injected rather than read from the clock so edits are
    /// deterministic.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            timeline: Timeline::default(),
            income: 0.0,
            expenses: 0.0,
            return_rate: 0.0,
            inflation_rate: 0.0,
            contrib_after_tax: 0.0,
            contrib_tax_deferred: 0.0,
            contrib_tax_free: 0.0,
            sav_after_tax: 0.0,
            sav_tax_deferred: 0.0,
            sav_tax_free: 0.0,
            pension_start: None,
            pension_yearly: 0.0,
            ss_start_age: FULL_RETIREMENT_AGE,
            ss_monthly: BenefitField::default(),
            worked_thirty_years: false,
            debts: Vec::new(),
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Claim age used for the benefit prefill: retirement age when set,
    /// otherwise the Social Security start age, otherwise the full
    /// retirement age. Zero counts as unset on both fallbacks.
    pub fn claim_age(&self) -> i32 {
        self.timeline
            .retirement_age
            .filter(|age| *age != 0)
            .or(Some(self.ss_start_age).filter(|age| *age != 0))
            .unwrap_or(FULL_RETIREMENT_AGE)
    }

    fn refresh_benefit(&mut self) {
        self.ss_monthly
            .refresh(self.income, self.claim_age(), self.worked_thirty_years);
    }

    pub fn edit_date_of_birth(&mut self, dob: Option<NaiveDate>) {
        self.timeline.edit_date_of_birth(dob, self.as_of);
    }

    pub fn edit_current_age(&mut self, age: i32) {
        self.timeline.edit_current_age(age, self.as_of);
    }

    pub fn edit_retirement_age(&mut self, age: i32) {
        self.timeline.edit_retirement_age(age);
        self.refresh_benefit();
    }

    pub fn edit_retirement_date(&mut self, date: Option<NaiveDate>) {
        self.timeline.edit_retirement_date(date);
        // The derived retirement age feeds the claim age.
        self.refresh_benefit();
    }

    pub fn set_income(&mut self, income: f64) {
        self.income = income;
        self.refresh_benefit();
    }

    pub fn set_worked_thirty_years(&mut self, worked: bool) {
        self.worked_thirty_years = worked;
        self.refresh_benefit();
    }

    pub fn set_ss_monthly(&mut self, value: f64) {
        self.ss_monthly.set_user_value(value);
    }

    pub fn clear_ss_monthly(&mut self) {
        self.ss_monthly.clear();
        self.refresh_benefit();
    }

    pub fn net_worth(&self) -> f64 {
        self.sav_after_tax + self.sav_tax_deferred + self.sav_tax_free
    }

    /// Assembles the immutable payload for the calculation service.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            dob: self.timeline.date_of_birth,
            current_age: self.timeline.current_age.unwrap_or(DEFAULT_CURRENT_AGE),
            retirement_age: self.timeline.retirement_age,
            retirement_date: self.timeline.retirement_date,
            income: self.income,
            expenses: self.expenses,
            net_worth: self.net_worth(),
            return_rate: self.return_rate,
            inflation_rate: self.inflation_rate,
            contrib_after_tax: self.contrib_after_tax,
            contrib_tax_deferred: self.contrib_tax_deferred,
            contrib_tax_free: self.contrib_tax_free,
            sav_after_tax: self.sav_after_tax,
            sav_tax_deferred: self.sav_tax_deferred,
            sav_tax_free: self.sav_tax_free,
            pension_start: self.pension_start,
            pension_yearly: self.pension_yearly,
            ss_start_age: self.ss_start_age,
            ss_monthly: self.ss_monthly.value(),
            worked_thirty_years: self.worked_thirty_years,
            debts: self.debts.clone(),
        }
    }
}
