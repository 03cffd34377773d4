use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One outstanding debt as entered on the form and sent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub label: String,
    pub balance: f64,
    pub apr_percent: f64,
    pub annual_payment: f64,
}

/// The immutable payload POSTed to the calculation service. Field names and
/// shapes are the wire contract; dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub dob: Option<NaiveDate>,
    pub current_age: i32,
    pub retirement_age: Option<i32>,
    pub retirement_date: Option<NaiveDate>,

    pub income: f64,
    pub expenses: f64,
    pub net_worth: f64,
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
    /// May be the client-side prefill; the service still estimates when null.
    pub ss_monthly: Option<f64>,
    #[serde(rename = "worked30")]
    pub worked_thirty_years: bool,

    pub debts: Vec<Debt>,
}

/// Remaining balance of one debt inside a projection-path row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBalance {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub balance: f64,
}

/// One per-age row of the optional year-by-year projection path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathYear {
    pub age: u32,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub debt_payment: f64,
    #[serde(default)]
    pub debts: Vec<DebtBalance>,
}

/// Result returned by the calculation service. A null `retireAge` means the
/// plan is not sustainable before age 100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcResponse {
    pub retire_age: Option<u32>,
    #[serde(default)]
    pub final_savings: f64,
    #[serde(default)]
    pub safe_withdraw: f64,
    #[serde(default)]
    pub path: Option<Vec<PathYear>>,
}
