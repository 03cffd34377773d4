use std::fs::File;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use retirewise::api::CalculateClient;
use retirewise::core::{Debt, PlannerForm, parse_iso_date};
use retirewise::export::write_path_csv;

#[derive(Parser, Debug)]
#[command(
    name = "retirewise",
    about = "Retirement planner client (timeline reconciliation + Social Security prefill, \
             calculation by the RetireWise service)"
)]
struct Cli {
    #[arg(long, default_value = "1990-01-01", help = "Date of birth, YYYY-MM-DD")]
    dob: String,
    #[arg(long, help = "Current age override; derived from --dob when omitted")]
    age: Option<i32>,
    #[arg(long, default_value_t = 65)]
    retirement_age: i32,
    #[arg(
        long,
        help = "Retirement date, YYYY-MM-DD; overrides --retirement-age when both are given"
    )]
    retirement_date: Option<String>,

    #[arg(long, default_value_t = 90_000.0, help = "Current annual income")]
    income: f64,
    #[arg(long, default_value_t = 50_000.0, help = "Annual expenses")]
    expenses: f64,
    #[arg(long, default_value_t = 0.05, help = "Expected return rate, e.g. 0.05")]
    return_rate: f64,
    #[arg(long, default_value_t = 0.02, help = "Inflation rate, e.g. 0.02")]
    inflation_rate: f64,

    #[arg(long, default_value_t = 1_000.0)]
    contrib_after_tax: f64,
    #[arg(long, default_value_t = 2_500.0)]
    contrib_tax_deferred: f64,
    #[arg(long, default_value_t = 0.0)]
    contrib_tax_free: f64,

    #[arg(long, default_value_t = 10_000.0)]
    savings_after_tax: f64,
    #[arg(long, default_value_t = 500_000.0)]
    savings_tax_deferred: f64,
    #[arg(long, default_value_t = 100_000.0)]
    savings_tax_free: f64,

    #[arg(long, default_value = "2035-01-01", help = "Pension start date, YYYY-MM-DD")]
    pension_start: String,
    #[arg(long, default_value_t = 0.0, help = "Yearly pension payout")]
    pension_yearly: f64,

    #[arg(long, default_value_t = 67, help = "Social Security starting age")]
    ss_start_age: i32,
    #[arg(
        long,
        help = "Monthly Social Security benefit override; estimated from income when omitted"
    )]
    ss_monthly: Option<f64>,
    #[arg(long, help = "Floor the estimated benefit at $1,000/month")]
    worked30: bool,

    #[arg(
        long = "debt",
        value_name = "LABEL:BALANCE:APR:PAYMENT",
        help = "Debt entry, e.g. Car:12000:6.5:3000; repeatable"
    )]
    debts: Vec<String>,

    #[arg(long, help = "Calculation service base URL; defaults to RETIREWISE_API_BASE_URL")]
    base_url: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Write the year-by-year projection path as CSV"
    )]
    csv_out: Option<PathBuf>,
}

fn parse_debt(spec: &str) -> Result<Debt, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [label, balance, apr_percent, annual_payment] = parts.as_slice() else {
        return Err(format!(
            "--debt must be LABEL:BALANCE:APR:PAYMENT, got {spec:?}"
        ));
    };
    let parse_amount = |name: &str, raw: &str| -> Result<f64, String> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid {name} {raw:?} in --debt {spec:?}"))
    };
    Ok(Debt {
        label: label.trim().to_string(),
        balance: parse_amount("balance", balance)?,
        apr_percent: parse_amount("APR", apr_percent)?,
        annual_payment: parse_amount("payment", annual_payment)?,
    })
}

fn parse_date_arg(name: &str, raw: &str) -> Result<NaiveDate, String> {
    parse_iso_date(raw).ok_or_else(|| format!("{name} must be a YYYY-MM-DD date, got {raw:?}"))
}

fn build_form(cli: &Cli, today: NaiveDate) -> Result<PlannerForm, String> {
    for (name, value) in [
        ("--income", cli.income),
        ("--expenses", cli.expenses),
        ("--return-rate", cli.return_rate),
        ("--inflation-rate", cli.inflation_rate),
    ] {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }

    let mut form = PlannerForm::new(today);
    form.edit_date_of_birth(Some(parse_date_arg("--dob", &cli.dob)?));
    form.edit_retirement_age(cli.retirement_age);
    if let Some(age) = cli.age {
        form.edit_current_age(age);
    }
    if let Some(raw) = &cli.retirement_date {
        form.edit_retirement_date(Some(parse_date_arg("--retirement-date", raw)?));
    }

    // The income edit fires the one-shot benefit prefill, so every input the
    // estimate reads must be in place first.
    form.ss_start_age = cli.ss_start_age;
    form.set_worked_thirty_years(cli.worked30);
    form.set_income(cli.income);
    form.expenses = cli.expenses;
    form.return_rate = cli.return_rate;
    form.inflation_rate = cli.inflation_rate;

    form.contrib_after_tax = cli.contrib_after_tax;
    form.contrib_tax_deferred = cli.contrib_tax_deferred;
    form.contrib_tax_free = cli.contrib_tax_free;
    form.sav_after_tax = cli.savings_after_tax;
    form.sav_tax_deferred = cli.savings_tax_deferred;
    form.sav_tax_free = cli.savings_tax_free;

    form.pension_start = Some(parse_date_arg("--pension-start", &cli.pension_start)?);
    form.pension_yearly = cli.pension_yearly;

    if let Some(benefit) = cli.ss_monthly {
        form.set_ss_monthly(benefit);
    }

    form.debts = cli
        .debts
        .iter()
        .map(|spec| parse_debt(spec))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(form)
}

fn run(cli: Cli, today: NaiveDate) -> Result<(), String> {
    let form = build_form(&cli, today)?;
    let snapshot = form.snapshot();

    let client = match &cli.base_url {
        Some(url) => CalculateClient::new(url),
        None => CalculateClient::from_env().map_err(|e| e.to_string())?,
    };
    println!("Calling {}", client.calculate_url());
    let result = client.calculate(&snapshot).map_err(|e| e.to_string())?;

    match result.retire_age {
        Some(age) => {
            println!("Retirement age: {age}");
            println!("Projected savings: ${:.2}", result.final_savings);
            println!(
                "Safe withdrawal (4% rule): ${:.2}/year",
                result.safe_withdraw
            );
        }
        None => println!("Not sustainable before age 100. Adjust savings or expenses."),
    }

    if let Some(csv_path) = &cli.csv_out {
        match result.path.as_deref() {
            Some(path) if !path.is_empty() => {
                let file = File::create(csv_path)
                    .map_err(|e| format!("cannot create {}: {e}", csv_path.display()))?;
                write_path_csv(file, path)
                    .map_err(|e| format!("cannot write {}: {e}", csv_path.display()))?;
                println!("Wrote projection path to {}", csv_path.display());
            }
            _ => eprintln!("No projection path in the response; skipping CSV export."),
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let today = Local::now().date_naive();
    if let Err(message) = run(cli, today) {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn sample_cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("retirewise").chain(args.iter().copied()))
    }

    #[test]
    fn parse_debt_accepts_four_part_specs() {
        let debt = parse_debt("Car:12000:6.5:3000").expect("valid debt");
        assert_eq!(debt.label, "Car");
        assert_eq!(debt.balance, 12_000.0);
        assert_eq!(debt.apr_percent, 6.5);
        assert_eq!(debt.annual_payment, 3_000.0);
    }

    #[test]
    fn parse_debt_rejects_malformed_specs() {
        assert!(parse_debt("Car:12000:6.5").is_err());
        assert!(parse_debt("Car:abc:6.5:3000").is_err());
    }

    #[test]
    fn build_form_reconciles_defaults() {
        let cli = sample_cli(&[]);
        let form = build_form(&cli, date(2025, 8, 23)).expect("valid form");
        let snapshot = form.snapshot();

        assert_eq!(snapshot.current_age, 35);
        assert_eq!(snapshot.retirement_age, Some(65));
        assert_eq!(snapshot.retirement_date, Some(date(2055, 1, 1)));
        assert_eq!(snapshot.net_worth, 610_000.0);
        // Benefit prefilled from income 90k at claim age 65.
        assert_eq!(snapshot.ss_monthly, Some(2_772.0));
    }

    #[test]
    fn build_form_retirement_date_overrides_age() {
        let cli = sample_cli(&["--retirement-date", "2060-01-01"]);
        let form = build_form(&cli, date(2025, 8, 23)).expect("valid form");
        assert_eq!(form.timeline.retirement_age, Some(70));
        assert_eq!(form.timeline.retirement_date, Some(date(2060, 1, 1)));
    }

    #[test]
    fn build_form_prefills_benefit_with_worked_thirty_floor() {
        let cli = sample_cli(&["--income", "10000", "--worked30"]);
        let form = build_form(&cli, date(2025, 8, 23)).expect("valid form");
        // Base 350.00 * 0.88 at claim age 65 = 308.00, floored to 1000.
        assert_eq!(form.snapshot().ss_monthly, Some(1_000.0));
    }

    #[test]
    fn build_form_prefill_uses_the_ss_start_age_fallback() {
        let cli = sample_cli(&["--retirement-age", "0", "--ss-start-age", "70"]);
        let form = build_form(&cli, date(2025, 8, 23)).expect("valid form");
        // Claim age falls back to the SS start age: 3150 * 1.24 = 3906.00.
        assert_eq!(form.snapshot().ss_monthly, Some(3_906.0));
    }

    #[test]
    fn build_form_honors_benefit_override() {
        let cli = sample_cli(&["--ss-monthly", "1500"]);
        let form = build_form(&cli, date(2025, 8, 23)).expect("valid form");
        assert_eq!(form.snapshot().ss_monthly, Some(1_500.0));
    }

    #[test]
    fn build_form_rejects_bad_dates() {
        let cli = sample_cli(&["--dob", "01/01/1990"]);
        let err = build_form(&cli, date(2025, 8, 23)).expect_err("must reject bad dob");
        assert!(err.contains("--dob"));
    }
}
