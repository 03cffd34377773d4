use std::io::Write;

use crate::core::PathYear;

/// Writes the year-by-year projection path as CSV with the columns
/// `age,balance,expenses,debtPayment,totalDebtBalance`, money formatted to
/// two decimals and the debt total summed over each row's remaining
/// balances.
pub fn write_path_csv<W: Write>(writer: W, path: &[PathYear]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["age", "balance", "expenses", "debtPayment", "totalDebtBalance"])?;
    for year in path {
        // fold from positive zero: an empty sum() is -0.0 and {:.2} keeps the sign
        let total_debt_balance = year
            .debts
            .iter()
            .fold(0.0, |total, debt| total + debt.balance);
        csv_writer.write_record([
            year.age.to_string(),
            format!("{:.2}", year.balance),
            format!("{:.2}", year.expenses),
            format!("{:.2}", year.debt_payment),
            format!("{total_debt_balance:.2}"),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DebtBalance;

    fn path_year(age: u32, balance: f64, expenses: f64, debt_payment: f64) -> PathYear {
        PathYear {
            age,
            balance,
            expenses,
            debt_payment,
            debts: Vec::new(),
        }
    }

    #[test]
    fn writes_header_and_two_decimal_rows() {
        let mut year = path_year(35, 610_000.0, 50_000.5, 3_000.0);
        year.debts = vec![
            DebtBalance {
                label: "House".to_string(),
                balance: 240_000.25,
            },
            DebtBalance {
                label: "Car".to_string(),
                balance: 9_000.0,
            },
        ];
        let path = vec![year, path_year(36, 655_123.456, 51_000.0, 0.0)];

        let mut buffer = Vec::new();
        write_path_csv(&mut buffer, &path).expect("csv should write");
        let csv = String::from_utf8(buffer).expect("valid utf-8");

        assert_eq!(
            csv,
            "age,balance,expenses,debtPayment,totalDebtBalance\n\
             35,610000.00,50000.50,3000.00,249000.25\n\
             36,655123.46,51000.00,0.00,0.00\n"
        );
    }

    #[test]
    fn row_without_debts_totals_to_unsigned_zero() {
        let mut buffer = Vec::new();
        write_path_csv(&mut buffer, &[path_year(35, 1_000.0, 500.0, 0.0)]).expect("csv should write");
        let csv = String::from_utf8(buffer).expect("valid utf-8");
        assert_eq!(
            csv,
            "age,balance,expenses,debtPayment,totalDebtBalance\n\
             35,1000.00,500.00,0.00,0.00\n"
        );
        assert!(!csv.contains("-0.00"));
    }

    #[test]
    fn empty_path_writes_header_only() {
        let mut buffer = Vec::new();
        write_path_csv(&mut buffer, &[]).expect("csv should write");
        assert_eq!(
            String::from_utf8(buffer).expect("valid utf-8"),
            "age,balance,expenses,debtPayment,totalDebtBalance\n"
        );
    }
}
