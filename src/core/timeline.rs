use chrono::{Datelike, NaiveDate};

/// Parses an ISO-8601 `YYYY-MM-DD` date, returning `None` on anything else.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

// Feb 29 in a non-leap year resolves to Feb 28 of the same year. Any other
// unrepresentable date (year out of range) stays None.
fn resolve_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

fn before_birthday(reference: NaiveDate, month: u32, day: u32) -> bool {
    (reference.month(), reference.day()) < (month, day)
}

/// Completed calendar years lived by someone born on `dob`, measured as of
/// `as_of`. Not elapsed days divided by 365: the count increments exactly on
/// the month/day of birth.
pub fn age_as_of(dob: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - dob.year();
    if before_birthday(as_of, dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Age reached on `target` by someone born on `dob`.
pub fn age_at_date(dob: NaiveDate, target: NaiveDate) -> i32 {
    age_as_of(dob, target)
}

/// The date on which someone born on `dob` turns `age_years`: same month and
/// day, year shifted. Returns `None` when the shifted year is out of range.
pub fn date_at_age(dob: NaiveDate, age_years: i32) -> Option<NaiveDate> {
    let year = dob.year().checked_add(age_years)?;
    resolve_ymd(year, dob.month(), dob.day())
}

/// Inverse of `age_as_of`: a birth date consistent with being `age_years`
/// old today. The month/day of `reference_dob` is preserved when present,
/// today's month/day otherwise.
pub fn date_of_birth_from_age(
    age_years: i32,
    reference_dob: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let (month, day) = reference_dob
        .map(|d| (d.month(), d.day()))
        .unwrap_or((today.month(), today.day()));
    let mut year = today.year().checked_sub(age_years)?;
    if before_birthday(today, month, day) {
        year = year.checked_sub(1)?;
    }
    resolve_ymd(year, month, day)
}

/// One person's chronology. Every field is optional so an untouched or
/// unparseable form input is representable; the edit methods keep the
/// derived fields consistent after each single-field change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeline {
    pub date_of_birth: Option<NaiveDate>,
    pub current_age: Option<i32>,
    pub retirement_age: Option<i32>,
    pub retirement_date: Option<NaiveDate>,
}

impl Timeline {
    /// Replaces the birth date, re-deriving current age (as of `as_of`) and
    /// retirement date. Retirement age is the preserved driver.
    pub fn edit_date_of_birth(&mut self, dob: Option<NaiveDate>, as_of: NaiveDate) {
        self.date_of_birth = dob;
        self.current_age = dob.map(|d| age_as_of(d, as_of));
        self.retirement_date = match (dob, self.retirement_age) {
            (Some(d), Some(age)) => date_at_age(d, age),
            _ => None,
        };
    }

    /// Replaces the current age, re-deriving the birth date (month/day of
    /// the old birth date preserved) and the retirement date.
    pub fn edit_current_age(&mut self, age: i32, as_of: NaiveDate) {
        let dob = date_of_birth_from_age(age, self.date_of_birth, as_of);
        self.date_of_birth = dob;
        self.current_age = Some(age);
        self.retirement_date = match (dob, self.retirement_age) {
            (Some(d), Some(retirement_age)) => date_at_age(d, retirement_age),
            _ => None,
        };
    }

    /// Replaces the retirement age; the retirement date follows when a birth
    /// date exists and otherwise keeps its previous value.
    pub fn edit_retirement_age(&mut self, age: i32) {
        self.retirement_age = Some(age);
        if let Some(date) = self.date_of_birth.and_then(|dob| date_at_age(dob, age)) {
            self.retirement_date = Some(date);
        }
    }

    /// Replaces the retirement date; the retirement age follows when both
    /// dates are present. An unparseable edit (`None`) leaves the previous
    /// retirement age in place rather than clearing it.
    pub fn edit_retirement_date(&mut self, date: Option<NaiveDate>) {
        self.retirement_date = date;
        if let (Some(dob), Some(target)) = (self.date_of_birth, date) {
            self.retirement_age = Some(age_at_date(dob, target));
        }
    }
}
