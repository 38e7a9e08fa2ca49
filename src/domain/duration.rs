use chrono::{Datelike, NaiveDate};

pub const UNKNOWN_DURATION: &str = "Duración desconocida";

/// Whole years and remaining whole months between two dates.
///
/// A month only counts once its day-of-month has been reached; spans where
/// `end` precedes `start` collapse to zero.
pub fn elapsed_years_months(start: NaiveDate, end: NaiveDate) -> (u32, u32) {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }

    let months = months.max(0) as u32;
    (months / 12, months % 12)
}

/// Human readable length of an employment period, e.g. `"2 años y 2 meses"`.
///
/// `today` stands in for the end of a current position.
pub fn format_employment_duration(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    is_current: bool,
    today: NaiveDate,
) -> String {
    let Some(start) = start else {
        return UNKNOWN_DURATION.to_string();
    };

    let effective_end = match (is_current, end) {
        (true, _) => today,
        (false, Some(end)) => end,
        (false, None) => return UNKNOWN_DURATION.to_string(),
    };

    let (years, months) = elapsed_years_months(start, effective_end);

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(plural(years, "año", "años"));
    }
    if months > 0 {
        parts.push(plural(months, "mes", "meses"));
    }

    if parts.is_empty() {
        "0 meses".to_string()
    } else {
        parts.join(" y ")
    }
}

fn plural(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
