use chrono::{Datelike, Duration, Months, NaiveDate};

/// Month-end dates for `months` consecutive periods, starting with the
/// month containing `start`.
pub(crate) fn month_ends(start: NaiveDate, months: usize) -> Vec<NaiveDate> {
    let mut first = start.with_day(1).unwrap_or(start);
    let mut dates = Vec::with_capacity(months);
    for _ in 0..months {
        let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
        dates.push(next.pred_opt().unwrap_or(first));
        first = next;
    }
    dates
}

/// Consecutive daily dates starting at `start`.
pub(crate) fn days_from(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days)
        .map(|offset| start + Duration::days(offset as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn month_ends_cover_leap_february() {
        let dates = month_ends(date(2024, 1, 1), 3);
        assert_eq!(
            dates,
            vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
        );
    }

    #[test]
    fn month_ends_start_mid_month() {
        let dates = month_ends(date(2024, 3, 15), 1);
        assert_eq!(dates, vec![date(2024, 3, 31)]);
    }

    #[test]
    fn zero_periods_yield_empty_timeline() {
        assert!(month_ends(date(2024, 1, 1), 0).is_empty());
        assert!(days_from(date(2024, 1, 1), 0).is_empty());
    }

    #[test]
    fn days_are_consecutive() {
        let dates = days_from(date(2024, 2, 28), 3);
        assert_eq!(
            dates,
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }
}
