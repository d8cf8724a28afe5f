//! Footer year stamp.

use chrono::{Datelike, Local};

pub fn year_text(date: impl Datelike) -> String {
    date.year().to_string()
}

/// Current year in local time.
pub fn current_year_text() -> String {
    year_text(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_year_text() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(year_text(date), "2026");
    }
}
