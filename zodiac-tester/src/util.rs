use std::time::Duration;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Whole milliseconds, saturating, for JSON reports.
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" dashboard, ,quizzes,  errors ");
        assert_eq!(parts, vec!["dashboard", "quizzes", "errors"]);
    }

    #[test]
    fn millis_truncates_sub_millisecond_part() {
        assert_eq!(millis(Duration::from_micros(2_750)), 2);
    }
}
