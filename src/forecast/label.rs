/// Converts a day's offset in the forecast list into its display label.
///
/// | Index | Label     |
/// |-------|-----------|
/// | 0     | Tomorrow  |
/// | 1     | Day After |
/// | 2     | Day 3     |
/// | n >= 3| Day {n+2} |
///
/// Only indices below [`MAX_FORECAST_DAYS`](super::MAX_FORECAST_DAYS) are
/// produced today; larger ones are reserved for a longer horizon.
pub fn day_label(index: usize) -> String {
    match index {
        0 => "Tomorrow".into(),
        1 => "Day After".into(),
        2 => "Day 3".into(),
        n => format!("Day {}", n + 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_labels() {
        assert_eq!(day_label(0), "Tomorrow");
        assert_eq!(day_label(1), "Day After");
        assert_eq!(day_label(2), "Day 3");
        assert_eq!(day_label(3), "Day 5");
        assert_eq!(day_label(6), "Day 8");
    }
}
