/// Rounds to the nearest integer with halves going up (towards +inf), so
/// `-2.5` becomes `-2` and `2.5` becomes `3`. Saturates at the `i32` bounds.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Largest value of the slice. Returns `None` for empty input.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Smallest value of the slice. Returns `None` for empty input.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Most frequent entry of the slice.
///
/// On a count tie the entry whose first occurrence comes earliest wins.
pub fn modal<S: AsRef<str>>(values: &[S]) -> Option<&str> {
    // (text, count) in first-seen order
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for v in values {
        let v = v.as_ref();
        match counts.iter_mut().find(|(text, _)| *text == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (text, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((text, n));
        }
    }
    best.map(|(text, _)| text)
}
