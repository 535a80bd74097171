// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Smallest step of the form {1, 2, 5} x 10^k that splits `span` into at most `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 5.0, 10.0] {
        if m * mag >= raw * (1.0 - 1e-9) {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Tick positions on multiples of `nice_step` inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(hi - lo, target);
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .filter(|v| *v >= lo - eps && *v <= hi + eps)
        // normalise -0.0 so labels never read "-0"
        .map(|v| if v.abs() < eps { 0.0 } else { v })
        .collect()
}

/// Decimal places needed to tell ticks `step` apart.
pub fn decimals_for_step(step: f64) -> usize {
    if step <= 0.0 || step >= 1.0 { return 0; }
    (-step.log10().floor()).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_one_two_five() {
        assert_eq!(nice_step(110.0, 6), 20.0);
        assert_eq!(nice_step(1400.0, 9), 200.0);
        assert!((nice_step(7.6, 10) - 1.0).abs() < 1e-12);
        assert!((nice_step(0.9, 4) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ticks_stay_inside_range() {
        assert_eq!(nice_ticks(0.0, 110.0, 6), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let t = nice_ticks(-15.5, 326.5, 8);
        assert_eq!(t.first().copied(), Some(0.0));
        assert!(t.iter().all(|v| *v >= -15.5 && *v <= 326.5));
    }

    #[test]
    fn decimals() {
        assert_eq!(decimals_for_step(20.0), 0);
        assert_eq!(decimals_for_step(0.5), 1);
        assert_eq!(decimals_for_step(0.25), 1);
        assert_eq!(decimals_for_step(0.01), 2);
    }
}
