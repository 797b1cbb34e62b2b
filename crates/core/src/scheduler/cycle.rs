//! Cycle construction.

/// Cycle length used when none is configured.
pub const DEFAULT_CYCLE_SIZE: usize = 20;

/// Clamp a ratio into `[0, 1]`. NaN collapses to 0.
pub(crate) fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Number of winning slots a cycle of `cycle_size` holds at `ratio`.
///
/// Halves round to even, so `20 * 0.125 = 2.5` gives 2 wins.
pub fn win_count(cycle_size: usize, ratio: f64) -> usize {
    (cycle_size as f64 * clamp_ratio(ratio)).round_ties_even() as usize
}

/// Build the win/lose pattern for one cycle.
///
/// Win `i` targets `round(i * cycle_size / wins)`. A target that is already
/// taken walks forward (wrapping) to the next free slot.
pub fn build_cycle(cycle_size: usize, ratio: f64) -> Vec<bool> {
    let n = cycle_size.max(1);
    let wins = win_count(n, ratio);
    let mut pattern = vec![false; n];
    if wins == 0 {
        return pattern;
    }

    let step = n as f64 / wins as f64;
    for i in 0..wins {
        let mut pos = ((i as f64) * step).round_ties_even() as usize % n;
        while pattern[pos] {
            pos = (pos + 1) % n;
        }
        pattern[pos] = true;
    }
    pattern
}
