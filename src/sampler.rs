// Sampler - pure function producing the input sizes a run is timed at.
// No side effects, deterministic; can be tested in isolation.

use crate::types::SAMPLE_FLOOR;

/// Generate `steps` input sizes linearly interpolated between
/// [`SAMPLE_FLOOR`] and `max_n` inclusive.
///
/// Fractional interpolation results are truncated to integers, matching an
/// integer linspace. Duplicates are allowed when `max_n` is close to the
/// floor and `steps` is large; no dedup is performed.
///
/// The caller guarantees `max_n >= 100` and `steps in [4, 30]`, so the
/// returned sequence is non-decreasing with first element [`SAMPLE_FLOOR`]
/// and last element `max_n`.
pub fn generate_sizes(max_n: usize, steps: usize) -> Vec<usize> {
    let span = max_n.saturating_sub(SAMPLE_FLOOR) as f64;
    let divisions = steps.saturating_sub(1).max(1) as f64;

    (0..steps)
        .map(|i| {
            let value = SAMPLE_FLOOR as f64 + span * (i as f64) / divisions;
            value as usize
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_length() {
        let sizes = generate_sizes(1000, 5);
        assert_eq!(sizes.len(), 5);
        assert_eq!(sizes[0], SAMPLE_FLOOR);
        assert_eq!(*sizes.last().unwrap(), 1000);
    }

    #[test]
    fn test_non_decreasing() {
        let sizes = generate_sizes(20_000, 30);
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_even_spacing_for_round_span() {
        // span 990 over 4 divisions is 247.5 per step, truncated
        assert_eq!(generate_sizes(1000, 5), vec![10, 257, 505, 752, 1000]);
    }

    #[test]
    fn test_duplicates_allowed_near_floor() {
        // max_n at the clamp minimum with the max step count forces repeats
        let sizes = generate_sizes(100, 30);
        assert_eq!(sizes.len(), 30);
        assert_eq!(sizes[0], 10);
        assert_eq!(*sizes.last().unwrap(), 100);
        // consecutive truncated values can collide; that is fine
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_minimum_step_count() {
        let sizes = generate_sizes(100, 4);
        assert_eq!(sizes, vec![10, 40, 70, 100]);
    }
}
