/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to the nearest integer with halves rounding up, so 193.5 -> 194.
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_normal_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(193.5), 194);
        assert_eq!(round_half_up(193.49), 193);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(51.18), 51);
    }
}
