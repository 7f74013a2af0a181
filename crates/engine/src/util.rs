/// Rounds `value` to `decimals` decimal places, half away from zero
/// (`f64::round` semantics).
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
        assert_eq!(round_to(200.0 / 3.0, 2), 66.67);
        assert_eq!(round_to(60.0, 2), 60.0);
    }

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
        assert_eq!(round_to(2.0 / 3.0, 4), 0.6667);
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 0.125 and 12.5 are exact in binary, so this really exercises the
        // tie rule rather than representation error.
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }
}
