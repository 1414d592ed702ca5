pub mod sharing;
pub mod tiers;
pub mod winner;

/// Powerball drawing structure: 5 white balls drawn from 69, 1 red ball
/// (the Powerball) drawn from 26. Fixed by the game's rules, not configurable.
pub const WHITE_POOL: u64 = 69;
pub const WHITE_PICK: u64 = 5;
pub const POWERBALL_POOL: u64 = 26;

/// Total equally likely outcomes = C(69,5) * 26.
/// This is the denominator for every tier probability, including the jackpot.
pub const JACKPOT_ODDS: f64 = 292_201_338.0;

/// Binomial coefficient C(n, r).
///
/// Multiplicative form, exact in f64 at this scale: the largest count we
/// ever need is C(69,5) ~ 11.2M, far inside the 2^53 safe-integer range.
pub fn choose(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    let mut num = 1.0;
    let mut den = 1.0;
    for i in 1..=r {
        num *= (n - r + i) as f64;
        den *= i as f64;
    }
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_small_values() {
        assert_eq!(choose(5, 0), 1.0);
        assert_eq!(choose(5, 5), 1.0);
        assert_eq!(choose(5, 2), 10.0);
        assert_eq!(choose(64, 1), 64.0);
        assert_eq!(choose(64, 3), 41_664.0);
    }

    #[test]
    fn test_choose_out_of_range_is_zero() {
        assert_eq!(choose(5, 6), 0.0);
        assert_eq!(choose(0, 1), 0.0);
    }

    #[test]
    fn test_jackpot_odds_match_combinatorics() {
        // C(69,5) = 11,238,513; times 26 powerball outcomes
        assert_eq!(choose(WHITE_POOL, WHITE_PICK), 11_238_513.0);
        assert_eq!(
            choose(WHITE_POOL, WHITE_PICK) * POWERBALL_POOL as f64,
            JACKPOT_ODDS
        );
    }
}
