use super::{choose, JACKPOT_ODDS, POWERBALL_POOL, WHITE_PICK, WHITE_POOL};

/// Fixed (non-jackpot) prize schedule, base game without Power Play.
///
/// Nine paying tiers indexed by (white-ball matches, Powerball match).
/// The tenth winning cell, 5 whites + Powerball, is the jackpot: it has no
/// fixed amount and is handled by the split model in `sharing`.

/// One non-jackpot prize tier.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct PrizeTier {
    pub white_matches: u64,
    pub powerball_match: bool,
    /// Fixed payout in USD.
    pub prize: f64,
}

/// The nine sub-jackpot tiers. Combinations not listed here pay $0.
/// The (2 whites, no Powerball) row pays nothing; it stays in the table so
/// the enumeration covers every tier the schedule names.
pub const FIXED_TIERS: [PrizeTier; 9] = [
    PrizeTier { white_matches: 5, powerball_match: false, prize: 1_000_000.0 },
    PrizeTier { white_matches: 4, powerball_match: true, prize: 50_000.0 },
    PrizeTier { white_matches: 4, powerball_match: false, prize: 100.0 },
    PrizeTier { white_matches: 3, powerball_match: true, prize: 100.0 },
    PrizeTier { white_matches: 3, powerball_match: false, prize: 7.0 },
    PrizeTier { white_matches: 2, powerball_match: true, prize: 7.0 },
    PrizeTier { white_matches: 2, powerball_match: false, prize: 0.0 },
    PrizeTier { white_matches: 1, powerball_match: true, prize: 4.0 },
    PrizeTier { white_matches: 0, powerball_match: true, prize: 4.0 },
];

/// Number of outcomes with exactly `k_white` white matches and the given
/// Powerball result: C(5,k) * C(64, 5-k) * (1 if matched else 25).
#[inline]
pub fn outcomes_for(k_white: u64, powerball_match: bool) -> f64 {
    if k_white > WHITE_PICK {
        return 0.0;
    }
    let white_ways =
        choose(WHITE_PICK, k_white) * choose(WHITE_POOL - WHITE_PICK, WHITE_PICK - k_white);
    let pb_ways = if powerball_match {
        1.0
    } else {
        (POWERBALL_POOL - 1) as f64
    };
    white_ways * pb_ways
}

#[inline]
pub fn probability_for(k_white: u64, powerball_match: bool) -> f64 {
    outcomes_for(k_white, powerball_match) / JACKPOT_ODDS
}

/// Expected value per ticket from the fixed tiers alone.
///
/// A constant: independent of the jackpot size, ticket volume, and tax
/// inputs. Lower-tier prizes are reported untaxed throughout.
pub fn lower_tier_ev_per_ticket() -> f64 {
    FIXED_TIERS
        .iter()
        .map(|t| probability_for(t.white_matches, t.powerball_match) * t.prize)
        .sum()
}
