//! Deterministic player scoring.
//!
//! Populates `predicted_score` and `adjusted_value` on each player before
//! allocation:
//!
//! - predicted score = last season's average plus a development projection
//!   for rookies and young players, scaled by draft pedigree,
//! - value score = predicted points per $100k of price,
//! - risk factor discounts injury history,
//! - upside factor rewards youth, potential, and draft pedigree,
//! - adjusted value = value score x risk x upside.
//!
//! Pure over its inputs; scoring the same pool twice gives identical
//! numbers.

use serde::{Deserialize, Serialize};
use types::Player;

/// Tunable scoring coefficients. Defaults match the standard model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Age at or below which a player counts as a rookie.
    pub rookie_age: u32,
    /// Upper age of the young-developing band.
    pub young_age: u32,
    /// Projected score improvement for a top-pick rookie.
    pub rookie_improvement: f64,
    /// Projected score improvement for a top-pick young player.
    pub young_improvement: f64,
    /// Risk penalty per recorded injury.
    pub injury_penalty: f64,
    /// Lower clamp on the risk factor.
    pub risk_floor: f64,
    /// Extra discount when the player was injured last season.
    pub recent_injury_discount: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rookie_age: 20,
            young_age: 23,
            rookie_improvement: 15.0,
            young_improvement: 8.0,
            injury_penalty: 0.1,
            risk_floor: 0.5,
            recent_injury_discount: 0.9,
        }
    }
}

/// Draft picks past this number carry no pedigree value.
const LAST_VALUED_PICK: u32 = 80;
/// Picks at or inside this number mark elite pedigree.
const ELITE_PICK: u32 = 5;
/// Fewer career games than this counts as unproven (under two seasons).
const BREAKOUT_GAMES: u32 = 44;
/// Average score above which an unproven young player looks like a breakout.
const BREAKOUT_AVG: f64 = 60.0;

/// Normalized draft pedigree: 1.0 for pick 1, fading linearly to 0.
pub fn draft_value(draft_pick: u32) -> f64 {
    if draft_pick >= LAST_VALUED_PICK {
        return 0.0;
    }
    f64::from(LAST_VALUED_PICK - draft_pick) / f64::from(LAST_VALUED_PICK - 1)
}

/// Projected score for the coming season.
pub fn predicted_score(player: &Player, config: &ScoringConfig) -> f64 {
    let improvement = if player.age <= config.rookie_age {
        draft_value(player.draft_pick) * config.rookie_improvement
    } else if player.age <= config.young_age {
        draft_value(player.draft_pick) * config.young_improvement
    } else {
        0.0
    };
    player.avg_score + improvement
}

/// Injury risk discount in `[risk_floor x recent_injury_discount, 1.0]`.
pub fn risk_factor(player: &Player, config: &ScoringConfig) -> f64 {
    let mut risk = (1.0 - f64::from(player.injury_history) * config.injury_penalty)
        .clamp(config.risk_floor, 1.0);
    if player.injured_last_year {
        risk *= config.recent_injury_discount;
    }
    risk
}

/// Youth/pedigree multiplier, 1.0 for established players.
pub fn upside_factor(player: &Player, config: &ScoringConfig) -> f64 {
    let pedigree = draft_value(player.draft_pick);
    let mut upside = if player.age <= config.rookie_age {
        1.0 + (player.potential - 1.0) * 1.5 + pedigree * 0.3
    } else if player.age <= config.young_age {
        1.0 + (player.potential - 1.0) * 1.2 + pedigree * 0.2
    } else {
        1.0
    };
    if player.draft_pick <= ELITE_PICK && player.age <= config.young_age {
        upside *= 1.15;
    }
    if player.age <= config.young_age
        && player.games_played < BREAKOUT_GAMES
        && player.avg_score > BREAKOUT_AVG
    {
        upside *= 1.1;
    }
    upside
}

/// Score one player in place.
pub fn score_player(player: &mut Player, config: &ScoringConfig) {
    player.predicted_score = predicted_score(player, config);

    // Free-listed players carry no price; treat their value density as zero
    // rather than dividing by it.
    let value_score = if player.price.is_zero() {
        0.0
    } else {
        player.predicted_score / player.price.raw() as f64 * 100_000.0
    };
    player.adjusted_value =
        value_score * risk_factor(player, config) * upside_factor(player, config);
}

/// Score every player in the pool.
pub fn score_pool(pool: &mut [Player], config: &ScoringConfig) {
    for player in pool {
        score_player(player, config);
    }
}
