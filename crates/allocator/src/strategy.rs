//! Objective selection. A strategy maps each player to a scalar objective
//! and declares how bench slots should be ranked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use types::Player;

use crate::error::AllocationError;

/// Weight on predicted score in the balanced objective.
const BALANCED_PREDICTED_WEIGHT: f64 = 0.7;
/// Weight on adjusted value in the balanced objective.
const BALANCED_VALUE_WEIGHT: f64 = 0.3;

/// Selection objective for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Maximize risk/upside-adjusted points per dollar.
    Value,
    /// Maximize raw predicted score, price be damned.
    HighScore,
    /// Blend of predicted score and adjusted value.
    Balanced,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Value, Strategy::HighScore, Strategy::Balanced];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Value => "value",
            Strategy::HighScore => "high_score",
            Strategy::Balanced => "balanced",
        }
    }

    /// The scalar this strategy maximizes. Pure and deterministic.
    #[inline]
    pub fn objective(&self, player: &Player) -> f64 {
        match self {
            Strategy::Value => player.adjusted_value,
            Strategy::HighScore => player.predicted_score,
            Strategy::Balanced => {
                BALANCED_PREDICTED_WEIGHT * player.predicted_score
                    + BALANCED_VALUE_WEIGHT * player.adjusted_value
            }
        }
    }

    /// Preferred ranking for the bench pass.
    ///
    /// High-score runs spend aggressively on the field, so their bench is
    /// ranked cheapest-first to protect the remaining budget.
    pub fn reserve_order(&self) -> ReserveOrder {
        match self {
            Strategy::HighScore => ReserveOrder::PriceAscending,
            Strategy::Value | Strategy::Balanced => ReserveOrder::AdjustedValue,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "value" => Ok(Strategy::Value),
            // max_score is the legacy name for the same objective
            "high_score" | "max_score" => Ok(Strategy::HighScore),
            "balanced" => Ok(Strategy::Balanced),
            other => Err(AllocationError::InvalidStrategy(other.to_string())),
        }
    }
}

/// How reserve candidates are ranked in the preferred bench pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOrder {
    /// Adjusted value descending (best bench cover per dollar).
    AdjustedValue,
    /// Price ascending (cheapest bodies first).
    PriceAscending,
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{PlayerId, Position, Price};

    fn scored_player(predicted: f64, adjusted: f64) -> Player {
        let mut p = Player::new(
            PlayerId(1),
            "Test Player",
            "Richmond",
            Position::Midfielder,
            Price(400_000),
        );
        p.predicted_score = predicted;
        p.adjusted_value = adjusted;
        p
    }

    #[test]
    fn test_parse_known_strategies() {
        assert_eq!("value".parse::<Strategy>().unwrap(), Strategy::Value);
        assert_eq!("high_score".parse::<Strategy>().unwrap(), Strategy::HighScore);
        assert_eq!("balanced".parse::<Strategy>().unwrap(), Strategy::Balanced);
    }

    #[test]
    fn test_max_score_alias() {
        assert_eq!("max_score".parse::<Strategy>().unwrap(), Strategy::HighScore);
        assert_eq!("MAX_SCORE".parse::<Strategy>().unwrap(), Strategy::HighScore);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = "galaxy_brain".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err,
            AllocationError::InvalidStrategy("galaxy_brain".to_string())
        );
    }

    #[test]
    fn test_objectives() {
        let p = scored_player(100.0, 40.0);
        assert_eq!(Strategy::Value.objective(&p), 40.0);
        assert_eq!(Strategy::HighScore.objective(&p), 100.0);
        assert!((Strategy::Balanced.objective(&p) - 82.0).abs() < 1e-9);
    }

    #[test]
    fn test_reserve_order_per_strategy() {
        assert_eq!(
            Strategy::HighScore.reserve_order(),
            ReserveOrder::PriceAscending
        );
        assert_eq!(Strategy::Value.reserve_order(), ReserveOrder::AdjustedValue);
        assert_eq!(
            Strategy::Balanced.reserve_order(),
            ReserveOrder::AdjustedValue
        );
    }
}
