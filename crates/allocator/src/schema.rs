//! Squad composition rules: slot counts per position, reserve bench size,
//! budget cap, and the buffer-distribution weights the planner uses.

use serde::{Deserialize, Serialize};
use types::{Cash, Position};

use crate::error::{AllocationError, Result};

// =============================================================================
// Position Rule
// =============================================================================

/// Quantity constraints for one position.
///
/// `min` players must be selected, at most `max` may be selected (active and
/// reserve combined), and `active` of the selected end up on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRule {
    pub min: usize,
    pub max: usize,
    pub active: usize,
}

impl PositionRule {
    pub const fn new(min: usize, max: usize, active: usize) -> Self {
        Self { min, max, active }
    }
}

// =============================================================================
// Buffer Weights
// =============================================================================

/// Proportional split of the discretionary budget buffer.
///
/// One weight per position plus one for the reserve bench; they must sum
/// to 1.0. Positions with larger weights get roomier spending ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferWeights {
    positions: [f64; Position::COUNT],
    reserve: f64,
}

impl BufferWeights {
    pub const fn new(positions: [f64; Position::COUNT], reserve: f64) -> Self {
        Self { positions, reserve }
    }

    #[inline]
    pub fn position(&self, position: Position) -> f64 {
        self.positions[position.index()]
    }

    #[inline]
    pub fn reserve(&self) -> f64 {
        self.reserve
    }

    fn sum(&self) -> f64 {
        self.positions.iter().sum::<f64>() + self.reserve
    }
}

impl Default for BufferWeights {
    /// Midfield-heavy split: MID 0.35, DEF 0.25, FWD 0.20, RUC 0.15,
    /// reserve 0.05.
    fn default() -> Self {
        Self::new([0.25, 0.35, 0.15, 0.20], 0.05)
    }
}

// =============================================================================
// Squad Schema
// =============================================================================

/// Full squad composition schema, validated once before a run and read-only
/// while the run executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadSchema {
    rules: [PositionRule; Position::COUNT],
    squad_size: usize,
    reserve_slots: usize,
    budget_cap: Cash,
    weights: BufferWeights,
}

impl Default for SquadSchema {
    /// Standard Supercoach rules: DEF 6/9, MID 8/11, RUC 2/4, FWD 6/9 with
    /// active quotas equal to the minimums, an 8-player bench, a 30-player
    /// squad, and a $10,000,000 salary cap.
    fn default() -> Self {
        Self {
            rules: [
                PositionRule::new(6, 9, 6),
                PositionRule::new(8, 11, 8),
                PositionRule::new(2, 4, 2),
                PositionRule::new(6, 9, 6),
            ],
            squad_size: 30,
            reserve_slots: 8,
            budget_cap: Cash(10_000_000),
            weights: BufferWeights::default(),
        }
    }
}

impl SquadSchema {
    pub fn new(
        rules: [PositionRule; Position::COUNT],
        squad_size: usize,
        reserve_slots: usize,
        budget_cap: Cash,
        weights: BufferWeights,
    ) -> Self {
        Self {
            rules,
            squad_size,
            reserve_slots,
            budget_cap,
            weights,
        }
    }

    // =========================================================================
    // Builder-style setters
    // =========================================================================

    pub fn with_budget_cap(mut self, cap: Cash) -> Self {
        self.budget_cap = cap;
        self
    }

    pub fn with_rule(mut self, position: Position, rule: PositionRule) -> Self {
        self.rules[position.index()] = rule;
        self
    }

    pub fn with_reserve_slots(mut self, slots: usize) -> Self {
        self.reserve_slots = slots;
        self
    }

    pub fn with_squad_size(mut self, size: usize) -> Self {
        self.squad_size = size;
        self
    }

    pub fn with_weights(mut self, weights: BufferWeights) -> Self {
        self.weights = weights;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn rule(&self, position: Position) -> PositionRule {
        self.rules[position.index()]
    }

    #[inline]
    pub fn squad_size(&self) -> usize {
        self.squad_size
    }

    #[inline]
    pub fn reserve_slots(&self) -> usize {
        self.reserve_slots
    }

    #[inline]
    pub fn budget_cap(&self) -> Cash {
        self.budget_cap
    }

    #[inline]
    pub fn weights(&self) -> &BufferWeights {
        &self.weights
    }

    /// Positions in descending buffer-weight order; better-funded positions
    /// get first pick of the pool. Ties keep enum order.
    pub fn fill_order(&self) -> [Position; Position::COUNT] {
        let mut order = Position::ALL;
        order.sort_by(|a, b| {
            self.weights
                .position(*b)
                .total_cmp(&self.weights.position(*a))
        });
        order
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate structural consistency. Runs once at the top of `allocate`;
    /// an inconsistent schema can never produce a meaningful roster.
    pub fn validate(&self) -> Result<()> {
        if self.squad_size == 0 {
            return Err(AllocationError::InvalidSchema(
                "squad size must be positive".into(),
            ));
        }
        if self.budget_cap.is_negative() {
            return Err(AllocationError::InvalidSchema(format!(
                "budget cap {} is negative",
                self.budget_cap
            )));
        }

        let mut min_sum = 0;
        let mut max_sum = 0;
        let mut active_sum = 0;
        for position in Position::ALL {
            let rule = self.rule(position);
            if rule.min > rule.max {
                return Err(AllocationError::InvalidSchema(format!(
                    "{position}: min {} exceeds max {}",
                    rule.min, rule.max
                )));
            }
            if rule.active > rule.min {
                return Err(AllocationError::InvalidSchema(format!(
                    "{position}: active quota {} exceeds minimum {}",
                    rule.active, rule.min
                )));
            }
            min_sum += rule.min;
            max_sum += rule.max;
            active_sum += rule.active;
        }

        if min_sum > self.squad_size || self.squad_size > max_sum {
            return Err(AllocationError::InvalidSchema(format!(
                "squad size {} outside feasible range [{min_sum}, {max_sum}]",
                self.squad_size
            )));
        }
        if active_sum + self.reserve_slots != self.squad_size {
            return Err(AllocationError::InvalidSchema(format!(
                "active quotas ({active_sum}) plus reserve slots ({}) must equal squad size {}",
                self.reserve_slots, self.squad_size
            )));
        }

        let weight_sum = self.weights.sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(AllocationError::InvalidSchema(format!(
                "buffer weights sum to {weight_sum}, expected 1.0"
            )));
        }
        if self
            .weights
            .positions
            .iter()
            .chain(std::iter::once(&self.weights.reserve))
            .any(|w| *w < 0.0)
        {
            return Err(AllocationError::InvalidSchema(
                "buffer weights must be non-negative".into(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
