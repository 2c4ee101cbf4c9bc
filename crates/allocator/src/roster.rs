//! Allocation output. A roster is immutable once built; all aggregates are
//! derived reads.

use serde::{Deserialize, Serialize};
use types::{Cash, Player, Position};

use crate::report::FeasibilityReport;
use crate::schema::SquadSchema;
use crate::strategy::Strategy;

/// One selected player, tagged with their field/bench assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub player: Player,
    pub active: bool,
}

/// Unfilled headcount per position plus the bench, recorded instead of
/// erroring when the pool or budget runs dry mid-fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FillDeficits {
    pub positions: [usize; Position::COUNT],
    pub reserve: usize,
}

impl FillDeficits {
    pub fn any(&self) -> bool {
        self.reserve > 0 || self.positions.iter().any(|&d| d > 0)
    }
}

/// The result of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    strategy: Strategy,
    slots: Vec<RosterSlot>,
    deficits: FillDeficits,
}

impl Roster {
    pub(crate) fn new(strategy: Strategy, slots: Vec<RosterSlot>, deficits: FillDeficits) -> Self {
        Self {
            strategy,
            slots,
            deficits,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn slots(&self) -> &[RosterSlot] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn deficits(&self) -> &FillDeficits {
        &self.deficits
    }

    pub fn total_spend(&self) -> Cash {
        self.slots
            .iter()
            .map(|s| s.player.price.as_cash())
            .sum()
    }

    pub fn position_count(&self, position: Position) -> usize {
        self.slots
            .iter()
            .filter(|s| s.player.position == position)
            .count()
    }

    pub fn active(&self) -> impl Iterator<Item = &RosterSlot> {
        self.slots.iter().filter(|s| s.active)
    }

    pub fn reserves(&self) -> impl Iterator<Item = &RosterSlot> {
        self.slots.iter().filter(|s| !s.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Sum of predicted scores over the active subset. This is the figure
    /// strategies are compared on.
    pub fn active_predicted_total(&self) -> f64 {
        self.active().map(|s| s.player.predicted_score).sum()
    }

    /// Evaluate this roster against a schema.
    pub fn feasibility(&self, schema: &SquadSchema) -> FeasibilityReport {
        FeasibilityReport::evaluate(self, schema)
    }
}
