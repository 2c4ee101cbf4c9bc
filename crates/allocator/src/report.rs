//! Feasibility reporting. Pure reads over a finished roster; never mutates
//! and never fails.

use serde::Serialize;
use types::{Cash, Position};

use crate::roster::{FillDeficits, Roster};
use crate::schema::SquadSchema;

/// One position's achieved headcount against its schema bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionCheck {
    pub position: Position,
    pub count: usize,
    pub min: usize,
    pub max: usize,
}

impl PositionCheck {
    #[inline]
    pub fn within_bounds(&self) -> bool {
        self.min <= self.count && self.count <= self.max
    }
}

/// Achieved roster shape versus the schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityReport {
    pub size: usize,
    pub target_size: usize,
    pub total_spend: Cash,
    pub budget_cap: Cash,
    pub positions: [PositionCheck; Position::COUNT],
    pub reserve_count: usize,
    pub reserve_slots: usize,
    pub deficits: FillDeficits,
    pub is_feasible: bool,
}

impl FeasibilityReport {
    pub fn evaluate(roster: &Roster, schema: &SquadSchema) -> Self {
        let positions = Position::ALL.map(|position| {
            let rule = schema.rule(position);
            PositionCheck {
                position,
                count: roster.position_count(position),
                min: rule.min,
                max: rule.max,
            }
        });

        let size = roster.len();
        let total_spend = roster.total_spend();
        let is_feasible = size == schema.squad_size()
            && total_spend <= schema.budget_cap()
            && positions.iter().all(PositionCheck::within_bounds);

        Self {
            size,
            target_size: schema.squad_size(),
            total_spend,
            budget_cap: schema.budget_cap(),
            positions,
            reserve_count: size - roster.active_count(),
            reserve_slots: schema.reserve_slots(),
            deficits: *roster.deficits(),
            is_feasible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterSlot;
    use crate::strategy::Strategy;
    use types::{Player, PlayerId, Price};

    fn slot(id: u32, position: Position, price: u64, active: bool) -> RosterSlot {
        RosterSlot {
            player: Player::new(
                PlayerId(id),
                format!("Player {id}"),
                "Fremantle",
                position,
                Price(price),
            ),
            active,
        }
    }

    fn flat_schema() -> SquadSchema {
        use crate::schema::{BufferWeights, PositionRule};
        SquadSchema::new(
            [PositionRule::new(1, 2, 1); Position::COUNT],
            5,
            1,
            Cash(1_000_000),
            BufferWeights::new([0.25, 0.25, 0.25, 0.20], 0.05),
        )
    }

    #[test]
    fn test_feasible_roster() {
        let roster = Roster::new(
            Strategy::Value,
            vec![
                slot(1, Position::Defender, 150_000, true),
                slot(2, Position::Midfielder, 200_000, true),
                slot(3, Position::Ruck, 150_000, true),
                slot(4, Position::Forward, 150_000, true),
                slot(5, Position::Forward, 100_000, false),
            ],
            FillDeficits::default(),
        );
        let report = roster.feasibility(&flat_schema());
        assert!(report.is_feasible);
        assert_eq!(report.size, 5);
        assert_eq!(report.total_spend, Cash(750_000));
        assert_eq!(report.reserve_count, 1);
    }

    #[test]
    fn test_undersized_roster_is_infeasible() {
        let roster = Roster::new(
            Strategy::Value,
            vec![
                slot(1, Position::Defender, 150_000, true),
                slot(2, Position::Midfielder, 200_000, true),
                slot(3, Position::Ruck, 150_000, true),
                slot(4, Position::Forward, 150_000, true),
            ],
            FillDeficits {
                positions: [0; Position::COUNT],
                reserve: 1,
            },
        );
        let report = roster.feasibility(&flat_schema());
        assert!(!report.is_feasible);
        assert_eq!(report.deficits.reserve, 1);
    }

    #[test]
    fn test_position_over_max_is_infeasible() {
        let roster = Roster::new(
            Strategy::Value,
            vec![
                slot(1, Position::Defender, 100_000, true),
                slot(2, Position::Defender, 100_000, false),
                slot(3, Position::Defender, 100_000, false),
                slot(4, Position::Midfielder, 100_000, true),
                slot(5, Position::Ruck, 100_000, true),
            ],
            FillDeficits::default(),
        );
        let report = roster.feasibility(&flat_schema());
        assert!(!report.is_feasible);
        let def = report.positions[Position::Defender.index()];
        assert!(!def.within_bounds());
        assert_eq!(def.count, 3);
    }
}
