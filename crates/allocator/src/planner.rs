//! Budget planning. Before any selection happens the planner proves the
//! schema minimums are affordable at all, then carves the leftover budget
//! into per-position spending ceilings.

use types::{Cash, Player, Position, Price};

use crate::error::{AllocationError, Result};
use crate::schema::SquadSchema;

/// Pre-computed budget envelope for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetPlan {
    min_costs: [Cash; Position::COUNT],
    reserve_min_cost: Cash,
    buffer: Cash,
    ceilings: [Cash; Position::COUNT],
    reserve_ceiling: Cash,
}

impl BudgetPlan {
    /// Compute the plan for `pool` under `schema`.
    ///
    /// Fails with `InsufficientCandidates` when a position cannot meet its
    /// minimum headcount, and with `BudgetInfeasible` when even the cheapest
    /// legal squad busts the cap.
    pub fn compute(pool: &[Player], schema: &SquadSchema) -> Result<Self> {
        let mut min_costs = [Cash::ZERO; Position::COUNT];

        for position in Position::ALL {
            let mut prices: Vec<Price> = pool
                .iter()
                .filter(|p| p.position == position)
                .map(|p| p.price)
                .collect();
            let required = schema.rule(position).min;
            if prices.len() < required {
                return Err(AllocationError::InsufficientCandidates {
                    position,
                    required,
                    available: prices.len(),
                });
            }
            prices.sort_unstable();
            min_costs[position.index()] =
                prices[..required].iter().copied().sum::<Price>().as_cash();
        }

        // Bench floor: the R cheapest players of the whole pool. Overlaps
        // the position minimums, so it is an optimistic floor; it only
        // shapes ceilings and the eager infeasibility check.
        let mut all_prices: Vec<Price> = pool.iter().map(|p| p.price).collect();
        all_prices.sort_unstable();
        let bench_take = schema.reserve_slots().min(all_prices.len());
        let reserve_min_cost = all_prices[..bench_take]
            .iter()
            .copied()
            .sum::<Price>()
            .as_cash();

        let minimum_total =
            min_costs.iter().copied().sum::<Cash>() + reserve_min_cost;
        let buffer = schema.budget_cap() - minimum_total;
        if buffer.is_negative() {
            return Err(AllocationError::BudgetInfeasible {
                required: minimum_total,
                cap: schema.budget_cap(),
            });
        }

        let mut ceilings = [Cash::ZERO; Position::COUNT];
        for position in Position::ALL {
            ceilings[position.index()] = min_costs[position.index()]
                + buffer.share(schema.weights().position(position));
            tracing::debug!(
                position = %position,
                min_cost = %min_costs[position.index()],
                ceiling = %ceilings[position.index()],
                "position budget envelope"
            );
        }
        let reserve_ceiling = reserve_min_cost + buffer.share(schema.weights().reserve());
        tracing::debug!(%buffer, %reserve_ceiling, "budget plan ready");

        Ok(Self {
            min_costs,
            reserve_min_cost,
            buffer,
            ceilings,
            reserve_ceiling,
        })
    }

    /// Spending ceiling for the ranked pass of one position.
    #[inline]
    pub fn position_ceiling(&self, position: Position) -> Cash {
        self.ceilings[position.index()]
    }

    /// Spending ceiling for the preferred bench pass.
    #[inline]
    pub fn reserve_ceiling(&self) -> Cash {
        self.reserve_ceiling
    }

    /// Cheapest-possible cost of a legal squad.
    pub fn minimum_total(&self) -> Cash {
        self.min_costs.iter().copied().sum::<Cash>() + self.reserve_min_cost
    }

    /// Discretionary budget above the minimum feasible squad.
    #[inline]
    pub fn buffer(&self) -> Cash {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BufferWeights, PositionRule};
    use types::PlayerId;

    fn player(id: u32, position: Position, price: u64) -> Player {
        Player::new(
            PlayerId(id),
            format!("Player {id}"),
            "Geelong",
            position,
            Price(price),
        )
    }

    fn tiny_schema(cap: i64) -> SquadSchema {
        SquadSchema::new(
            [
                PositionRule::new(1, 2, 1),
                PositionRule::new(1, 2, 1),
                PositionRule::new(1, 2, 1),
                PositionRule::new(1, 2, 1),
            ],
            5,
            1,
            Cash(cap),
            BufferWeights::new([0.25, 0.35, 0.15, 0.20], 0.05),
        )
    }

    fn tiny_pool() -> Vec<Player> {
        vec![
            player(1, Position::Defender, 100_000),
            player(2, Position::Defender, 300_000),
            player(3, Position::Midfielder, 150_000),
            player(4, Position::Midfielder, 400_000),
            player(5, Position::Ruck, 200_000),
            player(6, Position::Forward, 120_000),
            player(7, Position::Forward, 250_000),
        ]
    }

    #[test]
    fn test_minimum_costs_and_buffer() {
        let plan = BudgetPlan::compute(&tiny_pool(), &tiny_schema(1_000_000)).unwrap();
        // mins 100k + 150k + 200k + 120k, bench floor = cheapest overall 100k
        assert_eq!(plan.minimum_total(), Cash(670_000));
        assert_eq!(plan.buffer(), Cash(330_000));
        assert_eq!(
            plan.position_ceiling(Position::Midfielder),
            Cash(150_000 + 115_500)
        );
        assert_eq!(plan.reserve_ceiling(), Cash(100_000 + 16_500));
    }

    #[test]
    fn test_budget_infeasible_is_eager() {
        let err = BudgetPlan::compute(&tiny_pool(), &tiny_schema(500_000)).unwrap_err();
        assert_eq!(
            err,
            AllocationError::BudgetInfeasible {
                required: Cash(670_000),
                cap: Cash(500_000),
            }
        );
    }

    #[test]
    fn test_insufficient_candidates() {
        let pool: Vec<Player> = tiny_pool()
            .into_iter()
            .filter(|p| p.position != Position::Ruck)
            .collect();
        let err = BudgetPlan::compute(&pool, &tiny_schema(1_000_000)).unwrap_err();
        assert_eq!(
            err,
            AllocationError::InsufficientCandidates {
                position: Position::Ruck,
                required: 1,
                available: 0,
            }
        );
    }
}
