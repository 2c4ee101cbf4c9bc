//! Budget-aware greedy roster allocation.
//!
//! Given a scored candidate pool and a [`SquadSchema`], [`allocate`] builds
//! a fixed-size squad under the salary cap:
//!
//! 1. validate the schema,
//! 2. plan the budget (minimum feasible costs, discretionary buffer,
//!    per-position ceilings) and fail fast if the cap cannot cover the
//!    cheapest legal squad,
//! 3. fill each position to its minimum (ranked pass under the ceiling,
//!    then a price-ascending fallback under the global budget),
//! 4. fill the remaining bench slots the same way,
//! 5. split the selection into active and reserve by predicted score.
//!
//! Greedy, single pass, no backtracking. Shortfalls after the structural
//! checks pass are recorded as deficits on the roster rather than errors;
//! [`Roster::feasibility`] reports them.

mod context;
mod error;
mod filler;
mod partition;
mod planner;
mod report;
mod roster;
mod schema;
mod strategy;

pub use error::{AllocationError, Result};
pub use planner::BudgetPlan;
pub use report::{FeasibilityReport, PositionCheck};
pub use roster::{FillDeficits, Roster, RosterSlot};
pub use schema::{BufferWeights, PositionRule, SquadSchema};
pub use strategy::{ReserveOrder, Strategy};

use context::AllocationContext;
use rayon::prelude::*;

/// Run one allocation over `pool` under `schema` with `strategy`.
///
/// Mutable state is confined to a run-local context; the pool is read-only
/// and the same inputs always produce the same roster.
pub fn allocate(
    pool: &[types::Player],
    schema: &SquadSchema,
    strategy: Strategy,
) -> Result<Roster> {
    schema.validate()?;
    let plan = BudgetPlan::compute(pool, schema)?;

    let mut ctx = AllocationContext::new(pool);
    let mut deficits = FillDeficits::default();

    for position in schema.fill_order() {
        deficits.positions[position.index()] =
            filler::fill_position(&mut ctx, schema, &plan, position, strategy);
    }
    deficits.reserve = filler::fill_reserve(&mut ctx, schema, &plan, strategy);

    let active = partition::split_active(pool, ctx.selected(), schema);
    let slots = ctx
        .selected()
        .iter()
        .zip(active)
        .map(|(&index, active)| RosterSlot {
            player: pool[index].clone(),
            active,
        })
        .collect();

    let roster = Roster::new(strategy, slots, deficits);
    tracing::debug!(
        strategy = %strategy,
        size = roster.len(),
        spend = %roster.total_spend(),
        "allocation finished"
    );
    Ok(roster)
}

/// Run every strategy in `strategies` over independent state and return the
/// roster with the highest active predicted total, together with the
/// strategy that produced it. Ties keep the earlier strategy in the list.
///
/// Runs are independent, so they evaluate in parallel when there is more
/// than one.
pub fn best_allocation(
    pool: &[types::Player],
    schema: &SquadSchema,
    strategies: &[Strategy],
) -> Result<(Strategy, Roster)> {
    let mut rosters: Vec<Roster> = match strategies {
        [] => {
            return Err(AllocationError::InvalidStrategy(
                "no strategies supplied".into(),
            ))
        }
        [only] => vec![allocate(pool, schema, *only)?],
        many => many
            .par_iter()
            .map(|s| allocate(pool, schema, *s))
            .collect::<Result<_>>()?,
    };

    let mut best = 0;
    for (i, roster) in rosters.iter().enumerate().skip(1) {
        if roster.active_predicted_total() > rosters[best].active_predicted_total() {
            best = i;
        }
    }
    Ok((strategies[best], rosters.swap_remove(best)))
}
