//! Greedy fill passes. Each position is filled to its minimum by a ranked
//! pass under the planner's ceiling, then a price-ascending fallback under
//! the global budget alone. The bench works the same way over the whole
//! remainder. No pass ever overrides the global budget check, and no pick
//! is ever undone.

use types::{Cash, Player, Position};

use crate::context::AllocationContext;
use crate::planner::BudgetPlan;
use crate::schema::SquadSchema;
use crate::strategy::{ReserveOrder, Strategy};

/// Rank `indices` by the strategy objective descending; ties broken by
/// price ascending, then id. Deterministic for identical input.
fn rank_by_objective(pool: &[Player], indices: &mut [usize], strategy: Strategy) {
    indices.sort_by(|&a, &b| {
        strategy
            .objective(&pool[b])
            .total_cmp(&strategy.objective(&pool[a]))
            .then(pool[a].price.cmp(&pool[b].price))
            .then(pool[a].id.cmp(&pool[b].id))
    });
}

fn rank_by_price(pool: &[Player], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| pool[a].price.cmp(&pool[b].price).then(pool[a].id.cmp(&pool[b].id)));
}

fn rank_by_adjusted_value(pool: &[Player], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| {
        pool[b]
            .adjusted_value
            .total_cmp(&pool[a].adjusted_value)
            .then(pool[a].price.cmp(&pool[b].price))
            .then(pool[a].id.cmp(&pool[b].id))
    });
}

/// Fill one position to its schema minimum. Returns the headcount deficit
/// (0 when the minimum was reached).
pub fn fill_position(
    ctx: &mut AllocationContext<'_>,
    schema: &SquadSchema,
    plan: &BudgetPlan,
    position: Position,
    strategy: Strategy,
) -> usize {
    let required = schema.rule(position).min;
    let ceiling = plan.position_ceiling(position);
    let cap = schema.budget_cap();

    // Ranked pass: best objective first, capped by the position ceiling.
    let mut candidates = ctx.unselected_in(position);
    rank_by_objective(ctx.pool(), &mut candidates, strategy);

    let mut spent_here = Cash::ZERO;
    for index in candidates {
        if ctx.count(position) >= required {
            break;
        }
        let price = ctx.pool()[index].price.as_cash();
        if spent_here + price <= ceiling && price <= ctx.remaining(cap) {
            spent_here += price;
            ctx.select(index);
        }
    }

    // Fallback pass: cheapest first, global budget only.
    if ctx.count(position) < required {
        tracing::debug!(position = %position, "ceiling left position short, cheap fallback");
        let mut remainder = ctx.unselected_in(position);
        rank_by_price(ctx.pool(), &mut remainder);
        for index in remainder {
            if ctx.count(position) >= required {
                break;
            }
            if ctx.pool()[index].price.as_cash() <= ctx.remaining(cap) {
                ctx.select(index);
            }
        }
    }

    required.saturating_sub(ctx.count(position))
}

/// Fill the remaining squad slots from the unselected remainder. Returns
/// the reserve deficit.
///
/// The target is whatever room is left up to the squad size, so positions
/// selected past their active quota during the minimum fill consume bench
/// room, as they should. Positions already at max are skipped.
pub fn fill_reserve(
    ctx: &mut AllocationContext<'_>,
    schema: &SquadSchema,
    plan: &BudgetPlan,
    strategy: Strategy,
) -> usize {
    let target = schema.squad_size().saturating_sub(ctx.selected_len());
    if target == 0 {
        return 0;
    }
    let cap = schema.budget_cap();
    let ceiling = plan.reserve_ceiling();

    let eligible = |ctx: &AllocationContext<'_>, index: usize| {
        let position = ctx.pool()[index].position;
        ctx.count(position) < schema.rule(position).max
    };

    // Preferred pass under the bench ceiling.
    let mut candidates = ctx.unselected();
    match strategy.reserve_order() {
        ReserveOrder::AdjustedValue => rank_by_adjusted_value(ctx.pool(), &mut candidates),
        ReserveOrder::PriceAscending => rank_by_price(ctx.pool(), &mut candidates),
    }

    let mut filled = 0;
    let mut spent_here = Cash::ZERO;
    for index in candidates {
        if filled >= target {
            break;
        }
        if ctx.is_taken(index) || !eligible(ctx, index) {
            continue;
        }
        let price = ctx.pool()[index].price.as_cash();
        if spent_here + price <= ceiling && price <= ctx.remaining(cap) {
            spent_here += price;
            ctx.select(index);
            filled += 1;
        }
    }

    // Fallback pass: cheapest bodies, global budget only.
    if filled < target {
        tracing::debug!(filled, target, "bench ceiling exhausted, cheap fallback");
        let mut remainder = ctx.unselected();
        rank_by_price(ctx.pool(), &mut remainder);
        for index in remainder {
            if filled >= target {
                break;
            }
            if !eligible(ctx, index) {
                continue;
            }
            if ctx.pool()[index].price.as_cash() <= ctx.remaining(cap) {
                ctx.select(index);
                filled += 1;
            }
        }
    }

    target - filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BufferWeights, PositionRule};
    use types::{PlayerId, Price};

    fn player(id: u32, position: Position, price: u64, predicted: f64) -> Player {
        let mut p = Player::new(
            PlayerId(id),
            format!("Player {id}"),
            "Essendon",
            position,
            Price(price),
        );
        p.predicted_score = predicted;
        p.adjusted_value = predicted / price as f64 * 100_000.0;
        p
    }

    fn one_per_position_schema(cap: i64) -> SquadSchema {
        SquadSchema::new(
            [
                PositionRule::new(2, 3, 2),
                PositionRule::new(1, 2, 1),
                PositionRule::new(1, 2, 1),
                PositionRule::new(1, 2, 1),
            ],
            6,
            1,
            Cash(cap),
            BufferWeights::new([0.40, 0.25, 0.15, 0.15], 0.05),
        )
    }

    #[test]
    fn test_ranked_pass_prefers_objective_under_ceiling() {
        // High-score wants the expensive defender; ceiling allows exactly one
        // expensive pick plus a cheap one.
        let pool = vec![
            player(1, Position::Defender, 500_000, 110.0),
            player(2, Position::Defender, 120_000, 70.0),
            player(3, Position::Defender, 110_000, 60.0),
            player(4, Position::Midfielder, 100_000, 80.0),
            player(5, Position::Ruck, 100_000, 80.0),
            player(6, Position::Forward, 100_000, 80.0),
        ];
        let schema = one_per_position_schema(2_000_000);
        let plan = BudgetPlan::compute(&pool, &schema).unwrap();
        let mut ctx = AllocationContext::new(&pool);

        let deficit = fill_position(&mut ctx, &schema, &plan, Position::Defender, Strategy::HighScore);
        assert_eq!(deficit, 0);
        assert_eq!(ctx.count(Position::Defender), 2);
        assert!(ctx.is_taken(0), "top predicted defender should be picked");
    }

    #[test]
    fn test_fallback_recovers_from_stranded_ranked_pass() {
        // Zero buffer, so the defender ceiling equals the two-cheapest sum
        // (250k). The ranked pass grabs the 200k star and can then afford
        // nobody else under the ceiling; the fallback buys the 100k body.
        let pool = vec![
            player(1, Position::Defender, 200_000, 100.0),
            player(2, Position::Defender, 150_000, 90.0),
            player(3, Position::Defender, 100_000, 50.0),
            player(4, Position::Midfielder, 100_000, 80.0),
            player(5, Position::Ruck, 100_000, 80.0),
            player(6, Position::Forward, 100_000, 80.0),
        ];
        let schema = one_per_position_schema(650_000);
        let plan = BudgetPlan::compute(&pool, &schema).unwrap();
        assert_eq!(plan.buffer(), Cash::ZERO);
        let mut ctx = AllocationContext::new(&pool);

        let deficit = fill_position(&mut ctx, &schema, &plan, Position::Defender, Strategy::HighScore);
        assert_eq!(deficit, 0);
        assert!(ctx.is_taken(0));
        assert!(ctx.is_taken(2));
        assert!(!ctx.is_taken(1));
    }

    #[test]
    fn test_short_position_records_deficit() {
        let pool = vec![
            player(1, Position::Defender, 100_000, 60.0),
            player(2, Position::Midfielder, 100_000, 80.0),
            player(3, Position::Ruck, 100_000, 80.0),
            player(4, Position::Forward, 100_000, 80.0),
        ];
        let schema = one_per_position_schema(2_000_000);
        // Plan computed against a pool that does satisfy the minimums.
        let planning_pool = {
            let mut p = pool.clone();
            p.push(player(5, Position::Defender, 100_000, 60.0));
            p
        };
        let plan = BudgetPlan::compute(&planning_pool, &schema).unwrap();
        let mut ctx = AllocationContext::new(&pool);

        let deficit = fill_position(&mut ctx, &schema, &plan, Position::Defender, Strategy::Value);
        assert_eq!(deficit, 1);
        assert_eq!(ctx.count(Position::Defender), 1);
    }

    #[test]
    fn test_reserve_skips_positions_at_max() {
        let pool = vec![
            player(1, Position::Defender, 100_000, 60.0),
            player(2, Position::Defender, 110_000, 61.0),
            player(3, Position::Defender, 120_000, 62.0),
            player(4, Position::Defender, 90_000, 59.0),
            player(5, Position::Midfielder, 100_000, 80.0),
            player(6, Position::Ruck, 100_000, 80.0),
            player(7, Position::Forward, 100_000, 80.0),
            player(8, Position::Forward, 95_000, 70.0),
        ];
        let schema = one_per_position_schema(2_000_000);
        let plan = BudgetPlan::compute(&pool, &schema).unwrap();
        let mut ctx = AllocationContext::new(&pool);
        // Defenders already at max 3.
        ctx.select(0);
        ctx.select(1);
        ctx.select(2);
        ctx.select(4);
        ctx.select(5);

        let deficit = fill_reserve(&mut ctx, &schema, &plan, Strategy::HighScore);
        assert_eq!(deficit, 0);
        // The cheap fourth defender is ineligible; the bench slot goes to a
        // forward instead.
        assert!(!ctx.is_taken(3));
        assert!(ctx.is_taken(6) || ctx.is_taken(7));
        assert_eq!(ctx.selected_len(), 6);
    }

    #[test]
    fn test_reserve_deficit_when_budget_gone() {
        let pool = vec![
            player(1, Position::Defender, 100_000, 60.0),
            player(2, Position::Defender, 110_000, 61.0),
            player(3, Position::Midfielder, 100_000, 80.0),
            player(4, Position::Ruck, 100_000, 80.0),
            player(5, Position::Forward, 100_000, 80.0),
            player(6, Position::Forward, 600_000, 100.0),
        ];
        // Cap equals the minimum feasible total; after the five minimum picks
        // only 100k remains and the sole bench candidate costs 600k.
        let schema = one_per_position_schema(610_000);
        let plan = BudgetPlan::compute(&pool, &schema).unwrap();
        let mut ctx = AllocationContext::new(&pool);
        for i in 0..5 {
            ctx.select(i);
        }

        let deficit = fill_reserve(&mut ctx, &schema, &plan, Strategy::Value);
        assert_eq!(deficit, 1);
        assert_eq!(ctx.selected_len(), 5);
    }
}
