//! Active/reserve split. Runs after all fill phases so a player selected
//! only to satisfy a category minimum can still end up on the bench.

use types::Player;

use crate::schema::SquadSchema;

/// For each entry of `selected` (pool indices), decide whether that player
/// is active. Per position the top `active`-quota players by predicted
/// score take the field; ties go to the cheaper player, then the lower id.
pub fn split_active(pool: &[Player], selected: &[usize], schema: &SquadSchema) -> Vec<bool> {
    let mut active = vec![false; selected.len()];

    for position in types::Position::ALL {
        let mut slots: Vec<usize> = (0..selected.len())
            .filter(|&slot| pool[selected[slot]].position == position)
            .collect();
        slots.sort_by(|&a, &b| {
            let pa = &pool[selected[a]];
            let pb = &pool[selected[b]];
            pb.predicted_score
                .total_cmp(&pa.predicted_score)
                .then(pa.price.cmp(&pb.price))
                .then(pa.id.cmp(&pb.id))
        });
        for &slot in slots.iter().take(schema.rule(position).active) {
            active[slot] = true;
        }
    }

    active
}
