//! Run-local mutable state. All selection goes through the context, so the
//! selected/unselected partition stays consistent and duplicates are
//! impossible by construction.

use types::{Cash, Player, Position};

/// Mutable state for one allocation run.
pub struct AllocationContext<'a> {
    pool: &'a [Player],
    taken: Vec<bool>,
    selected: Vec<usize>,
    spent: Cash,
    counts: [usize; Position::COUNT],
}

impl<'a> AllocationContext<'a> {
    pub fn new(pool: &'a [Player]) -> Self {
        Self {
            pool,
            taken: vec![false; pool.len()],
            selected: Vec::new(),
            spent: Cash::ZERO,
            counts: [0; Position::COUNT],
        }
    }

    #[inline]
    pub fn pool(&self) -> &'a [Player] {
        self.pool
    }

    /// Pool indices selected so far, in selection order.
    #[inline]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    #[inline]
    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    #[inline]
    pub fn spent(&self) -> Cash {
        self.spent
    }

    /// Budget left under `cap`.
    #[inline]
    pub fn remaining(&self, cap: Cash) -> Cash {
        cap - self.spent
    }

    /// Selected headcount for a position, active and reserve combined.
    #[inline]
    pub fn count(&self, position: Position) -> usize {
        self.counts[position.index()]
    }

    #[inline]
    pub fn is_taken(&self, index: usize) -> bool {
        self.taken[index]
    }

    /// Move one pool entry from unselected to selected.
    pub fn select(&mut self, index: usize) {
        debug_assert!(!self.taken[index], "pool entry selected twice");
        self.taken[index] = true;
        self.selected.push(index);
        self.spent += self.pool[index].price.as_cash();
        self.counts[self.pool[index].position.index()] += 1;
    }

    /// Unselected pool indices, in pool order.
    pub fn unselected(&self) -> Vec<usize> {
        (0..self.pool.len()).filter(|i| !self.taken[*i]).collect()
    }

    /// Unselected pool indices registered in `position`, in pool order.
    pub fn unselected_in(&self, position: Position) -> Vec<usize> {
        (0..self.pool.len())
            .filter(|i| !self.taken[*i] && self.pool[*i].position == position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{PlayerId, Price};

    fn pool() -> Vec<Player> {
        vec![
            Player::new(PlayerId(1), "A", "Carlton", Position::Defender, Price(100_000)),
            Player::new(PlayerId(2), "B", "Carlton", Position::Midfielder, Price(200_000)),
            Player::new(PlayerId(3), "C", "Carlton", Position::Defender, Price(150_000)),
        ]
    }

    #[test]
    fn test_select_updates_partition_and_totals() {
        let pool = pool();
        let mut ctx = AllocationContext::new(&pool);

        ctx.select(1);
        ctx.select(0);

        assert_eq!(ctx.selected(), &[1, 0]);
        assert_eq!(ctx.spent(), Cash(300_000));
        assert_eq!(ctx.count(Position::Defender), 1);
        assert_eq!(ctx.count(Position::Midfielder), 1);
        assert_eq!(ctx.unselected(), vec![2]);
        assert_eq!(ctx.unselected_in(Position::Defender), vec![2]);
        assert!(ctx.unselected_in(Position::Midfielder).is_empty());
        assert_eq!(ctx.remaining(Cash(1_000_000)), Cash(700_000));
    }
}
