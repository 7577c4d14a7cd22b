//! Practice mode puzzle cycling
//!
//! Deals capitals from a shuffled copy of the candidate list so nothing
//! repeats until the whole list has been played, then reshuffles.

use crate::core::Capital;
use rand::seq::SliceRandom;

/// Return a shuffled copy of a slice without touching the original
#[must_use]
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(&mut rand::rng());
    copy
}

/// A deck of capitals dealt in shuffled order with repeat avoidance
#[derive(Debug, Clone)]
pub struct PracticeDeck {
    pool: Vec<Capital>,
    order: Vec<Capital>,
    index: usize,
}

impl PracticeDeck {
    #[must_use]
    pub fn new(pool: Vec<Capital>) -> Self {
        let order = shuffled(&pool);
        Self {
            pool,
            order,
            index: 0,
        }
    }

    /// Deal the next capital, reshuffling once the deck is exhausted.
    ///
    /// Returns `None` only for an empty pool.
    pub fn next(&mut self) -> Option<Capital> {
        if self.pool.is_empty() {
            return None;
        }
        if self.index >= self.order.len() {
            self.order = shuffled(&self.pool);
            self.index = 0;
        }
        let capital = self.order[self.index].clone();
        self.index += 1;
        Some(capital)
    }

    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Region;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<Capital> {
        (0..n)
            .map(|i| {
                Capital::new(
                    format!("City {i}"),
                    format!("Country {i}"),
                    0.0,
                    0.0,
                    Region::Europe,
                )
            })
            .collect()
    }

    #[test]
    fn shuffled_keeps_length_and_elements() {
        let input = vec![1, 2, 3, 4, 5];
        let mut result = shuffled(&input);
        assert_eq!(result.len(), input.len());
        result.sort_unstable();
        assert_eq!(result, input);
    }

    #[test]
    fn shuffled_does_not_mutate_input() {
        let input = vec![1, 2, 3, 4, 5];
        let copy = input.clone();
        let _ = shuffled(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn shuffled_handles_empty_and_single() {
        assert_eq!(shuffled(&Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(shuffled(&[42]), vec![42]);
    }

    #[test]
    fn shuffled_produces_varied_orderings() {
        let input: Vec<i32> = (0..10).collect();
        let orderings: HashSet<Vec<i32>> = (0..100).map(|_| shuffled(&input)).collect();
        // 100 shuffles of 10 items landing on one ordering is implausible
        assert!(orderings.len() > 1);
    }

    #[test]
    fn deck_deals_everything_before_repeating() {
        let mut deck = PracticeDeck::new(pool(8));

        let first_pass: HashSet<String> = (0..8)
            .map(|_| deck.next().unwrap().city().to_string())
            .collect();
        assert_eq!(first_pass.len(), 8);
    }

    #[test]
    fn deck_reshuffles_after_exhaustion() {
        let mut deck = PracticeDeck::new(pool(3));
        for _ in 0..3 {
            deck.next().unwrap();
        }
        // Keeps dealing from a fresh shuffle
        for _ in 0..3 {
            assert!(deck.next().is_some());
        }
    }

    #[test]
    fn empty_deck_deals_nothing() {
        let mut deck = PracticeDeck::new(Vec::new());
        assert!(deck.next().is_none());
        assert_eq!(deck.pool_size(), 0);
    }
}
