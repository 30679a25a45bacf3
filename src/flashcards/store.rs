//! In-memory card store
//!
//! Cards live only for the lifetime of the process. Order is insertion
//! order, duplicates are allowed, and a card has no identity beyond its
//! position.

use super::models::Card;

#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Append a single card
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a whole batch. Callers hand over an already-validated batch,
    /// so the store never holds part of one.
    pub fn extend_batch(&mut self, batch: Vec<Card>) -> usize {
        let added = batch.len();
        self.cards.extend(batch);
        added
    }

    /// Remove the card at `index`, shifting later cards down by one.
    /// Out-of-range indexes leave the store untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            log::warn!(
                "Ignoring removal at index {} (store has {} cards)",
                index,
                self.cards.len()
            );
            return None;
        }
        Some(self.cards.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(pairs: &[(&str, &str)]) -> CardStore {
        let mut store = CardStore::new();
        for (front, back) in pairs {
            store.push(Card::new(*front, *back));
        }
        store
    }

    #[test]
    fn test_push_preserves_order_and_duplicates() {
        let store = store_of(&[("dog", "собака"), ("cat", "кошка"), ("dog", "собака")]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0), store.get(2));
        assert_eq!(store.get(1).unwrap().front, "cat");
    }

    #[test]
    fn test_remove_first_of_three_shifts_remaining() {
        let mut store = store_of(&[("one", "один"), ("two", "два"), ("three", "три")]);

        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.front, "one");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().front, "two");
        assert_eq!(store.get(1).unwrap().front, "three");
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut store = store_of(&[("one", "один")]);

        assert!(store.remove_at(1).is_none());
        assert!(store.remove_at(usize::MAX).is_none());
        assert_eq!(store.len(), 1);

        let mut empty = CardStore::new();
        assert!(empty.remove_at(0).is_none());
    }

    #[test]
    fn test_extend_batch_appends_after_existing() {
        let mut store = store_of(&[("one", "один")]);
        let added = store.extend_batch(vec![Card::new("two", "два"), Card::new("three", "три")]);

        assert_eq!(added, 2);
        let fronts: Vec<&str> = store.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["one", "two", "three"]);
    }
}
