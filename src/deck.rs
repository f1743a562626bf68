use rand::Rng;

use crate::card::Card;

/// Costs of the 20 cards every player starts with.
pub const DEFAULT_DECK_COSTS: [u32; 20] = [
    0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 8,
];

/// A player's draw pile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    pub fn standard() -> Deck {
        Deck::from_costs(&DEFAULT_DECK_COSTS)
    }

    pub fn from_costs(costs: &[u32]) -> Deck {
        Deck::new(costs.iter().map(|cost| Card::new(*cost)).collect())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card picked uniformly over the whole pile.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.cards.len());
        Some(self.cards.remove(index))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Deck {
        Deck::new(cards)
    }
}
