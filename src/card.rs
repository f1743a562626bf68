use std::fmt;

/// A playable card. Its cost is also the damage it deals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Card {
    cost: u32,
}

impl Card {
    pub fn new(cost: u32) -> Card {
        Card { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cost)
    }
}

pub fn cards(costs: &[u32]) -> Vec<Card> {
    costs.iter().map(|cost| Card::new(*cost)).collect()
}
