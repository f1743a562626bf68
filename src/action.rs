use crate::{card::Card, error::ChoiceError};

/// What the active player wants to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(Card),
    Pass,
}

/// Picks the first card in `hand` costing `cost`, if the player can pay for it.
pub fn select_card(hand: &[Card], mana: u32, cost: u32) -> Result<Card, ChoiceError> {
    let card = hand
        .iter()
        .find(|card| card.cost() == cost)
        .copied()
        .ok_or(ChoiceError::NotInHand(cost))?;

    if card.cost() > mana {
        return Err(ChoiceError::InsufficientMana { cost, mana });
    }
    Ok(card)
}

/// Whether at least one card in `hand` is affordable with `mana`.
pub fn any_playable(hand: &[Card], mana: u32) -> bool {
    hand.iter().any(|card| card.cost() <= mana)
}

#[cfg(test)]
mod tests {
    use crate::{
        action::{any_playable, select_card},
        card::{cards, Card},
        error::ChoiceError,
    };

    #[test]
    fn test_select_card() {
        let hand = cards(&[3, 1, 3]);
        assert_eq!(select_card(&hand, 3, 3), Ok(Card::new(3)));
        assert_eq!(select_card(&hand, 3, 1), Ok(Card::new(1)));
    }

    #[test]
    fn test_select_missing_card() {
        let hand = cards(&[3, 1]);
        assert_eq!(select_card(&hand, 10, 2), Err(ChoiceError::NotInHand(2)));
    }

    #[test]
    fn test_select_expensive_card() {
        let hand = cards(&[7]);
        assert_eq!(
            select_card(&hand, 4, 7),
            Err(ChoiceError::InsufficientMana { cost: 7, mana: 4 })
        );
    }

    #[test]
    fn test_any_playable() {
        assert!(!any_playable(&[], 10));
        assert!(!any_playable(&cards(&[5, 6]), 4));
        assert!(any_playable(&cards(&[5, 0]), 0));
        assert!(any_playable(&cards(&[4]), 4));
    }
}
