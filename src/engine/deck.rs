use std::collections::{HashSet, VecDeque};

use rand::{seq::SliceRandom, Rng};

use crate::engine::prelude::*;

/// An ordered pile of cards. Cards are drawn from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// The canonical 35 card deck, unshuffled.
    #[cfg(test)]
    pub fn standard() -> Self {
        Card::all().into()
    }

    /// Builds a deck, refusing any card that appears twice.
    pub fn validated(cards: Vec<Card>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cards.len());
        if !cards.iter().all(|card| seen.insert(*card)) {
            return Err(GameError::invalid_argument("Deck contains duplicate cards."));
        }
        Ok(cards.into())
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self {
            cards: value.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
