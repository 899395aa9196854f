//! Palette scoring. The canvas color picks the rule; every rule yields a
//! [`Score`] so palettes can be compared no matter which rule is active.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::engine::prelude::*;

/// A palette's standing under one rule. Compared on `primary` first, then
/// on the tie-break card by strict card order. A missing tie-break card
/// loses to any present one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub primary: u32,
    pub tie_break: Option<Card>,
}

impl Score {
    fn new(primary: u32, tie_break: Option<Card>) -> Self {
        Self { primary, tie_break }
    }
}

pub fn score(palette: &[Card], canvas: Color) -> Score {
    match canvas {
        Color::Red => red(palette),
        Color::Orange => orange(palette),
        Color::Blue => blue(palette),
        Color::Indigo => indigo(palette),
        Color::Violet => violet(palette),
    }
}

/// Index of the best palette under `canvas`. Exact ties go to the lower index.
pub fn winning_index<P: AsRef<[Card]>>(palettes: &[P], canvas: Color) -> usize {
    let mut best: Option<(usize, Score)> = None;
    for (idx, palette) in palettes.iter().enumerate() {
        let current = score(palette.as_ref(), canvas);
        match best {
            Some((_, top)) if current <= top => {}
            _ => best = Some((idx, current)),
        }
    }
    best.map_or(0, |(idx, _)| idx)
}

fn highest(cards: &[Card]) -> Option<Card> {
    cards.iter().max().copied()
}

/// Highest card wins.
fn red(palette: &[Card]) -> Score {
    let top = highest(palette);
    let primary = top.map_or(0, |card| card.number() as u32 * 100 + card.color().rank());
    Score::new(primary, top)
}

/// Most cards of a single number wins. Count ties favour the larger number.
fn orange(palette: &[Card]) -> Score {
    let mut counts: BTreeMap<u8, u32> = BTreeMap::new();
    for card in palette {
        *counts.entry(card.number()).or_default() += 1;
    }
    // Keys ascend, so `max_by_key` keeps the larger number on equal counts.
    let Some((&number, &count)) = counts.iter().max_by_key(|&(_, &count)| count) else {
        return Score::new(0, None);
    };
    let tie_break = palette
        .iter()
        .filter(|card| card.number() == number)
        .max()
        .copied();
    Score::new(count * 100 + number as u32, tie_break)
}

/// Most distinct colors wins.
fn blue(palette: &[Card]) -> Score {
    let colors: HashSet<Color> = palette.iter().map(Card::color).collect();
    Score::new(colors.len() as u32 * 100, highest(palette))
}

/// Longest run of consecutive numbers wins. Repeated numbers count once.
fn indigo(palette: &[Card]) -> Score {
    let numbers: BTreeSet<u8> = palette.iter().map(Card::number).collect();
    let mut longest: u32 = 0;
    let mut run: u32 = 0;
    let mut previous: Option<u8> = None;
    for number in numbers {
        run = match previous {
            Some(p) if p + 1 == number => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(number);
    }
    Score::new(longest * 100, highest(palette))
}

/// Most cards below 4 wins.
fn violet(palette: &[Card]) -> Score {
    let low: Vec<Card> = palette.iter().copied().filter(|card| card.number() < 4).collect();
    Score::new(low.len() as u32 * 100, highest(&low))
}
