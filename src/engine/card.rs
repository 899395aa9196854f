use std::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

use crate::engine::prelude::*;

/// The five card colors, in the order cards are laid out in a fresh deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Blue,
    Indigo,
    Violet,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Indigo,
        Color::Violet,
    ];

    /// Rainbow rank, used to break ties between cards of equal number.
    /// Violet is lowest, Red is highest.
    pub fn rank(self) -> u32 {
        match self {
            Color::Violet => 1,
            Color::Indigo => 2,
            Color::Blue => 3,
            Color::Orange => 4,
            Color::Red => 5,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Indigo => 'I',
            Color::Violet => 'V',
        }
    }
}

impl TryFrom<char> for Color {
    type Error = GameError;

    fn try_from(letter: char) -> Result<Self> {
        match letter {
            'R' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            'B' => Ok(Color::Blue),
            'I' => Ok(Color::Indigo),
            'V' => Ok(Color::Violet),
            other => Err(GameError::invalid_argument(format!(
                "Invalid card color: {other}"
            ))),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An immutable card. Numbers 1 through 7 are playable, 0 only ever
/// appears on the starting canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: Color,
    number: u8,
}

impl Card {
    pub const MAX_NUMBER: u8 = 7;

    /// The canvas every game starts with.
    pub const SENTINEL: Card = Card {
        color: Color::Red,
        number: 0,
    };

    pub fn new(color: Color, number: u8) -> Result<Self> {
        if number > Self::MAX_NUMBER {
            return Err(GameError::invalid_argument("Invalid card color or number."));
        }
        Ok(Self { color, number })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Every playable card, color-major then number ascending.
    pub fn all() -> Vec<Card> {
        Color::ALL
            .iter()
            .flat_map(|&color| (1..=Self::MAX_NUMBER).map(move |number| Card { color, number }))
            .collect()
    }
}

/// The strict card order: higher number wins, equal numbers fall back to
/// rainbow rank. Total on distinct cards.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.color.rank().cmp(&other.color.rank()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.number == 0 {
            write!(f, "{}", self.color)
        } else {
            write!(f, "{}{}", self.color, self.number)
        }
    }
}

/// Parses the same text `Display` produces: `"R5"`, or a bare letter for a 0 card.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || GameError::invalid_argument(format!("Invalid card: {s}"));
        let mut chars = s.chars();
        let color = Color::try_from(chars.next().ok_or_else(bad)?)?;
        let number = match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some(digit), None) => digit.to_digit(10).ok_or_else(bad)? as u8,
            _ => return Err(bad()),
        };
        Card::new(color, number)
    }
}
