use rand::{rngs::StdRng, SeedableRng};

use crate::engine::{prelude::*, scoring};

const NOT_STARTED: &str = "The game has not started.";
const NOT_IN_PLAY: &str = "The game has not started or is over.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    InPlay,
    Over { won: bool },
}

/// Everything that only exists once the game has been dealt.
#[derive(Clone, Debug)]
struct Table {
    deck: Deck,
    palettes: Vec<Vec<Card>>,
    hand: Vec<Card>,
    canvas: Card,
    max_hand_size: usize,
    can_play_to_canvas: bool,
    status: Status,
}

impl Table {
    fn winning_palette_index(&self) -> usize {
        scoring::winning_index(&self.palettes, self.canvas.color())
    }

    fn check_hand_index(&self, card_idx_in_hand: usize) -> Result<()> {
        if card_idx_in_hand >= self.hand.len() {
            return Err(GameError::invalid_argument("Invalid card index in hand."));
        }
        Ok(())
    }

    /// Ends the game once there is nothing left to play. Runs after every
    /// move that did not already end the game, canvas plays included.
    fn update_game_over_status(&mut self) {
        if self.hand.is_empty() && self.deck.is_empty() {
            self.status = Status::Over {
                won: self.winning_palette_index() == 0,
            };
        }
    }
}

/// The basic rule set: drawing always refills the hand.
///
/// A game is single use. It starts out empty, [`RedGameModel::start_game`]
/// deals it exactly once, and once it is over every move is refused.
#[derive(Clone, Debug)]
pub struct BasicGame {
    rng: StdRng,
    table: Option<Table>,
}

impl BasicGame {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A game whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng, table: None }
    }

    fn table(&self) -> Result<&Table> {
        self.table
            .as_ref()
            .ok_or_else(|| GameError::illegal_state(NOT_STARTED))
    }

    fn table_in_play(&mut self) -> Result<&mut Table> {
        match self.table.as_mut() {
            Some(table) if table.status == Status::InPlay => Ok(table),
            _ => Err(GameError::illegal_state(NOT_IN_PLAY)),
        }
    }

    pub(crate) fn ensure_in_play(&mut self) -> Result<()> {
        self.table_in_play().map(|_| ())
    }

    /// Moves at most `limit` cards from the deck into the hand, stopping
    /// early at a full hand or an empty deck, and re-opens the canvas.
    pub(crate) fn draw_cards(&mut self, limit: usize) -> Result<()> {
        let table = self.table_in_play()?;
        for _ in 0..limit {
            if table.hand.len() >= table.max_hand_size {
                break;
            }
            let Some(card) = table.deck.draw() else {
                break;
            };
            table.hand.push(card);
        }
        table.can_play_to_canvas = true;
        Ok(())
    }
}

impl Default for BasicGame {
    fn default() -> Self {
        Self::new()
    }
}

impl RedGameModel for BasicGame {
    fn start_game(
        &mut self,
        deck: Vec<Card>,
        shuffle: bool,
        num_palettes: usize,
        hand_size: usize,
    ) -> Result<()> {
        if self.table.is_some() {
            return Err(GameError::invalid_argument("The game has already started."));
        }
        if num_palettes < 2 || hand_size == 0 {
            return Err(GameError::invalid_argument(
                "Invalid number of palettes or hand size.",
            ));
        }
        let Some(needed) = num_palettes.checked_add(hand_size) else {
            return Err(GameError::invalid_argument(
                "Invalid number of palettes or hand size.",
            ));
        };
        if deck.len() < needed {
            return Err(GameError::invalid_argument(
                "Not enough cards in the deck to start the game.",
            ));
        }

        let mut deck = Deck::validated(deck)?;
        if shuffle {
            deck.shuffle(&mut self.rng);
        }

        let palettes = (0..num_palettes)
            .map(|_| deck.draw().map(|card| vec![card]))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                GameError::invalid_argument("Not enough cards in the deck to start the game.")
            })?;
        let hand = (0..hand_size).map_while(|_| deck.draw()).collect();

        self.table = Some(Table {
            deck,
            palettes,
            hand,
            canvas: Card::SENTINEL,
            max_hand_size: hand_size,
            can_play_to_canvas: true,
            status: Status::InPlay,
        });
        Ok(())
    }

    fn play_to_palette(&mut self, palette_idx: usize, card_idx_in_hand: usize) -> Result<()> {
        let table = self.table_in_play()?;
        if palette_idx >= table.palettes.len() {
            return Err(GameError::invalid_argument("Invalid palette index."));
        }
        table.check_hand_index(card_idx_in_hand)?;
        if palette_idx == table.winning_palette_index() {
            return Err(GameError::illegal_state("Cannot play to a winning palette."));
        }

        let card = table.hand.remove(card_idx_in_hand);
        table.palettes[palette_idx].push(card);

        if table.winning_palette_index() != palette_idx {
            table.status = Status::Over { won: false };
            return Ok(());
        }

        table.can_play_to_canvas = true;
        table.update_game_over_status();
        Ok(())
    }

    fn play_to_canvas(&mut self, card_idx_in_hand: usize) -> Result<()> {
        let table = self.table_in_play()?;
        table.check_hand_index(card_idx_in_hand)?;
        if !table.can_play_to_canvas {
            return Err(GameError::illegal_state(
                "Cannot play to the canvas at this time.",
            ));
        }
        if table.hand.len() == 1 {
            return Err(GameError::illegal_state(
                "Cannot play to the canvas when only one card remains in hand.",
            ));
        }

        table.canvas = table.hand.remove(card_idx_in_hand);
        table.can_play_to_canvas = false;
        table.update_game_over_status();
        Ok(())
    }

    fn draw_for_hand(&mut self) -> Result<()> {
        let table = self.table_in_play()?;
        let missing = table.max_hand_size.saturating_sub(table.hand.len());
        self.draw_cards(missing)
    }

    fn num_of_cards_in_deck(&self) -> Result<usize> {
        Ok(self.table()?.deck.len())
    }

    fn num_palettes(&self) -> Result<usize> {
        Ok(self.table()?.palettes.len())
    }

    fn winning_palette_index(&self) -> Result<usize> {
        Ok(self.table()?.winning_palette_index())
    }

    fn is_game_over(&self) -> Result<bool> {
        Ok(matches!(self.table()?.status, Status::Over { .. }))
    }

    fn is_game_won(&self) -> Result<bool> {
        match self.table()?.status {
            Status::Over { won } => Ok(won),
            Status::InPlay => Err(GameError::illegal_state("The game is not over yet.")),
        }
    }

    fn hand(&self) -> Result<Vec<Card>> {
        Ok(self.table()?.hand.clone())
    }

    fn palette(&self, palette_idx: usize) -> Result<Vec<Card>> {
        self.table()?
            .palettes
            .get(palette_idx)
            .cloned()
            .ok_or_else(|| GameError::invalid_argument("Invalid palette number."))
    }

    fn canvas(&self) -> Result<Card> {
        Ok(self.table()?.canvas)
    }

    fn can_play_to_canvas(&self) -> Result<bool> {
        Ok(self.table()?.can_play_to_canvas)
    }

    fn max_hand_size(&self) -> Result<usize> {
        Ok(self.table()?.max_hand_size)
    }
}
