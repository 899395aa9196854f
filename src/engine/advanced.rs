use rand::rngs::StdRng;

use crate::engine::prelude::*;

/// The advanced rule set. Plays exactly like [`BasicGame`] except for drawing:
/// each draw adds one card, or two when the canvas was just played with a
/// number larger than the winning palette's size. It never refills.
#[derive(Clone, Debug, Default)]
pub struct AdvancedGame {
    base: BasicGame,
    /// Number on the canvas card played since the last draw, if any.
    canvas_since_draw: Option<u8>,
}

impl AdvancedGame {
    pub fn new() -> Self {
        Self::from_base(BasicGame::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_base(BasicGame::with_seed(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self::from_base(BasicGame::with_rng(rng))
    }

    fn from_base(base: BasicGame) -> Self {
        Self {
            base,
            canvas_since_draw: None,
        }
    }

    fn cards_to_draw(&self) -> Result<usize> {
        let winning = self.base.winning_palette_index()?;
        let winning_size = self.base.palette(winning)?.len();
        Ok(match self.canvas_since_draw {
            Some(number) if number as usize > winning_size => 2,
            _ => 1,
        })
    }
}

impl RedGameModel for AdvancedGame {
    fn start_game(
        &mut self,
        deck: Vec<Card>,
        shuffle: bool,
        num_palettes: usize,
        hand_size: usize,
    ) -> Result<()> {
        self.base.start_game(deck, shuffle, num_palettes, hand_size)
    }

    fn play_to_palette(&mut self, palette_idx: usize, card_idx_in_hand: usize) -> Result<()> {
        self.base.play_to_palette(palette_idx, card_idx_in_hand)
    }

    fn play_to_canvas(&mut self, card_idx_in_hand: usize) -> Result<()> {
        self.base.play_to_canvas(card_idx_in_hand)?;
        self.canvas_since_draw = Some(self.base.canvas()?.number());
        Ok(())
    }

    fn draw_for_hand(&mut self) -> Result<()> {
        self.base.ensure_in_play()?;
        let count = self.cards_to_draw()?;
        self.base.draw_cards(count)?;
        self.canvas_since_draw = None;
        Ok(())
    }

    fn num_of_cards_in_deck(&self) -> Result<usize> {
        self.base.num_of_cards_in_deck()
    }

    fn num_palettes(&self) -> Result<usize> {
        self.base.num_palettes()
    }

    fn winning_palette_index(&self) -> Result<usize> {
        self.base.winning_palette_index()
    }

    fn is_game_over(&self) -> Result<bool> {
        self.base.is_game_over()
    }

    fn is_game_won(&self) -> Result<bool> {
        self.base.is_game_won()
    }

    fn hand(&self) -> Result<Vec<Card>> {
        self.base.hand()
    }

    fn palette(&self, palette_idx: usize) -> Result<Vec<Card>> {
        self.base.palette(palette_idx)
    }

    fn canvas(&self) -> Result<Card> {
        self.base.canvas()
    }

    fn can_play_to_canvas(&self) -> Result<bool> {
        self.base.can_play_to_canvas()
    }

    fn max_hand_size(&self) -> Result<usize> {
        self.base.max_hand_size()
    }
}
