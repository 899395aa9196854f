use dyn_clone::DynClone;

use crate::engine::prelude::*;

/// The operations every Solo Red rule set supports. Palette and hand indices
/// are 0-based. Palette 0 belongs to the player.
///
/// Accessors hand back owned copies, so nothing a caller does to them can
/// reach the game. Everything except [`RedGameModel::all_cards`] fails with
/// an illegal-state error until [`RedGameModel::start_game`] has succeeded.
pub trait RedGameModel: DynClone {
    /// Deals `num_palettes` single-card palettes, then up to `hand_size`
    /// cards into the hand. A game can only be started once.
    fn start_game(
        &mut self,
        deck: Vec<Card>,
        shuffle: bool,
        num_palettes: usize,
        hand_size: usize,
    ) -> Result<()>;

    /// Moves a hand card onto a palette that is not currently winning.
    /// If that palette still isn't winning afterwards, the game is lost.
    fn play_to_palette(&mut self, palette_idx: usize, card_idx_in_hand: usize) -> Result<()>;

    /// Replaces the canvas with a hand card, changing the scoring rule.
    fn play_to_canvas(&mut self, card_idx_in_hand: usize) -> Result<()>;

    fn draw_for_hand(&mut self) -> Result<()>;

    fn num_of_cards_in_deck(&self) -> Result<usize>;

    fn num_palettes(&self) -> Result<usize>;

    fn winning_palette_index(&self) -> Result<usize>;

    fn is_game_over(&self) -> Result<bool>;

    /// Only meaningful once the game is over.
    fn is_game_won(&self) -> Result<bool>;

    fn hand(&self) -> Result<Vec<Card>>;

    fn palette(&self, palette_idx: usize) -> Result<Vec<Card>>;

    fn canvas(&self) -> Result<Card>;

    fn can_play_to_canvas(&self) -> Result<bool>;

    fn max_hand_size(&self) -> Result<usize>;

    /// The canonical 35-card set. Usable before the game starts.
    fn all_cards(&self) -> Vec<Card> {
        Card::all()
    }
}

dyn_clone::clone_trait_object!(RedGameModel);
