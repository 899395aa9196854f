use std::collections::VecDeque;
use std::io::{BufRead, Write};

use color_eyre::{eyre::bail, Result};
use log::{debug, info};

use crate::engine::prelude::*;

use super::view::TextView;

/// Whitespace separated tokens, read a line at a time as they are needed.
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("No more input available.");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// What a numeric slot in a command turned out to hold.
enum Arg {
    /// A 1-based position, already shifted to 0-based.
    Index(usize),
    NotPositive,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives a game from text commands, writing every state it passes through.
pub struct TextController<R, W> {
    tokens: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> TextController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            tokens: Tokens::new(input),
            output,
        }
    }

    /// Starts `model` with the given setup and plays it until the game ends,
    /// the player quits, or input runs out. Start failures are returned
    /// unchanged, so callers can downcast them to [`GameError`].
    pub fn play_game(
        &mut self,
        model: &mut dyn RedGameModel,
        deck: Vec<Card>,
        shuffle: bool,
        num_palettes: usize,
        hand_size: usize,
    ) -> Result<()> {
        model.start_game(deck, shuffle, num_palettes, hand_size)?;
        info!("Game started with {num_palettes} palettes and a hand of {hand_size}");

        while !model.is_game_over()? {
            self.transmit_state(model)?;

            let command = self.tokens.next_token()?;
            debug!("Read command {command:?}");
            let flow = match command.to_ascii_lowercase().as_str() {
                "q" => Flow::Quit,
                "palette" => self.palette_command(model)?,
                "canvas" => self.canvas_command(model)?,
                _ => {
                    self.transmit("Invalid command. Try again.\n")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                info!("Player quit");
                self.transmit("Game quit!\n")?;
                self.transmit("State of game when quit:\n")?;
                return self.transmit_state(model);
            }
        }

        let won = model.is_game_won()?;
        info!("Game over, won: {won}");
        self.transmit(if won { "Game won.\n" } else { "Game lost.\n" })?;
        self.transmit_state(model)
    }

    fn palette_command(&mut self, model: &mut dyn RedGameModel) -> Result<Flow> {
        let palette_idx = match self.read_arg()? {
            Arg::Index(idx) => idx,
            Arg::NotPositive => return self.invalid_move(),
            Arg::Quit => return Ok(Flow::Quit),
        };
        let card_idx = match self.read_arg()? {
            Arg::Index(idx) => idx,
            Arg::NotPositive => return self.invalid_move(),
            Arg::Quit => return Ok(Flow::Quit),
        };

        if let Err(err) = model.play_to_palette(palette_idx, card_idx) {
            return self.rejected(err);
        }
        debug!("Played hand card {card_idx} to palette {palette_idx}");

        if !model.is_game_over()? {
            if let Err(err) = model.draw_for_hand() {
                debug!("Draw failed: {err}");
                self.transmit("Error during draw. Continuing the game.\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn canvas_command(&mut self, model: &mut dyn RedGameModel) -> Result<Flow> {
        let card_idx = match self.read_arg()? {
            Arg::Index(idx) => idx,
            Arg::NotPositive => return self.invalid_move(),
            Arg::Quit => return Ok(Flow::Quit),
        };

        if let Err(err) = model.play_to_canvas(card_idx) {
            return self.rejected(err);
        }
        debug!("Played hand card {card_idx} to the canvas");
        Ok(Flow::Continue)
    }

    /// Skips tokens until one is an integer or a quit.
    fn read_arg(&mut self) -> Result<Arg> {
        loop {
            let token = self.tokens.next_token()?;
            if token.eq_ignore_ascii_case("q") {
                return Ok(Arg::Quit);
            }
            let Ok(value) = token.parse::<i64>() else {
                debug!("Skipping non-numeric token {token:?}");
                continue;
            };
            return Ok(match usize::try_from(value) {
                Ok(n) if n > 0 => Arg::Index(n - 1),
                _ => Arg::NotPositive,
            });
        }
    }

    fn invalid_move(&mut self) -> Result<Flow> {
        self.transmit("Invalid move. Try again.\n")?;
        Ok(Flow::Continue)
    }

    fn rejected(&mut self, err: GameError) -> Result<Flow> {
        debug!("Move rejected: {err}");
        self.transmit(&format!("Invalid move. Try again. {}\n", err.to_string().trim()))?;
        Ok(Flow::Continue)
    }

    fn transmit_state(&mut self, model: &dyn RedGameModel) -> Result<()> {
        TextView::new(model).render_to(&mut self.output)?;
        self.transmit("\n")?;
        let remaining = model.num_of_cards_in_deck()?;
        self.transmit(&format!("Number of cards in deck: {remaining}\n"))
    }

    fn transmit(&mut self, message: &str) -> Result<()> {
        self.output.write_all(message.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn cards(text: &str) -> Vec<Card> {
        text.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn run(
        model: &mut dyn RedGameModel,
        deck: Vec<Card>,
        num_palettes: usize,
        hand_size: usize,
        input: &str,
    ) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = TextController::new(Cursor::new(input), &mut out).play_game(
            model,
            deck,
            false,
            num_palettes,
            hand_size,
        );
        (result, String::from_utf8(out).unwrap())
    }

    fn quit_block(state: &str) -> String {
        format!("Game quit!\nState of game when quit:\n{state}")
    }

    const TWO_BY_ONE: &str = "Canvas: R0\nP1: R1\n> P2: R2\nHand: R3\nNumber of cards in deck: 32\n";

    #[test]
    fn quit_on_start_renders_twice() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 2, 1, "q");
        result.unwrap();
        assert_eq!(out, format!("{TWO_BY_ONE}{}", quit_block(TWO_BY_ONE)));
    }

    #[test]
    fn quit_is_case_insensitive() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 2, 1, "Q");
        result.unwrap();
        assert!(out.ends_with(&quit_block(TWO_BY_ONE)));
    }

    #[test]
    fn unknown_command_reprompts() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 2, 1, "hello q");
        result.unwrap();
        assert_eq!(
            out,
            format!(
                "{TWO_BY_ONE}Invalid command. Try again.\n{TWO_BY_ONE}{}",
                quit_block(TWO_BY_ONE)
            )
        );
    }

    #[test]
    fn non_positive_index_aborts_the_command() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 2, 1, "palette 0 q");
        result.unwrap();
        assert_eq!(
            out,
            format!(
                "{TWO_BY_ONE}Invalid move. Try again.\n{TWO_BY_ONE}{}",
                quit_block(TWO_BY_ONE)
            )
        );

        let mut game = BasicGame::with_seed(0);
        let (_, out) = run(&mut game, Card::all(), 2, 1, "canvas -3 q");
        assert!(out.contains("Invalid move. Try again.\n"));
    }

    #[test]
    fn quit_inside_a_command_abandons_it() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 2, 1, "palette 1 q");
        result.unwrap();
        assert_eq!(out, format!("{TWO_BY_ONE}{}", quit_block(TWO_BY_ONE)));
        assert_eq!(game.palette(0).unwrap(), cards("R1"));
    }

    #[test]
    fn palette_move_skips_junk_then_draws() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 4, 7, "palette x 1 one 1 q");
        result.unwrap();
        let after = "Canvas: R0\n> P1: R1 R5\nP2: R2\nP3: R3\nP4: R4\n\
                     Hand: R6 R7 O1 O2 O3 O4 O5\nNumber of cards in deck: 23\n";
        assert!(out.ends_with(&format!("{after}{}", quit_block(after))));
    }

    #[test]
    fn engine_rejections_are_reported() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 4, 7, "palette 4 1 palette 9 1 q");
        result.unwrap();
        assert!(out.contains("Invalid move. Try again. Cannot play to a winning palette.\n"));
        assert!(out.contains("Invalid move. Try again. Invalid palette index.\n"));
        assert_eq!(game.hand().unwrap().len(), 7);
    }

    #[test]
    fn canvas_can_only_be_played_once_per_draw() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 4, 2, "canvas 1 canvas 1 q");
        result.unwrap();
        assert!(out.contains("Canvas: R\n"));
        assert!(out.contains(
            "Invalid move. Try again. Cannot play to the canvas at this time.\n"
        ));
        assert_eq!(game.canvas().unwrap(), "R5".parse().unwrap());
    }

    #[test]
    fn winning_move_ends_the_game() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, cards("O6 R6 R7"), 2, 1, "palette 1 1");
        result.unwrap();
        assert_eq!(
            out,
            "Canvas: R0\nP1: O6\n> P2: R6\nHand: R7\nNumber of cards in deck: 0\n\
             Game won.\n\
             Canvas: R0\n> P1: O6 R7\nP2: R6\nHand: \nNumber of cards in deck: 0\n"
        );
    }

    #[test]
    fn losing_move_ends_the_game() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, cards("R6 R7 O5 O6"), 2, 2, "palette 1 1");
        result.unwrap();
        assert!(out.ends_with(
            "Game lost.\nCanvas: R0\nP1: R6 O5\n> P2: R7\nHand: O6\nNumber of cards in deck: 0\n"
        ));
    }

    #[test]
    fn advanced_game_draws_through_the_controller() {
        let mut game = AdvancedGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 4, 7, "palette 1 1 q");
        result.unwrap();
        assert!(out.contains("Hand: R6 R7 O1 O2 O3 O4 O5\nNumber of cards in deck: 23\n"));
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, Card::all(), 2, 1, "palette 1");
        assert_eq!(result.unwrap_err().to_string(), "No more input available.");
        assert!(out.starts_with(TWO_BY_ONE));
    }

    #[test]
    fn start_failures_propagate() {
        let mut game = BasicGame::with_seed(0);
        let (result, out) = run(&mut game, cards("R1 R2"), 2, 1, "q");
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<GameError>().unwrap().is_invalid_argument());
        assert!(out.is_empty());
    }
}
