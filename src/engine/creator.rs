use std::str::FromStr;

use crate::engine::prelude::*;

/// The rule sets a game can be created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameType {
    Basic,
    Advanced,
}

/// Accepts `basic` or `advanced` in any letter case.
impl FromStr for GameType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(GameType::Basic),
            "advanced" => Ok(GameType::Advanced),
            _ => Err(GameError::invalid_argument(
                "Invalid game type. Choose 'basic' or 'advanced'",
            )),
        }
    }
}

pub struct GameCreator;

impl GameCreator {
    pub fn create(game_type: GameType) -> Box<dyn RedGameModel> {
        match game_type {
            GameType::Basic => Box::new(BasicGame::new()),
            GameType::Advanced => Box::new(AdvancedGame::new()),
        }
    }

    pub fn create_seeded(game_type: GameType, seed: u64) -> Box<dyn RedGameModel> {
        match game_type {
            GameType::Basic => Box::new(BasicGame::with_seed(seed)),
            GameType::Advanced => Box::new(AdvancedGame::with_seed(seed)),
        }
    }
}
