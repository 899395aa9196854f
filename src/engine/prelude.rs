pub use crate::engine::{
    advanced::*,
    card::*,
    creator::*,
    deck::*,
    error::*,
    game::*,
    model::*,
};
