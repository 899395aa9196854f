pub mod advanced;
pub mod card;
pub mod creator;
pub mod deck;
pub mod error;
pub mod game;
pub mod model;
pub mod scoring;

pub mod prelude;

#[cfg(test)]
mod tests_props;
