mod controller;
mod view;

pub use controller::TextController;
