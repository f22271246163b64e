//! Text streaming core

mod generator;

pub use generator::character_stream;
