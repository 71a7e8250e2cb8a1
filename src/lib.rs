//! Hangman Web core crate.
//!
//! The game logic (`game`, `figure`, `word_source`) is plain Rust and runs on
//! the host under `cargo test`. The `ui` module wires it to the browser and is
//! entered from JS through `start_game()`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod figure;
pub mod game;
mod logger;
mod ui;
pub mod word_source;

pub use config::GameConfig;
pub use error::{ConfigError, GuessError, LookupError, WordError};
pub use figure::{SEGMENT_COUNT, Segment};
pub use game::{GameSession, GuessOutcome, Hint, RoundResult, Word};
pub use ui::{start_game, start_game_with_config};
pub use word_source::{FALLBACK_WORDS, RoundWord, fetch_round};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
