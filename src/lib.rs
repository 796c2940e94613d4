//! Logo Guess core crate.
//!
//! A single-screen quiz: a logo is shown and the player picks its name from a
//! fixed row of buttons before the clock or the attempts run out. The round
//! logic (`game`, `logos`) is plain Rust and testable natively; `screen` binds
//! it to the browser DOM and a one-second interval.

use wasm_bindgen::prelude::*;

mod config;
mod error;
mod game;
mod logging;
mod logos;
mod screen;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Frame, GameState, GuessOutcome, Phase, TickOutcome};
pub use logos::{Difficulty, LOGOS, LogoDeck, LogoEntry};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// JS entry points
// -----------------------------------------------------------------------------

/// Mount the game under `<body>` with the default round settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    screen::mount(GameConfig::default())
}

/// Mount the game with a JSON config; omitted fields use the defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    screen::mount(config)
}

/// Stop the timer and remove the game from the page. Returns false if it was
/// not running.
#[wasm_bindgen]
pub fn stop_game() -> bool {
    screen::unmount()
}

#[wasm_bindgen]
pub fn is_running() -> bool {
    screen::is_mounted()
}

/// Same as clicking the button labelled `name`. Returns true on a correct guess.
#[wasm_bindgen]
pub fn guess_logo(name: &str) -> bool {
    matches!(screen::guess(name), Some(GuessOutcome::Correct))
}

#[wasm_bindgen]
pub fn restart_game() -> bool {
    screen::restart()
}

/// Same as picking `value` ("easy", "medium", "hard") in the selector.
#[wasm_bindgen]
pub fn select_difficulty(value: &str) -> Result<bool, JsValue> {
    let difficulty: Difficulty = value.parse()?;
    Ok(screen::set_difficulty(difficulty).unwrap_or(false))
}

/// True while the one-second countdown interval is scheduled.
#[wasm_bindgen]
pub fn is_ticking() -> bool {
    screen::ticker_running()
}

/// Current screen as JSON (`{"screen":"playing",...}` or `{"screen":"game_over",...}`).
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_snapshot() -> Result<Option<String>, JsValue> {
    screen::frame()
        .map(|f| serde_json::to_string(&f).map_err(|e| JsValue::from_str(&e.to_string())))
        .transpose()
}
