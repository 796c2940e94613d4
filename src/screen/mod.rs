//! Browser screen: owns the game, its DOM view and the one-second ticker.
//!
//! A single `Screen` lives in a thread-local slot while mounted. DOM listeners
//! and the ticker reach it through [`with_screen`], so every event runs to
//! completion against the same state before the next one is delivered.

mod ticker;
mod view;

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{GameState, GuessOutcome, TickOutcome};
use crate::logos::{Difficulty, LogoDeck};

use ticker::Ticker;
use view::View;

struct Screen {
    game: GameState<StdRng>,
    view: View,
    ticker: Option<Ticker>,
}

thread_local! {
    static SCREEN: RefCell<Option<Screen>> = RefCell::new(None);
}

/// Run `f` against the mounted screen. Returns `None` if nothing is mounted.
fn with_screen<T>(f: impl FnOnce(&mut Screen) -> T) -> Option<T> {
    SCREEN.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn is_mounted() -> bool {
    SCREEN.with(|cell| cell.borrow().is_some())
}

pub(crate) fn mount(config: GameConfig) -> Result<(), JsValue> {
    if is_mounted() {
        return Err(GameError::AlreadyRunning.into());
    }
    config.validate()?;
    let deck = LogoDeck::standard()?;
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let choices: Vec<&'static str> = deck.names().collect();
    let period_ms = config.tick_interval_ms;
    let game = GameState::new(config, deck, StdRng::from_entropy());

    let mut view = View::build(&doc, &choices)?;
    view.on_guess(|name| {
        with_screen(|s| s.guess(name));
    })?;
    view.on_restart(|| {
        with_screen(Screen::restart);
    })?;
    view.on_difficulty(|d| {
        with_screen(|s| s.set_difficulty(d));
    })?;
    view.apply(&game.frame());

    let ticker = Ticker::start(period_ms, on_tick)?;
    SCREEN.with(|cell| {
        *cell.borrow_mut() = Some(Screen {
            game,
            view,
            ticker: Some(ticker),
        });
    });
    log::info!("logo game mounted");
    Ok(())
}

/// Tear down the mounted screen, if any: stops the ticker, unregisters every
/// listener and removes the DOM. Must not be called from inside a game event.
pub(crate) fn unmount() -> bool {
    let screen = SCREEN.with(|cell| cell.borrow_mut().take());
    let was_mounted = screen.is_some();
    drop(screen);
    if was_mounted {
        log::info!("logo game unmounted");
    }
    was_mounted
}

fn on_tick() {
    with_screen(Screen::tick);
}

pub(crate) fn guess(name: &str) -> Option<GuessOutcome> {
    with_screen(|s| s.guess(name))
}

pub(crate) fn restart() -> bool {
    with_screen(Screen::restart).is_some()
}

pub(crate) fn set_difficulty(d: Difficulty) -> Option<bool> {
    with_screen(|s| s.set_difficulty(d))
}

/// Whether the one-second interval is currently scheduled.
pub(crate) fn ticker_running() -> bool {
    with_screen(|s| s.ticker.as_ref().is_some_and(Ticker::is_running)).unwrap_or(false)
}

#[cfg(feature = "serde_json")]
pub(crate) fn frame() -> Option<crate::game::Frame> {
    with_screen(|s| s.game.frame())
}

impl Screen {
    fn guess(&mut self, name: &str) -> GuessOutcome {
        let outcome = self.game.guess(name);
        if outcome == GuessOutcome::GameOver {
            self.stop_ticker();
        }
        self.render();
        outcome
    }

    // Runs inside the ticker's own callback: cancel only, never drop it here.
    fn tick(&mut self) {
        match self.game.tick() {
            TickOutcome::Running { .. } => {}
            TickOutcome::Expired | TickOutcome::Ignored => self.stop_ticker(),
        }
        self.render();
    }

    fn set_difficulty(&mut self, d: Difficulty) -> bool {
        let changed = self.game.set_difficulty(d);
        self.render();
        changed
    }

    fn restart(&mut self) {
        self.game.restart();
        // Replacing the ticker drops the previous (already cancelled) closure.
        self.ticker = None;
        match Ticker::start(self.game.config().tick_interval_ms, on_tick) {
            Ok(t) => self.ticker = Some(t),
            Err(e) => log::error!("could not restart ticker: {:?}", e),
        }
        self.render();
    }

    fn stop_ticker(&mut self) {
        if let Some(t) = self.ticker.as_mut() {
            t.cancel();
        }
    }

    fn render(&self) {
        self.view.apply(&self.game.frame());
    }
}
