//! Browser front end.
//!
//! The [`App`] controller owns the current [`GameSession`] and the [`View`];
//! it lives in a thread-local slot because DOM callbacks are `'static`
//! closures. All mutation happens synchronously inside an event callback,
//! except the word fetch at round start, which runs on `spawn_local` and
//! hands its result back through the same slot.

mod canvas;
mod view;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, window};

use crate::config::GameConfig;
use crate::game::{GameSession, parse_key};
use crate::logger;
use crate::word_source::{OfflineLookup, RemoteLookup, fetch_round};
use view::View;

struct App {
    config: GameConfig,
    view: View,
    session: Option<GameSession>,
    // Set while the word source is pending; guesses are ignored meanwhile.
    loading: bool,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    start_with(GameConfig::default())
}

/// Same as [`start_game`] with settings given as a JSON object string.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start_with(config)
}

fn start_with(config: GameConfig) -> Result<(), JsValue> {
    logger::init(config.log_level);

    let already_running = APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(app) => {
                app.config = config.clone();
                true
            }
            None => false,
        }
    });
    if already_running {
        new_round();
        return Ok(());
    }

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let view = View::build(&doc)?;

    // On-screen keyboard
    for (&letter, btn) in &view.keys {
        on_click(btn, move || handle_guess(letter))?;
    }
    for buttons in [&view.lose_buttons, &view.win_buttons] {
        on_click(&buttons.retry, retry_round)?;
        on_click(&buttons.new_game, new_round)?;
    }

    // Physical keyboard
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.ctrl_key() || evt.meta_key() || evt.alt_key() {
                return;
            }
            if let Some(letter) = parse_key(&evt.key()) {
                handle_guess(letter);
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            config,
            view,
            session: None,
            loading: false,
        });
    });
    new_round();
    Ok(())
}

fn on_click(target: &EventTarget, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| handler()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// New word: clears the board, then fetches in the background.
fn new_round() {
    let config = APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let app = slot.as_mut()?;
        if app.loading {
            log::debug!("round already loading, new game request ignored");
            return None;
        }
        app.loading = true;
        app.session = None;
        app.view.show_loading();
        Some(app.config.clone())
    });
    let Some(config) = config else {
        return;
    };

    spawn_local(async move {
        let mut rng = rand::thread_rng();
        let round = if config.remote_words {
            fetch_round(&RemoteLookup::new(config.clone()), &config, &mut rng).await
        } else {
            fetch_round(&OfflineLookup, &config, &mut rng).await
        };
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                let session = GameSession::from_round(round);
                app.view.begin_round(&session);
                app.session = Some(session);
                app.loading = false;
            }
        });
    });
}

/// Same word, progress wiped.
fn retry_round() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if app.loading {
                return;
            }
            if let Some(session) = app.session.as_mut() {
                session.restart();
                app.view.begin_round(session);
            }
        }
    });
}

fn handle_guess(letter: char) {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(app) = slot.as_mut() else {
            return;
        };
        if app.loading {
            return;
        }
        let Some(session) = app.session.as_mut() else {
            return;
        };
        match session.submit_guess(letter) {
            Ok(outcome) => app.view.apply_guess(session, letter, outcome),
            Err(err) => log::debug!("guess '{letter}' ignored: {err}"),
        }
    });
}
