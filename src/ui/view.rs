// DOM side of the game screen. Elements are created once (or reused by id)
// and held directly; nothing is looked up by id after construction.
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement, HtmlElement};

use crate::figure::{self, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::game::{GameSession, GuessOutcome, RoundResult};

const LETTERS: std::ops::RangeInclusive<char> = 'a'..='z';

const CORRECT_KEY_BG: &str = "linear-gradient(145deg, #27ae60, #2ecc71)";
const WRONG_KEY_BG: &str = "linear-gradient(145deg, #e74c3c, #c0392b)";

/// Buttons on the lose popup / win overlay.
pub(crate) struct EndButtons {
    pub retry: HtmlButtonElement,
    pub new_game: HtmlButtonElement,
}

pub(crate) struct View {
    ctx: CanvasRenderingContext2d,
    word: Element,
    wrong: Element,
    hint: Element,
    lose: HtmlElement,
    win: HtmlElement,
    revealed: Element,
    pub keys: HashMap<char, HtmlButtonElement>,
    pub lose_buttons: EndButtons,
    pub win_buttons: EndButtons,
}

fn ensure(doc: &Document, parent: &Element, tag: &str, id: &str, style: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element(tag)?;
    el.set_id(id);
    if !style.is_empty() {
        el.set_attribute("style", style).ok();
    }
    parent.append_child(&el)?;
    Ok(el)
}

fn button(doc: &Document, parent: &Element, id: &str, label: &str) -> Result<HtmlButtonElement, JsValue> {
    let btn: HtmlButtonElement = ensure(doc, parent, "button", id, "")?.dyn_into()?;
    btn.set_text_content(Some(label));
    Ok(btn)
}

impl View {
    pub fn build(doc: &Document) -> Result<Self, JsValue> {
        let body: Element = doc.body().ok_or_else(|| JsValue::from_str("no body"))?.into();
        let root = ensure(
            doc,
            &body,
            "div",
            "hm-root",
            "display:flex; flex-direction:column; align-items:center; gap:12px; font-family:'Fira Code', monospace; color:#eee;",
        )?;

        let canvas: HtmlCanvasElement = ensure(doc, &root, "canvas", "hm-canvas", "background:#181818; border-radius:12px;")?.dyn_into()?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let hint = ensure(doc, &root, "p", "hm-hint", "font-style:italic;")?;
        let word = ensure(doc, &root, "div", "hm-word", "font-size:32px; letter-spacing:4px;")?;
        let wrong = ensure(doc, &root, "div", "hm-wrong", "color:#ff6b6b; min-height:1.2em;")?;

        let keyboard = ensure(
            doc,
            &root,
            "div",
            "hm-keyboard",
            "display:grid; grid-template-columns:repeat(9, 40px); gap:6px;",
        )?;
        let mut keys = HashMap::new();
        for letter in LETTERS {
            let btn = button(doc, &keyboard, &format!("hm-key-{letter}"), &letter.to_string())?;
            btn.set_class_name("key");
            keys.insert(letter, btn);
        }

        let overlay_style = "display:none; position:fixed; inset:0; flex-direction:column; align-items:center; justify-content:center; gap:12px; background:rgba(0,0,0,0.75); z-index:40;";

        let lose: HtmlElement = ensure(doc, &root, "div", "hm-lose", overlay_style)?.dyn_into()?;
        let lose_msg = ensure(doc, &lose, "p", "hm-lose-msg", "font-size:22px;")?;
        lose_msg.set_text_content(Some("Game over! The word was: "));
        let revealed = ensure(doc, &lose_msg, "span", "hm-correct-word", "color:#ffd166;")?;
        let lose_buttons = EndButtons {
            retry: button(doc, &lose, "hm-retry-lose", "Try again")?,
            new_game: button(doc, &lose, "hm-new-lose", "New game")?,
        };

        let win: HtmlElement = ensure(doc, &root, "div", "hm-win", overlay_style)?.dyn_into()?;
        ensure(doc, &win, "p", "hm-win-msg", "font-size:28px; color:#ffd700;")?
            .set_text_content(Some("You won!"));
        let win_buttons = EndButtons {
            retry: button(doc, &win, "hm-retry-win", "Play same word")?,
            new_game: button(doc, &win, "hm-new-win", "New game")?,
        };

        Ok(Self {
            ctx,
            word,
            wrong,
            hint,
            lose,
            win,
            revealed,
            keys,
            lose_buttons,
            win_buttons,
        })
    }

    fn set_shown(el: &HtmlElement, shown: bool) {
        el.style()
            .set_property("display", if shown { "flex" } else { "none" })
            .ok();
    }

    pub fn hide_popups(&self) {
        Self::set_shown(&self.lose, false);
        Self::set_shown(&self.win, false);
    }

    pub fn set_keyboard_enabled(&self, enabled: bool) {
        for btn in self.keys.values() {
            btn.set_disabled(!enabled);
        }
    }

    /// Round is being fetched: blank figure, locked keyboard.
    pub fn show_loading(&mut self) {
        self.hide_popups();
        self.set_keyboard_enabled(false);
        figure::render_figure(&mut self.ctx, 0);
        self.hint.set_text_content(Some("Hint: loading..."));
        self.word.set_text_content(Some(""));
        self.wrong.set_text_content(Some(""));
    }

    /// Fresh (or restarted) round: backdrop only, all keys usable.
    pub fn begin_round(&mut self, session: &GameSession) {
        self.hide_popups();
        figure::render_figure(&mut self.ctx, session.wrong_letters().len());
        self.hint.set_text_content(Some(&format!("Hint: {}", session.hint())));
        for btn in self.keys.values() {
            btn.style().remove_property("background").ok();
        }
        self.set_keyboard_enabled(true);
        self.refresh_letters(session);
    }

    fn refresh_letters(&self, session: &GameSession) {
        self.word.set_text_content(Some(&session.masked_display()));
        let wrong = session.wrong_letters();
        let text = if wrong.is_empty() {
            String::new()
        } else {
            let list: Vec<String> = wrong.iter().map(char::to_string).collect();
            format!("Wrong: {}", list.join(", "))
        };
        self.wrong.set_text_content(Some(&text));
    }

    pub fn apply_guess(&mut self, session: &GameSession, letter: char, outcome: GuessOutcome) {
        if let Some(btn) = self.keys.get(&letter) {
            btn.set_disabled(true);
            let bg = match outcome {
                GuessOutcome::Correct => CORRECT_KEY_BG,
                GuessOutcome::Wrong { .. } => WRONG_KEY_BG,
            };
            btn.style().set_property("background", bg).ok();
        }
        self.refresh_letters(session);
        if let GuessOutcome::Wrong { .. } = outcome {
            figure::draw_newest(&mut self.ctx, session.wrong_letters().len());
        }

        match session.result() {
            RoundResult::Won => {
                self.set_keyboard_enabled(false);
                Self::set_shown(&self.win, true);
            }
            RoundResult::Lost => {
                self.set_keyboard_enabled(false);
                self.revealed.set_text_content(Some(&session.revealed_word()));
                Self::set_shown(&self.lose, true);
            }
            RoundResult::InProgress => {}
        }
    }
}
