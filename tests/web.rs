// Browser-side checks, run with `wasm-pack test --headless --chrome`.
// Compiled out on native targets.
#![cfg(target_arch = "wasm32")]

use hangman_web::config::GameConfig;
use hangman_web::word_source::{OfflineLookup, fetch_round};
use hangman_web::{FALLBACK_WORDS, GameSession, RoundResult};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn offline_round_is_playable_in_browser() {
    let config = GameConfig::from_json(r#"{ "remote_words": false }"#).unwrap();
    let round = fetch_round(&OfflineLookup, &config, &mut rand::thread_rng()).await;
    assert!(FALLBACK_WORDS.iter().any(|(w, _)| *w == round.word.as_str()));

    let word = round.word.as_str().to_string();
    let mut session = GameSession::from_round(round);
    for c in word.chars() {
        let _ = session.submit_guess(c);
    }
    assert_eq!(session.result(), RoundResult::Won);
}
