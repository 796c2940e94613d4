// Browser tests for the DOM screen. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id("logo-game")
}

#[wasm_bindgen_test]
fn mount_and_unmount() {
    logo_guess::start_game().unwrap();
    assert!(logo_guess::is_running());
    assert!(logo_guess::is_ticking());
    let el = root().expect("root element");
    assert_eq!(el.inner_html().matches("<button").count(), 9);
    assert!(logo_guess::start_game().is_err());

    assert!(logo_guess::stop_game());
    assert!(root().is_none());
    assert!(!logo_guess::is_running());
    assert!(!logo_guess::stop_game());
}

#[wasm_bindgen_test]
fn ticker_stops_on_game_over_and_resumes_on_restart() {
    logo_guess::start_game().unwrap();
    // "Java" is hard-only, so it never matches on the default easy difficulty.
    for _ in 0..3 {
        assert!(!logo_guess::guess_logo("Java"));
    }
    assert!(!logo_guess::is_ticking());
    // Selector is disabled once the round is over.
    assert!(!logo_guess::select_difficulty("hard").unwrap());
    assert!(logo_guess::select_difficulty("expert").is_err());

    assert!(logo_guess::restart_game());
    assert!(logo_guess::is_ticking());
    logo_guess::stop_game();
}
