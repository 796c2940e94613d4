// Integration tests (native) for the `logo-guess` crate.
// These drive the round state machine through its public API with a seeded
// rng and never touch the DOM.

use logo_guess::{
    Difficulty, Frame, GameConfig, GameState, GuessOutcome, LogoDeck, Phase, TickOutcome,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn game(seed: u64) -> GameState<StdRng> {
    GameState::new(
        GameConfig::default(),
        LogoDeck::standard().unwrap(),
        StdRng::seed_from_u64(seed),
    )
}

fn miss(game: &GameState<StdRng>) -> &'static str {
    // "Python" is easy; pick something that cannot be the current logo.
    if game.current_logo().name == "Python" { "Go" } else { "Python" }
}

#[test]
fn selection_always_matches_difficulty() {
    let mut g = game(100);
    for round in 0..30 {
        let d = Difficulty::ALL[round % 3];
        assert!(g.set_difficulty(d));
        for _ in 0..5 {
            assert_eq!(g.current_logo().difficulty, d);
            let name = g.current_logo().name;
            assert_eq!(g.guess(name), GuessOutcome::Correct);
        }
    }
    assert_eq!(g.score(), 150);
}

#[test]
fn high_score_is_max_over_rounds() {
    let mut g = game(200);
    let mut best = 0;
    for target in [3u32, 7, 2, 5] {
        for _ in 0..target {
            let name = g.current_logo().name;
            g.guess(name);
        }
        while !g.is_game_over() {
            g.tick();
        }
        best = best.max(target);
        assert_eq!(g.high_score(), best);
        assert_eq!(g.frame(), Frame::GameOver { score: target, high_score: best });
        g.restart();
    }
}

#[test]
fn restart_yields_fresh_round() {
    let mut g = game(300);
    g.set_difficulty(Difficulty::Hard);
    for _ in 0..3 {
        g.guess(miss(&g));
    }
    assert_eq!(g.phase(), Phase::GameOver);
    assert_eq!(g.attempts(), 0);
    g.restart();
    assert!(!g.is_game_over());
    assert_eq!(g.score(), 0);
    assert_eq!(g.attempts(), 3);
    assert_eq!(g.time_left(), 60);
    assert_eq!(g.current_logo().difficulty, Difficulty::Hard);
}

#[test]
fn clock_does_not_move_after_attempts_run_out() {
    let mut g = game(400);
    g.tick();
    for _ in 0..3 {
        g.guess(miss(&g));
    }
    assert_eq!(g.tick(), TickOutcome::Ignored);
    assert_eq!(g.time_left(), 59);
}

#[test]
fn custom_config_shortens_round() {
    let config = GameConfig {
        starting_attempts: 1,
        round_seconds: 2,
        default_difficulty: Difficulty::Medium,
        ..GameConfig::default()
    };
    let mut g = GameState::new(config, LogoDeck::standard().unwrap(), StdRng::seed_from_u64(5));
    assert_eq!(g.current_logo().difficulty, Difficulty::Medium);
    assert_eq!(g.tick(), TickOutcome::Running { time_left: 1 });
    assert_eq!(g.tick(), TickOutcome::Expired);
    g.restart();
    assert_eq!(g.guess(miss(&g)), GuessOutcome::GameOver);
}

#[test]
fn same_seed_same_logos() {
    let mut a = game(77);
    let mut b = game(77);
    for _ in 0..20 {
        assert_eq!(a.current_logo(), b.current_logo());
        let name = a.current_logo().name;
        a.guess(name);
        b.guess(name);
    }
}
