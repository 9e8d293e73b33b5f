//! End-to-end tests for interactive session behavior.
//!
//! # Test Strategy
//!
//! Each test simulates what a user does at the prompt:
//! 1. Type keys (e.g., "vol 40", then Enter)
//! 2. Run them through the production Runtime → App → Dispatcher
//! 3. Against a simulated player that records every call
//! 4. Verify final App state, rendered outputs and player calls
//!
//! Invariants are checked at every render.

use jukebox_app::{AppEvent, KeyInput, Reply, Runtime};
use jukebox_client::{ClientError, Snapshot};
use jukebox_harness::{Call, InvariantRegistry, SimDriver, SimPlayer};
use proptest::prelude::*;

fn driver() -> SimDriver {
    SimDriver::new().with_invariants(InvariantRegistry::standard())
}

async fn run(driver: &SimDriver, player: &SimPlayer) -> jukebox_app::App {
    Runtime::new(driver.clone(), player.clone(), "http://localhost:3678".into())
        .run()
        .await
        .unwrap()
}

#[tokio::test]
async fn commands_run_in_order() {
    let driver = driver();
    let player = SimPlayer::new();
    driver.type_line("vol 40");
    driver.type_line("next");
    driver.type_line("quit");

    let app = run(&driver, &player).await;

    assert_eq!(player.calls(), vec![Call::SetVolume(40), Call::Next]);
    assert_eq!(driver.outputs(), vec!["Volume: 40%", "Next track", "Bye!"]);
    assert!(app.is_quitting());
    assert!(driver.is_stopped());
}

#[tokio::test]
async fn repeated_commands_each_produce_output() {
    let driver = driver();
    let player = SimPlayer::new();
    driver.type_line("n");
    driver.type_line("n");

    run(&driver, &player).await;

    assert_eq!(driver.outputs(), vec!["Next track", "Next track"]);
}

#[tokio::test]
async fn quit_stops_processing_remaining_input() {
    let driver = driver();
    let player = SimPlayer::new();
    driver.type_line("q");
    driver.type_line("next");

    let app = run(&driver, &player).await;

    assert!(player.calls().is_empty());
    assert!(app.is_quitting());
    assert!(driver.has_pending());
}

#[tokio::test]
async fn errors_keep_session_alive() {
    let driver = driver();
    let player = SimPlayer::new();
    player.fail_with(ClientError::Transport {
        addr: "http://localhost:3678".into(),
        message: "timed out".into(),
    });
    driver.type_line("pause");
    driver.type_line("bogus");
    driver.type_line("vol 101");
    driver.type_line("help");

    let app = run(&driver, &player).await;

    let outputs = driver.outputs();
    assert_eq!(outputs.len(), 4);
    assert_eq!(outputs[0], "Error: cannot connect to player at http://localhost:3678: timed out");
    assert_eq!(outputs[1], "Unknown command: bogus (type 'help' for commands)");
    assert_eq!(outputs[2], "Volume must be 0-100");
    assert!(outputs[3].starts_with("jukebox commands"));
    assert_eq!(player.calls(), vec![Call::PlayPause]);
    // Ended by the exhausted script, not by any error.
    assert_eq!(app.output(), Some(&Ok(Reply::Help)));
}

#[tokio::test]
async fn line_editing_before_submit() {
    let driver = driver();
    let player = SimPlayer::new();
    // "vol 9" → Home, KillToEnd clears; retype with a correction.
    for c in "vol 9".chars() {
        driver.inject_key(KeyInput::Char(c));
    }
    driver.inject_key(KeyInput::Home);
    driver.inject_key(KeyInput::KillToEnd);
    for c in "vol 55x".chars() {
        driver.inject_key(KeyInput::Char(c));
    }
    driver.inject_key(KeyInput::Backspace);
    driver.inject_key(KeyInput::Enter);

    run(&driver, &player).await;

    assert_eq!(player.calls(), vec![Call::SetVolume(55)]);
}

#[tokio::test]
async fn whitespace_submit_is_ignored() {
    let driver = driver();
    let player = SimPlayer::new();
    driver.type_line("   ");

    let app = run(&driver, &player).await;

    assert!(driver.outputs().is_empty());
    assert_eq!(app.completed_commands(), 0);
    assert_eq!(app.editor().text(), "   ");
}

#[tokio::test]
async fn shuffle_toggles_twice() {
    let driver = driver();
    let player = SimPlayer::with_snapshot(Snapshot::default());
    driver.type_line("shuffle");
    driver.type_line("shuffle");

    run(&driver, &player).await;

    assert_eq!(driver.outputs(), vec!["Shuffle on", "Shuffle off"]);
    assert!(!player.snapshot().shuffle);
}

#[tokio::test]
async fn resize_and_tick_are_harmless() {
    let driver = driver();
    let player = SimPlayer::new();
    driver.inject_event(AppEvent::Resize(100, 30));
    driver.inject_event(AppEvent::Tick);
    driver.type_line("prev");

    let app = run(&driver, &player).await;

    assert_eq!(app.terminal_size(), (100, 30));
    assert_eq!(player.calls(), vec![Call::Prev]);
}

/// Generate keystrokes biased toward real command words.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => prop::sample::select(vec!['v', 'o', 'l', ' ', '5', 'n', 's', 'h', 'p', 'x', 'é'])
            .prop_map(KeyInput::Char),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
        1 => Just(KeyInput::KillToStart),
        1 => Just(KeyInput::KillToEnd),
        2 => Just(KeyInput::Enter),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_sessions_hold_invariants(keys in prop::collection::vec(key_strategy(), 0..80)) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let driver = driver();
        let player = SimPlayer::new();
        for key in keys {
            driver.inject_key(key);
        }

        let result = rt.block_on(
            Runtime::new(driver.clone(), player.clone(), "http://localhost:3678".into()).run(),
        );

        prop_assert!(result.is_ok(), "{result:?}");
        let app = result.unwrap();
        prop_assert!(app.is_quitting());
        prop_assert!(!app.is_busy());
        prop_assert_eq!(driver.outputs().len(), app.completed_commands());
    }
}
