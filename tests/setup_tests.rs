use std::io::Cursor;

use salvo::setup::{prompt_config, SetupPreset};
use salvo::GameConfig;

fn run(script: &str, preset: SetupPreset) -> (Option<GameConfig>, String) {
    let mut input = Cursor::new(script.as_bytes());
    let mut output = Vec::new();
    let config = prompt_config(&mut input, &mut output, preset).unwrap();
    (config, String::from_utf8(output).unwrap())
}

#[test]
fn test_too_many_ships_is_reprompted() {
    let (config, out) = run("3\n8\n2\n", SetupPreset::default());
    assert_eq!(config, Some(GameConfig::new(3, 2, 1).unwrap()));
    assert!(out.contains("ship count 8 is not between 1 and 3"));
    assert_eq!(out.matches("Enter the number of ships (1 to 3)").count(), 2);
    assert_eq!(out.matches("Enter the size of the board").count(), 1);
}

#[test]
fn test_bad_size_and_garbage_are_reprompted() {
    let (config, out) = run("eleven\n11\n1\n4\n5\n", SetupPreset::default());
    assert_eq!(config, Some(GameConfig::new(4, 5, 1).unwrap()));
    assert!(out.contains("Please enter a number"));
    assert!(out.contains("board size 11 is not between 2 and 10"));
    assert!(out.contains("board size 1 is not between 2 and 10"));
}

#[test]
fn test_valid_preset_needs_no_input() {
    let preset = SetupPreset {
        size: Some(6),
        ships: Some(4),
        rounds: Some(3),
    };
    let (config, out) = run("", preset);
    assert_eq!(config, Some(GameConfig::new(6, 4, 3).unwrap()));
    assert!(out.is_empty());
}

#[test]
fn test_invalid_presets_fall_back_to_prompts() {
    let preset = SetupPreset {
        size: Some(3),
        ships: Some(8),
        rounds: Some(0),
    };
    let (config, out) = run("3\n2\n", preset);
    assert_eq!(config, Some(GameConfig::new(3, 3, 2).unwrap()));
    assert!(out.contains("ship count 8"));
    assert!(out.contains("Enter the number of rounds (1 to 99)"));
}

#[test]
fn test_closed_input_cancels_setup() {
    let (config, _) = run("5\n", SetupPreset::default());
    assert_eq!(config, None);
}
