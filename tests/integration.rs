//! Integration tests for the territory engine binary.
//!
//! Spawns the engine process, plays a short game over stdin, and checks the
//! name line and every move line it writes to stdout.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

use territory::board::Direction;
use territory::protocol::parse_moves;

/// Pipes `input` to the engine with extra arguments and collects stdout lines.
fn run_engine_with(args: &[&str], input: &str) -> (Vec<String>, bool) {
    let exe = env!("CARGO_BIN_EXE_territory");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start territory");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    stdin.write_all(input.as_bytes()).unwrap();
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    (lines, status.success())
}

fn run_engine(input: &str) -> Vec<String> {
    let (lines, ok) = run_engine_with(&[], input);
    assert!(ok, "engine exited with failure");
    lines
}

/// 4x3 map, player 2. We own (0,1) with 30 strength next to a 5-strength
/// unclaimed cell, and a 2-strength cell at (2,1) boxed in by strong ones.
const HANDSHAKE: &str = "2\n4 3\n1 1 1 1 3 2 1 5 1 1 1 1\n";
const FRAME: &str = "4 0 1 2 1 0 1 2 5 0 40 40 40 40 30 5 2 40 40 40 40 40";

fn game(frames: &[&str]) -> String {
    let mut input = format!("{HANDSHAKE}{FRAME}\n");
    for f in frames {
        input.push_str(f);
        input.push('\n');
    }
    input
}

#[test]
fn handshake_replies_with_name() {
    let lines = run_engine(&game(&[]));
    assert_eq!(lines, vec!["territory".to_string()]);
}

#[test]
fn name_flag_overrides_default() {
    let (lines, ok) = run_engine_with(&["--name", "probe"], &game(&[]));
    assert!(ok);
    assert_eq!(lines[0], "probe");
}

#[test]
fn one_reply_per_frame() {
    let lines = run_engine(&game(&[FRAME, FRAME, FRAME]));
    assert_eq!(lines.len(), 4);
    for line in &lines[1..] {
        parse_moves(line).unwrap_or_else(|e| panic!("bad move line '{}': {}", line, e));
    }
}

#[test]
fn strong_cell_takes_weak_neighbour() {
    let lines = run_engine(&game(&[FRAME]));
    let moves = parse_moves(&lines[1]).unwrap();
    // (0,1) holds 30 strength and borders the 5-strength cell at (1,1).
    assert!(moves
        .iter()
        .any(|m| (m.location.x, m.location.y) == (0, 1) && m.direction == Direction::East));
}

#[test]
fn moves_only_touch_owned_cells() {
    let lines = run_engine(&game(&[FRAME]));
    for m in parse_moves(&lines[1]).unwrap() {
        assert_eq!(m.location.y, 1, "move from unowned cell: {:?}", m);
        assert_ne!(m.direction, Direction::Hold);
    }
}

#[test]
fn parallel_flag_gives_same_replies() {
    let input = game(&[FRAME, FRAME]);
    let sequential = run_engine(&input);
    let (parallel, ok) = run_engine_with(&["--parallel"], &input);
    assert!(ok);
    assert_eq!(sequential, parallel);
}

#[test]
fn malformed_frame_gets_empty_line() {
    let lines = run_engine(&game(&["1 2 3", FRAME]));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "");
    assert!(!lines[2].is_empty());
}

#[test]
fn truncated_handshake_fails() {
    let (lines, ok) = run_engine_with(&[], "2\n4 3\n");
    assert!(!ok);
    assert!(lines.is_empty());
}

#[test]
fn missing_config_file_fails() {
    let (_, ok) = run_engine_with(&["--config", "/nonexistent/territory.json"], &game(&[]));
    assert!(!ok);
}
