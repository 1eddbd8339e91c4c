//! End-to-end protocol tests: referee text in, command lines out.

use photosynth_bot::core::{Board, BotConfig};
use photosynth_bot::policy::GreedyPolicy;
use photosynth_bot::protocol::{self, ProtocolError};

fn board_text() -> String {
    let mut text = String::from("37\n");
    for record in Board::standard().to_records() {
        let neighbors: Vec<String> = record.neighbors.iter().map(|n| n.to_string()).collect();
        text.push_str(&format!(
            "{} {} {}\n",
            record.index,
            record.richness,
            neighbors.join(" ")
        ));
    }
    text
}

fn play(input: &str) -> Result<(usize, Vec<String>), ProtocolError> {
    let mut output = Vec::new();
    let turns = protocol::run(input.as_bytes(), &mut output, &GreedyPolicy::default())?;
    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    Ok((turns, lines))
}

#[test]
fn test_full_game_transcript() {
    let mut input = board_text();
    // Day 0: one small tree, nothing but WAIT on offer
    input.push_str("0\n20\n2 0\n2 0 0\n1\n20 1 1 0\n1\nWAIT\n");
    // Day 20: a large tree worth harvesting
    input.push_str("20\n10\n6 30\n4 28 0\n1\n5 3 1 0\n2\nWAIT\nCOMPLETE 5\n");

    let (turns, lines) = play(&input).unwrap();
    assert_eq!(turns, 2);
    assert_eq!(lines, vec!["WAIT DSP: 1 SP: 2", "COMPLETE 5"]);
}

#[test]
fn test_board_only_plays_no_turns() {
    let (turns, lines) = play(&board_text()).unwrap();
    assert_eq!(turns, 0);
    assert!(lines.is_empty());
}

#[test]
fn test_malformed_legal_action_is_ignored() {
    let mut input = board_text();
    input.push_str("20\n10\n6 30\n4 28 0\n1\n5 3 1 0\n3\nWAIT\nCOMPLETE\nCOMPLETE 5\n");

    let (_, lines) = play(&input).unwrap();
    assert_eq!(lines, vec!["COMPLETE 5"]);
}

#[test]
fn test_broken_board_is_reported() {
    let input = "2\n0 3 1 -1 -1 -1 -1 -1\n1 3 -1 -1 -1 0 -1 -1\n";
    assert!(matches!(play(input), Err(ProtocolError::Board(_))));
}

#[test]
fn test_truncated_turn_is_reported() {
    let mut input = board_text();
    input.push_str("3\n20\n2 0\n2 0 0\n2\n20 1 1 0\n");

    match play(&input) {
        Err(ProtocolError::UnexpectedEof { expected }) => assert_eq!(expected, "tree cell"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_config_file_round_trip() {
    let config = BotConfig::from_toml_str(
        r#"
        [weights]
        seed_line_penalty = 0

        [economy]
        late_harvest_day = 20
        "#,
    )
    .unwrap();
    assert_eq!(config.weights.seed_line_penalty, 0);
    assert_eq!(config.weights.complete_shadow_bonus, 1);
    assert_eq!(config.economy.late_harvest_day, 20);
    assert_eq!(config.economy.mid_harvest_day, 13);
}
