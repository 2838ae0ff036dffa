use giobot_core::{Direction, MoveCommand};
use giobot_input::{IntentEvent, IntentState, MoveIntent};

#[test]
fn selecting_the_same_cell_twice_emits_nothing() {
    let mut intent = MoveIntent::new(18);
    assert_eq!(intent.select_cell(5), None);
    assert_eq!(intent.select_cell(5), None);
    assert_eq!(intent.from(), Some(5));
    assert_eq!(intent.state(), IntentState::Selecting);
}

#[test]
fn nudge_right_emits_and_reseeds() {
    let mut intent = MoveIntent::new(18);
    intent.select_cell(5);

    let cmd = intent.nudge(Direction::Right);

    assert_eq!(cmd, Some(MoveCommand::new(5, 6, false)));
    assert_eq!(intent.from(), Some(6));
    assert_eq!(intent.to(), None);
    assert_eq!(intent.state(), IntentState::Selecting);
}

#[test]
fn nudges_chain_from_the_previous_destination() {
    let mut intent = MoveIntent::new(18);
    intent.select_cell(0);

    let emitted: Vec<_> = [Direction::Down, Direction::Down]
        .into_iter()
        .filter_map(|d| intent.nudge(d))
        .collect();

    assert_eq!(
        emitted,
        vec![MoveCommand::new(0, 18, false), MoveCommand::new(18, 36, false)]
    );
}

#[test]
fn nudge_without_selection_is_ignored() {
    let mut intent = MoveIntent::new(18);
    assert_eq!(intent.nudge(Direction::Left), None);
    assert_eq!(intent.state(), IntentState::Idle);
}

#[test]
fn cancel_returns_to_idle_without_emitting() {
    let mut intent = MoveIntent::new(18);
    intent.select_cell(40);
    assert_eq!(intent.apply(IntentEvent::Cancel), None);
    assert_eq!(intent.state(), IntentState::Idle);
    assert_eq!((intent.from(), intent.to()), (None, None));

    // Nothing left to chain from.
    assert_eq!(intent.nudge(Direction::Up), None);
}

#[test]
fn reselecting_overwrites_the_source() {
    let mut intent = MoveIntent::new(18);
    intent.select_cell(40);
    intent.select_cell(100);
    assert_eq!(
        intent.nudge(Direction::Up),
        Some(MoveCommand::new(100, 82, false))
    );
}

#[test]
fn split_flag_persists_across_commands() {
    let mut intent = MoveIntent::new(10);
    intent.apply(IntentEvent::SetSplit(true));
    intent.apply(IntentEvent::Select(11));

    assert_eq!(
        intent.apply(IntentEvent::Nudge(Direction::Right)),
        Some(MoveCommand::new(11, 12, true))
    );
    assert_eq!(
        intent.apply(IntentEvent::Nudge(Direction::Down)),
        Some(MoveCommand::new(12, 22, true))
    );

    assert!(!intent.toggle_split());
    assert_eq!(
        intent.nudge(Direction::Left),
        Some(MoveCommand::new(22, 21, false))
    );
}

#[test]
fn nudge_below_index_zero_is_dropped() {
    let mut intent = MoveIntent::new(18);
    intent.select_cell(3);
    assert_eq!(intent.nudge(Direction::Up), None);
    assert_eq!(intent.from(), Some(3));
    assert_eq!(intent.state(), IntentState::Selecting);
}

#[test]
fn horizontal_nudge_at_an_edge_wraps_rows() {
    // Edge validation is the submitter's job; the machine reports the raw index.
    let mut intent = MoveIntent::new(18);
    intent.select_cell(18);
    assert_eq!(
        intent.nudge(Direction::Left),
        Some(MoveCommand::new(18, 17, false))
    );
}

#[test]
fn zero_row_width_vertical_nudge_is_not_a_move() {
    let mut intent = MoveIntent::new(0);
    intent.select_cell(4);
    assert_eq!(intent.nudge(Direction::Down), None);
    assert_eq!(intent.from(), Some(4));
}

#[test]
fn row_width_follows_the_map() {
    let mut intent = MoveIntent::new(18);
    intent.set_row_width(25);
    intent.select_cell(30);
    assert_eq!(
        intent.nudge(Direction::Down),
        Some(MoveCommand::new(30, 55, false))
    );
}
