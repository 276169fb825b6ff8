use assert_cmd::Command;
use predicates::prelude::*;

fn flipside() -> Command {
    Command::cargo_bin("flipside").unwrap()
}

#[test]
fn test_handshake() {
    flipside()
        .write_stdin("flipside\nisready\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("flipsideok").and(predicate::str::contains("readyok")));
}

#[test]
fn test_go_from_fen() {
    flipside()
        .write_stdin("position fen .OOO/.OOX/XXXO/..X. O\ngo\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("info value 13 nodes 76"))
        .stdout(predicate::str::contains("bestmove 3,0"));
}

#[test]
fn test_go_without_moves_passes() {
    flipside()
        .write_stdin("position fen XO.. O\ngo\npass\ngetfen\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bestmove pass"))
        .stdout(predicate::str::contains("XO.. X"));
}

#[test]
fn test_moves_and_play() {
    flipside()
        .write_stdin("moves\nplay 0,1\ngetfen\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("moves 0,1 1,0 2,3 3,2"))
        .stdout(predicate::str::contains("..../.XO./XXX./.... O"));
}

#[test]
fn test_match_from_endgame() {
    flipside()
        .write_stdin("position fen .OOO/.OOX/XXXO/..X. O\nmatch minimax minimax\ngetfen\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("result X 3 O 13 winner O"))
        .stdout(predicate::str::contains("XOOO/OOOX/OOXO/OOOO X"));
}

#[test]
fn test_newgame_size() {
    flipside()
        .write_stdin("newgame 6x6\ngetfen\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("....../....../..XO../..OX../....../...... X"));
}

#[test]
fn test_strict_mode_aborts_on_error() {
    flipside()
        .write_stdin("bogus\nisready\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("readyok").not());
}

#[test]
fn test_lenient_mode_reports_errors() {
    flipside()
        .write_stdin("setoption name strictmode value false\nbogus\nplay 0,0\nisready\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: bogus"))
        .stderr(predicate::str::contains("Illegal move 0,0 for X"))
        .stdout(predicate::str::contains("readyok"));
}
