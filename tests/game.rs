use flipside::core::{GameConfig, GameState, Side};
use flipside::driver::GameDriver;
use flipside::players::{MinimaxPlayer, RandomPlayer};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_minimax_keeps_its_guaranteed_score() {
    // a full search from the 4x4 start guarantees X at least 3 discs
    for seed in 0..3 {
        let state = GameState::new(&GameConfig::default()).unwrap();
        let mut driver = GameDriver::new(
            state,
            Box::new(MinimaxPlayer::new(Side::X)),
            Box::new(RandomPlayer::new(Side::O, StdRng::seed_from_u64(seed))),
        ).unwrap();

        let outcome = driver.run().unwrap();

        assert!(outcome.final_board.is_terminal());
        assert!(outcome.scores[Side::X] >= 3, "seed {} scored {}", seed, outcome.scores[Side::X]);
    }
}

#[test]
fn test_minimax_self_play_from_endgame() {
    let state = GameState::from_fen(".OOO/.OOX/XXXO/..X. O").unwrap();
    let mut driver = GameDriver::new(
        state,
        Box::new(MinimaxPlayer::new(Side::X)),
        Box::new(MinimaxPlayer::new(Side::O)),
    ).unwrap();

    let outcome = driver.run().unwrap();

    assert_eq!(outcome.final_board.to_fen(), "XOOO/OOOX/OOXO/OOOO");
    assert_eq!(outcome.winner, Some(Side::O));
    assert_eq!(outcome.plies, 5);
}
