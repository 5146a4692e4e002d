//! Property tests for the search and evaluation over generated positions.
//!
//! Positions are produced by replaying random column sequences, skipping full
//! columns and stopping as soon as the game ends.

use proptest::prelude::*;

use connect4_agent::{
    arrayboard::ArrayBoard,
    evaluation::{distance_from_centre, evaluate, Weights, WIN_SCORE},
    solver::{order_moves, Solver},
    Board, Player, WIDTH,
};

fn play_out(moves: &[usize]) -> ArrayBoard {
    let mut board = ArrayBoard::new();
    for &column in moves {
        if board.is_terminal() {
            break;
        }
        if board.legal_columns().contains(&column) {
            let player = board.next_player();
            board
                .drop_piece(player, column)
                .expect("legal column was rejected");
        }
    }
    board
}

fn moves_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..WIDTH, 0..24)
}

proptest! {
    #[test]
    fn chosen_move_is_legal(moves in moves_strategy(), depth in 0i32..=3) {
        let board = play_out(&moves);
        if board.is_terminal() {
            return Ok(());
        }

        let mut solver = Solver::new(board.next_player());
        let column = solver.choose_move(&board, depth).unwrap();
        prop_assert!(board.legal_columns().contains(&column));
    }

    #[test]
    fn pruning_never_changes_root_score(moves in moves_strategy(), depth in 1u32..=3) {
        let board = play_out(&moves);
        let player = board.next_player();

        let mut solver = Solver::new(player);
        let pruned = solver.search(&board, depth, true, i32::MIN, i32::MAX).unwrap();
        let full = solver.search_exhaustive(&board, depth, true).unwrap();
        prop_assert_eq!(pruned.score, full.score);
    }

    #[test]
    fn evaluation_is_antisymmetric(moves in moves_strategy()) {
        let board = play_out(&moves);
        if board.is_terminal() {
            return Ok(());
        }
        let weights = Weights::default();

        let score = evaluate(&board, Player::One, &weights);
        prop_assert_eq!(evaluate(&board, Player::Two, &weights), -score);
        prop_assert_eq!(evaluate(&board.swap_players(), Player::One, &weights), -score);
        // heuristic scores stay clear of proven results
        prop_assert!(score.abs() < WIN_SCORE - 42);
    }

    #[test]
    fn terminal_scores_follow_the_winner(moves in prop::collection::vec(0usize..WIDTH, 7..60)) {
        let board = play_out(&moves);
        if !board.is_terminal() {
            return Ok(());
        }
        let weights = Weights::default();
        let pieces = board.piece_count() as i32;

        match board.winner() {
            Some(winner) => {
                prop_assert_eq!(evaluate(&board, winner, &weights), WIN_SCORE - pieces);
                prop_assert_eq!(evaluate(&board, winner.other(), &weights), -WIN_SCORE + pieces);
            }
            None => prop_assert_eq!(evaluate(&board, Player::One, &weights), 0),
        }
    }

    #[test]
    fn move_order_is_a_permutation(columns in prop::sample::subsequence((0..WIDTH).collect::<Vec<_>>(), 0..=WIDTH).prop_shuffle()) {
        let ordered = order_moves(&columns);

        let mut expected = columns.clone();
        expected.sort_unstable();
        let mut actual = ordered.clone();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);

        prop_assert!(ordered
            .windows(2)
            .all(|pair| distance_from_centre(pair[0]) <= distance_from_centre(pair[1])));
    }
}
