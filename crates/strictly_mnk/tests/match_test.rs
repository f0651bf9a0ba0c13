//! Integration tests for the match engine.

use strictly_mnk::{
    Board, BoardConfig, Cell, ConfigErrorKind, FirstFreeSource, InvariantSet, Match,
    MatchInvariants, MatchStatus, Outcome, Position, ScriptedSource, Side, Turn,
};

type Scripted = Match<ScriptedSource, ScriptedSource>;

fn resumed(
    win_length: usize,
    grid: &[&[u8]],
    x: &[(isize, isize)],
    o: &[(isize, isize)],
) -> Scripted {
    let board = Board::from_codes(grid).unwrap();
    let config = BoardConfig::new(board.rows(), board.columns(), win_length).unwrap();
    Match::resume(
        config,
        board,
        ScriptedSource::from_pairs("X", x),
        ScriptedSource::from_pairs("O", o),
    )
    .unwrap()
}

#[test]
fn test_try_new_validates_dimensions() {
    let new = |size, k| {
        Match::try_new(
            size,
            size,
            k,
            ScriptedSource::new("p1", []),
            ScriptedSource::new("p2", []),
        )
    };

    let game = new(3, 3).unwrap();
    assert_eq!(game.board(), &Board::empty(3, 3));
    assert_eq!(game.status(), MatchStatus::InProgress);

    let game = new(6, 4).unwrap();
    assert_eq!(game.board().to_codes(), vec![vec![0u8; 6]; 6]);
    assert_eq!(game.moves_played(), 0);

    assert_eq!(new(2, 2).unwrap_err().kind(), &ConfigErrorKind::RowsTooFew(2));
    assert_eq!(
        new(5, 6).unwrap_err().kind(),
        &ConfigErrorKind::WinLengthTooLong {
            win_length: 6,
            limit: 5
        }
    );
}

#[test]
fn test_legal_move_continues() {
    let mut game = resumed(3, &[&[1, 1, 0], &[2, 2, 0], &[0, 0, 0]], &[(2, 2)], &[]);
    assert_eq!(game.advance_turn(), Turn::Continues);
    assert_eq!(game.result(), (true, None));
    assert_eq!(game.board().get(Position::new(2, 2)), Some(Cell::Occupied(Side::X)));
    assert_eq!(game.empty_cells(), 4);
    assert_eq!(game.to_move(), Side::O);
}

#[test]
fn test_occupied_cell_forfeits() {
    let mut game = resumed(3, &[&[1, 1, 0], &[2, 2, 0], &[0, 0, 0]], &[(0, 0)], &[]);
    let before = game.board().clone();

    assert_eq!(game.advance_turn(), Turn::Ended(Outcome::Winner(Side::O)));
    assert_eq!(game.result(), (false, Some(Side::O)));
    assert_eq!(game.board(), &before);
    assert!(game.history().is_empty());
}

#[test]
fn test_off_board_moves_forfeit() {
    let mut game = resumed(3, &[&[1, 1, 0], &[2, 2, 0], &[0, 0, 0]], &[(-1, 0)], &[]);
    assert_eq!(game.play_to_end(), Outcome::Winner(Side::O));
    assert_eq!(game.empty_cells(), 5);

    let mut game = resumed(3, &[&[1, 1, 0], &[2, 2, 0], &[0, 0, 1]], &[], &[(5, 0)]);
    assert_eq!(game.play_to_end(), Outcome::Winner(Side::X));
    assert_eq!(game.board().count_empty(), 4);
}

#[test]
fn test_three_by_three_wins() {
    let cases: [(&[&[u8]], (isize, isize)); 3] = [
        (&[&[1, 1, 0], &[2, 2, 0], &[0, 0, 0]], (0, 2)),
        (&[&[1, 0, 2], &[0, 1, 2], &[0, 0, 0]], (2, 2)),
        (&[&[2, 0, 1], &[0, 1, 2], &[0, 0, 0]], (2, 0)),
    ];
    for (grid, mv) in cases {
        let mut game = resumed(3, grid, &[mv], &[(1, 2)]);
        assert_eq!(game.advance_turn(), Turn::Ended(Outcome::Winner(Side::X)));
        assert_eq!(
            game.board().get(Position::new(mv.0, mv.1)),
            Some(Cell::Occupied(Side::X))
        );
        assert_eq!(game.player_o().calls(), 0);
    }
}

#[test]
fn test_last_cell_draws() {
    let mut game = resumed(3, &[&[1, 2, 1], &[0, 1, 2], &[2, 1, 2]], &[(1, 0)], &[]);
    assert_eq!(game.advance_turn(), Turn::Ended(Outcome::Draw));
    assert_eq!(game.result(), (false, None));
    assert!(game.board().is_full());
    assert_eq!(game.empty_cells(), 0);
}

#[test]
fn test_six_by_six_o_wins() {
    let cases: [(&[&[u8]], (isize, isize)); 3] = [
        (
            &[
                &[0, 1, 1, 1, 0, 1],
                &[0, 2, 0, 0, 0, 0],
                &[0, 0, 2, 0, 0, 0],
                &[0, 0, 0, 2, 0, 0],
                &[0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0],
            ],
            (4, 4),
        ),
        (
            &[
                &[0, 1, 1, 1, 0, 2],
                &[1, 0, 0, 0, 2, 0],
                &[0, 0, 0, 0, 0, 0],
                &[0, 0, 2, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0],
            ],
            (2, 3),
        ),
        (
            &[
                &[0, 1, 1, 1, 0, 0],
                &[1, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0],
                &[0, 0, 2, 0, 2, 2],
                &[0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0],
            ],
            (3, 3),
        ),
    ];
    for (grid, mv) in cases {
        let mut game = resumed(4, grid, &[], &[mv]);
        assert_eq!(game.to_move(), Side::O);
        assert_eq!(game.play_to_end(), Outcome::Winner(Side::O));
        assert_eq!(game.moves_played(), 8);
    }
}

#[test]
fn test_both_sources_notified_once() {
    let mut game = Match::new(
        BoardConfig::tic_tac_toe(),
        ScriptedSource::from_pairs("X", &[(0, 0), (0, 1), (0, 2)]),
        ScriptedSource::from_pairs("O", &[(1, 0), (1, 1)]),
    );
    assert_eq!(game.play_to_end(), Outcome::Winner(Side::X));
    assert_eq!(game.advance_turn(), Turn::AlreadyOver);

    let (x, o) = game.into_players();
    assert_eq!(x.notifications(), 1);
    assert_eq!(o.notifications(), 1);
    assert_eq!(x.outcome(), Some(Outcome::Winner(Side::X)));
    assert_eq!(o.outcome(), Some(Outcome::Winner(Side::X)));
    assert_eq!(x.calls(), 3);
    assert_eq!(o.calls(), 2);
}

#[test]
fn test_exhausted_script_forfeits_on_origin() {
    // Scripted sources fall back to (0, 0), which X already holds.
    let mut game = Match::new(
        BoardConfig::tic_tac_toe(),
        ScriptedSource::from_pairs("X", &[(0, 0)]),
        ScriptedSource::new("O", []),
    );
    assert_eq!(game.play_to_end(), Outcome::Winner(Side::X));
    assert_eq!(game.moves_played(), 1);
}

#[test]
fn test_first_free_self_play_on_wide_board() {
    let config = BoardConfig::new(3, 7, 3).unwrap();
    let mut game = Match::new(config, FirstFreeSource::new("a"), FirstFreeSource::new("b"));
    while game.advance_turn().continues() {
        assert!(MatchInvariants::check_all(&game).is_ok());
    }
    assert!(!game.is_in_progress());
    assert_eq!(
        game.history().len() + game.empty_cells(),
        config.cell_count()
    );
}

#[test]
fn test_boxed_sources() {
    let x: Box<dyn strictly_mnk::MoveSource> = Box::new(FirstFreeSource::new("a"));
    let o: Box<dyn strictly_mnk::MoveSource> =
        Box::new(ScriptedSource::from_pairs("b", &[(2, 2), (2, 1)]));
    let mut game = Match::new(BoardConfig::tic_tac_toe(), x, o);
    assert_eq!(game.play_to_end(), Outcome::Winner(Side::X));
    assert_eq!(
        game.board().to_codes(),
        vec![vec![1, 1, 1], vec![0, 0, 0], vec![0, 2, 2]]
    );
}
