use hotseat_chess::{Board, Coord, GameManager, GameState, PieceKind, Player};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn play(game: &mut GameManager, from: Coord, to: Coord) {
    assert!(game.select(from).unwrap(), "select {from}");
    assert!(game.move_to(to).unwrap(), "move {from} -> {to}");
}

fn position(pieces: &[(i32, i32, PieceKind, Player)], to_move: Player) -> GameManager {
    let mut board = Board::empty();
    for &(x, y, kind, player) in pieces {
        board.place(c(x, y), kind, player).unwrap();
    }
    GameManager::from_position(board, to_move).unwrap()
}

#[test]
fn two_pawn_opening() {
    let mut game = GameManager::new();
    play(&mut game, c(4, 6), c(4, 4));
    assert_eq!(game.current_player(), Player::Black);
    play(&mut game, c(3, 1), c(3, 3));
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.current_player(), Player::White);
    assert!(game.board().piece_at(c(4, 4)).unwrap().is(PieceKind::Pawn, Player::White));
    assert!(game.board().piece_at(c(3, 3)).unwrap().is(PieceKind::Pawn, Player::Black));
}

#[test]
fn selecting_empty_or_enemy_squares_is_rejected() {
    let mut game = GameManager::new();
    assert_eq!(game.select(c(4, 4)), Ok(false));
    assert!(game.selected_square().is_none());
    assert_eq!(game.select(c(4, 1)), Ok(false));
    assert!(game.selected_square().is_none());

    // A rejected click keeps an existing selection.
    assert!(game.select(c(6, 7)).unwrap());
    let moves = game.selected_possible_moves().clone();
    assert_eq!(game.select(c(6, 0)), Ok(false));
    assert_eq!(game.select(c(6, 4)), Ok(false));
    assert_eq!(game.selected_square().map(|sq| sq.coord()), Some(c(6, 7)));
    assert_eq!(game.selected_possible_moves(), &moves);
}

#[test]
fn reselecting_replaces_the_move_set() {
    let mut game = GameManager::new();
    assert!(game.select(c(1, 7)).unwrap());
    assert!(game.selected_possible_moves().contains(&c(2, 5)));
    assert!(game.select(c(4, 6)).unwrap());
    let moves: Vec<Coord> = game.selected_possible_moves().iter().copied().collect();
    assert_eq!(moves, vec![c(4, 4), c(4, 5)]);
}

#[test]
fn possible_moves_are_stable_between_actions() {
    let mut game = GameManager::new();
    assert!(game.select(c(3, 6)).unwrap());
    let first = game.selected_possible_moves().clone();
    let second = game.selected_possible_moves().clone();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn illegal_destination_clears_selection_and_keeps_turn() {
    let mut game = GameManager::new();
    let before = game.board().clone();
    assert!(game.select(c(4, 6)).unwrap());
    assert_eq!(game.move_to(c(4, 3)), Ok(false));
    assert!(game.selected_square().is_none());
    assert!(game.selected_possible_moves().is_empty());
    assert_eq!(game.current_player(), Player::White);
    assert_eq!(game.board(), &before);

    // A second drop without a new pick-up also fails.
    assert_eq!(game.move_to(c(4, 4)), Ok(false));
}

#[test]
fn black_cannot_move_out_of_turn() {
    let mut game = GameManager::new();
    assert_eq!(game.select(c(3, 1)), Ok(false));
    assert_eq!(game.move_to(c(3, 3)), Ok(false));
    assert!(game.board().piece_at(c(3, 1)).is_some());
}

#[test]
fn quiet_move_relocates_the_same_piece() {
    let mut game = GameManager::new();
    let knight = game.board().piece_at(c(6, 7)).unwrap();
    play(&mut game, c(6, 7), c(5, 5));
    assert!(game.board().piece_at(c(6, 7)).is_none());
    assert_eq!(game.board().piece_at(c(5, 5)).unwrap().id(), knight.id());
    assert_eq!(game.board().piece_count(), 32);
}

#[test]
fn capture_removes_exactly_one_piece() {
    let mut game = GameManager::new();
    play(&mut game, c(4, 6), c(4, 4));
    play(&mut game, c(3, 1), c(3, 3));
    let pawn = game.board().piece_at(c(4, 4)).unwrap();
    play(&mut game, c(4, 4), c(3, 3));

    assert_eq!(game.board().piece_count(), 31);
    assert_eq!(game.board().pieces_of(Player::Black).count(), 15);
    assert!(game.board().piece_at(c(4, 4)).is_none());
    assert_eq!(game.board().piece_at(c(3, 3)).unwrap().id(), pawn.id());
    assert_eq!(game.current_player(), Player::Black);
}

#[test]
fn white_pawn_promotes_on_row_zero() {
    let mut game = position(
        &[
            (0, 1, PieceKind::Pawn, Player::White),
            (4, 7, PieceKind::King, Player::White),
            (7, 3, PieceKind::King, Player::Black),
        ],
        Player::White,
    );
    let pawn = game.board().piece_at(c(0, 1)).unwrap();
    play(&mut game, c(0, 1), c(0, 0));

    let queen = game.board().piece_at(c(0, 0)).unwrap();
    assert!(queen.is(PieceKind::Queen, Player::White));
    assert_ne!(queen, pawn);
    assert!(game.board().piece_at(c(0, 1)).is_none());
    assert_eq!(game.board().piece_count(), 3);
}

#[test]
fn black_pawn_promotes_where_it_lands_after_a_capture() {
    let mut game = position(
        &[
            (3, 6, PieceKind::Pawn, Player::Black),
            (4, 7, PieceKind::Rook, Player::White),
            (7, 4, PieceKind::King, Player::White),
            (0, 0, PieceKind::King, Player::Black),
        ],
        Player::Black,
    );
    assert!(game.select(c(3, 6)).unwrap());
    let moves: Vec<Coord> = game.selected_possible_moves().iter().copied().collect();
    assert_eq!(moves, vec![c(3, 7), c(4, 7)]);
    assert!(game.move_to(c(4, 7)).unwrap());

    assert!(game.board().piece_at(c(4, 7)).unwrap().is(PieceKind::Queen, Player::Black));
    assert!(game.board().piece_at(c(3, 7)).is_none());
    assert!(game.board().piece_at(c(3, 6)).is_none());
    // The new queen checks the white king along the diagonal.
    assert_eq!(game.state(), GameState::WhiteCheck);
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn pieces_other_than_pawns_never_promote() {
    let mut game = position(
        &[
            (0, 1, PieceKind::Knight, Player::White),
            (4, 7, PieceKind::King, Player::White),
            (7, 3, PieceKind::King, Player::Black),
        ],
        Player::White,
    );
    play(&mut game, c(0, 1), c(2, 0));
    assert!(game.board().piece_at(c(2, 0)).unwrap().is(PieceKind::Knight, Player::White));
}

#[test]
fn games_are_independent() {
    let mut a = GameManager::new();
    let b = GameManager::new();
    play(&mut a, c(4, 6), c(4, 4));
    assert_eq!(a.current_player(), Player::Black);
    assert_eq!(b.current_player(), Player::White);
    assert!(b.board().piece_at(c(4, 4)).is_none());
    assert!(b.board().piece_at(c(4, 6)).is_some());
}
