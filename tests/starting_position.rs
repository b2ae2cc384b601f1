use hotseat_chess::chess::layout::BACK_RANK;
use hotseat_chess::rules::legality::legal_moves;
use hotseat_chess::{Board, Coord, GameManager, GameState, PieceKind, Player};

#[test]
fn white_moves_first_and_game_is_playing() {
    let game = GameManager::new();
    assert_eq!(game.current_player(), Player::White);
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn sixteen_pieces_per_side() {
    let board = Board::new();
    assert_eq!(board.pieces_of(Player::White).count(), 16);
    assert_eq!(board.pieces_of(Player::Black).count(), 16);
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn back_ranks_and_pawns_are_in_place() {
    let board = Board::new();
    for x in 0..8 {
        let kind = BACK_RANK[x as usize];
        assert!(board.piece_at(Coord::new(x, 0)).unwrap().is(kind, Player::Black));
        assert!(board.piece_at(Coord::new(x, 7)).unwrap().is(kind, Player::White));
        assert!(board.piece_at(Coord::new(x, 1)).unwrap().is(PieceKind::Pawn, Player::Black));
        assert!(board.piece_at(Coord::new(x, 6)).unwrap().is(PieceKind::Pawn, Player::White));
        for y in 2..6 {
            assert!(board.square(x, y).unwrap().is_empty());
        }
    }
    assert!(board.piece_at(Coord::new(4, 0)).unwrap().is(PieceKind::King, Player::Black));
    assert!(board.piece_at(Coord::new(3, 7)).unwrap().is(PieceKind::Queen, Player::White));
}

#[test]
fn every_piece_has_its_own_identity() {
    let board = Board::new();
    let pawns: Vec<_> = board
        .pieces_of(Player::White)
        .filter(|(_, p)| p.kind() == PieceKind::Pawn)
        .map(|(_, p)| p)
        .collect();
    assert_eq!(pawns.len(), 8);
    for (i, a) in pawns.iter().enumerate() {
        for (j, b) in pawns.iter().enumerate() {
            assert_eq!(a == b, i == j);
        }
    }
}

#[test]
fn twenty_opening_moves_for_each_side() {
    for player in [Player::White, Player::Black] {
        let mut board = Board::new();
        let origins: Vec<Coord> = board.pieces_of(player).map(|(c, _)| c).collect();
        let total: usize = origins
            .into_iter()
            .map(|c| legal_moves(&mut board, c).unwrap().len())
            .sum();
        assert_eq!(total, 20, "{player}");
    }
}

#[test]
fn knight_opening_moves() {
    let mut board = Board::new();
    let moves: Vec<Coord> = legal_moves(&mut board, Coord::new(1, 7))
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(moves, vec![Coord::new(0, 5), Coord::new(2, 5)]);
}
