use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use hotseat_chess::chess::movegen::MoveSet;
use hotseat_chess::{Coord, GameManager, Piece, PieceKind, Player};

#[derive(Debug, Clone, Copy)]
struct Options {
    unicode: bool,
    coords: bool,
}

fn usage() {
    eprintln!("Usage: play [--unicode] [--no-coords]");
    eprintln!("Log verbosity is read from RUST_LOG (default: warn).");
}

fn parse_args() -> Options {
    let mut opts = Options {
        unicode: false,
        coords: true,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--unicode" => opts.unicode = true,
            "--no-coords" => opts.coords = false,
            "-h" | "--help" => {
                usage();
                std::process::exit(0);
            }
            x => {
                eprintln!("Unknown option: {x}");
                usage();
                std::process::exit(2);
            }
        }
    }
    opts
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let opts = parse_args();
    init_tracing();

    let mut game = GameManager::new();
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        render(&game, opts);
        print!("{} to move > ", game.current_player());
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "help" => {
                print_help();
                continue;
            }
            "restart" => {
                game.restart();
                continue;
            }
            "exit" | "quit" | "q" => break,
            _ => {}
        }

        let Some(at) = parse_click(cmd) else {
            println!("Unknown input '{cmd}'. Type 'help' for commands.");
            continue;
        };
        if !game.board().contains(at) {
            println!("{at} is off the board.");
            continue;
        }
        click(&mut game, at)?;
    }
    Ok(())
}

/// One board click, the way a pointer-driven front end would feed the engine.
fn click(game: &mut GameManager, at: Coord) -> Result<()> {
    let own_piece = game
        .board()
        .piece_at(at)
        .is_some_and(|p| p.player() == game.current_player());

    if game.selected_square().is_none() || own_piece {
        if !game.select(at)? {
            println!("Can't select {at}.");
        }
        return Ok(());
    }

    if !game.move_to(at)? {
        println!("Illegal move to {at}.");
    }
    Ok(())
}

fn parse_click(cmd: &str) -> Option<Coord> {
    let mut parts = cmd.split(|c: char| c.is_whitespace() || c == ',');
    let x = parts.next()?.trim().parse().ok()?;
    let y = parts.find(|p| !p.is_empty())?.trim().parse().ok()?;
    if parts.any(|p| !p.is_empty()) {
        return None;
    }
    Some(Coord::new(x, y))
}

fn print_help() {
    println!("Enter a square as 'x y' (0..7, row 0 is Black's back rank).");
    println!("The first click picks up a piece, the second drops it.");
    println!("Commands: help, restart, quit");
}

fn render(game: &GameManager, opts: Options) {
    let selected = game.selected_square().map(|sq| sq.coord());
    let moves: &MoveSet = game.selected_possible_moves();

    println!();
    if opts.coords {
        println!("   0 1 2 3 4 5 6 7");
    }
    let mut row = String::new();
    for sq in game.board().iter() {
        if sq.x() == 0 {
            row.clear();
            if opts.coords {
                row.push_str(&format!("{}  ", sq.y()));
            }
        }
        let ch = match sq.piece() {
            Some(p) => piece_char(p, opts.unicode),
            None if moves.contains(&sq.coord()) => '*',
            None => '.',
        };
        row.push(ch);
        let marker = if Some(sq.coord()) == selected {
            '<'
        } else if sq.piece().is_some() && moves.contains(&sq.coord()) {
            'x'
        } else {
            ' '
        };
        row.push(marker);
        if sq.x() == 7 {
            println!("{}", row.trim_end());
        }
    }
    println!("{}", game.state());
    if game.state().is_over() {
        println!("Type 'restart' for a new game.");
    }
}

fn piece_char(piece: Piece, unicode: bool) -> char {
    let white = piece.player() == Player::White;
    if unicode {
        return match (piece.kind(), white) {
            (PieceKind::King, true) => '♔',
            (PieceKind::Queen, true) => '♕',
            (PieceKind::Rook, true) => '♖',
            (PieceKind::Bishop, true) => '♗',
            (PieceKind::Knight, true) => '♘',
            (PieceKind::Pawn, true) => '♙',
            (PieceKind::King, false) => '♚',
            (PieceKind::Queen, false) => '♛',
            (PieceKind::Rook, false) => '♜',
            (PieceKind::Bishop, false) => '♝',
            (PieceKind::Knight, false) => '♞',
            (PieceKind::Pawn, false) => '♟',
        };
    }
    let ch = match piece.kind() {
        PieceKind::King => 'k',
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Pawn => 'p',
    };
    if white {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}
