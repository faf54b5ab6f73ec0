use clap::Parser;
use sokoban::board::{Board, Direction, MoveOutcome};
use sokoban::levels::Levels;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "sokoban")]
#[command(about = "A terminal Sokoban player", long_about = None)]
struct Args {
    /// Path to the levels file (XSB format)
    #[arg(value_name = "FILE", default_value = "levels.txt")]
    levels_file: String,

    /// Level number to start at (1-indexed)
    #[arg(value_name = "LEVEL", default_value = "1")]
    level: usize,
}

/// Map a command character to a movement direction (vi keys).
fn direction_for(ch: char) -> Option<Direction> {
    match ch {
        'h' => Some(Direction::Left),
        'j' => Some(Direction::Down),
        'k' => Some(Direction::Up),
        'l' => Some(Direction::Right),
        _ => None,
    }
}

fn main() {
    let args = Args::parse();

    // Load levels from file
    let levels = match Levels::from_file(&args.levels_file) {
        Ok(levels) => levels,
        Err(e) => {
            eprintln!("Error loading levels: {}", e);
            std::process::exit(1);
        }
    };

    if args.level == 0 {
        eprintln!("Error: level numbers must be at least 1");
        std::process::exit(1);
    }
    if args.level > levels.len() {
        eprintln!(
            "Error: level {} not found (file contains {} levels)",
            args.level,
            levels.len()
        );
        std::process::exit(1);
    }

    let mut current = args.level - 1;
    let mut board = Board::from_text(levels.get(current).unwrap());

    println!("Moves: h/j/k/l, u: undo, r: restart, +/-: change level, q: quit");

    'game: loop {
        println!();
        println!("~ Level {} ~  (moves: {})", current + 1, board.move_number());
        print!("{}", board);
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
            // EOF or read error
            break;
        }

        for ch in input.trim().chars() {
            if let Some(dir) = direction_for(ch) {
                if board.move_player(dir) == MoveOutcome::Blocked {
                    println!("Blocked.");
                }
                if board.has_won() {
                    print!("{}", board);
                    println!(
                        "Level {} completed in {} moves!",
                        current + 1,
                        board.move_number()
                    );
                    if current + 1 < levels.len() {
                        current += 1;
                        board = Board::from_text(levels.get(current).unwrap());
                        // Discard the rest of the input line; it was aimed
                        // at the finished level
                        continue 'game;
                    }
                    println!("All levels completed. Thanks for playing!");
                    break 'game;
                }
                continue;
            }

            match ch {
                'u' => board.undo_move(),
                'r' => board = Board::from_text(levels.get(current).unwrap()),
                '+' => {
                    if current + 1 < levels.len() {
                        current += 1;
                    }
                    board = Board::from_text(levels.get(current).unwrap());
                }
                '-' => {
                    current = current.saturating_sub(1);
                    board = Board::from_text(levels.get(current).unwrap());
                }
                'q' => {
                    println!("Thanks for playing!");
                    break 'game;
                }
                _ => println!("Unknown command '{}'.", ch),
            }
        }
    }
}
