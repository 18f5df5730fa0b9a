mod interactive;

use std::env;
use std::io::{self, Write};

use connect_agents::{alpha_beta, evaluate, minimax, Agent, MinimaxAgent, DEFAULT_DEPTH};
use connect_core::{Column, GameState, ParseMoveError, Player};

fn display_board(state: &GameState) {
    println!("\n{}\n", state.board);

    match state.winner() {
        Some(player) => println!("{player} has connected four"),
        None if state.is_over() => println!("Board full, draw"),
        None => println!("{} to move", state.turn),
    }
}

fn parse_state(moves: &str) -> Option<GameState> {
    match GameState::from_moves(moves) {
        Ok(state) => Some(state),
        Err(e) => {
            eprintln!("Error parsing moves: {e}");
            None
        }
    }
}

/// Parses the `search [moves] [depth]` arguments. Move strings and bare
/// depths share the digit alphabet, so a lone argument is read as a
/// position first and only falls back to a depth when it cannot be one
/// (a digit outside 1-7, e.g. `search 8`).
fn parse_search_args(args: &[String]) -> Result<(GameState, u8), ParseMoveError> {
    match args {
        [] => Ok((GameState::new(), DEFAULT_DEPTH)),
        [arg] => match GameState::from_moves(arg) {
            Ok(state) => Ok((state, DEFAULT_DEPTH)),
            Err(ParseMoveError::InvalidColumn(_)) if arg.parse::<u8>().is_ok() => {
                Ok((GameState::new(), arg.parse().unwrap_or(DEFAULT_DEPTH)))
            }
            Err(e) => Err(e),
        },
        [moves, depth_arg, ..] => {
            let state = GameState::from_moves(moves)?;
            Ok((state, depth_arg.parse().unwrap_or(DEFAULT_DEPTH)))
        }
    }
}

fn play_line_mode() {
    let mut state = GameState::new();
    let mut history = Vec::new();
    let mut engine = MinimaxAgent::new();

    println!("Connect Four - you are Red, the engine is Yellow");
    println!("Enter a column (1-7). Commands: 'quit', 'undo', 'new', 'help'");

    loop {
        display_board(&state);

        if state.is_over() {
            break;
        }

        print!("Your move: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        let input = input.trim();

        match input {
            "quit" => break,
            "help" => {
                println!("Enter a column number from 1 to 7");
                println!("Commands: quit, undo, new, help");
                continue;
            }
            "new" => {
                state = GameState::new();
                history.clear();
                println!("New game started!");
                continue;
            }
            "undo" => {
                if history.len() >= 2 {
                    history.pop();
                    history.pop();
                    state = GameState::new();
                    for &col in &history {
                        state = state.apply_move(col);
                    }
                    println!("Undid last move");
                } else {
                    println!("Nothing to undo");
                }
                continue;
            }
            _ => {}
        }

        let col = input.chars().next().and_then(Column::from_char);
        match col {
            Some(col) if input.len() == 1 && state.is_legal(col) => {
                state = state.apply_move(col);
                history.push(col);

                if state.is_over() {
                    continue;
                }

                println!("Engine thinking...");
                if let Some(reply) = engine.best_move(&state) {
                    println!("Engine plays column {reply}");
                    state = state.apply_move(reply);
                    history.push(reply);
                }
            }
            _ => println!("Invalid move. Enter a playable column from 1 to 7"),
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "play" {
        play_line_mode();
    } else if args.len() > 1 && args[1] == "tui" {
        let mut game = interactive::InteractiveGame::new();
        if let Err(e) = game.run() {
            eprintln!("Terminal error: {e}");
        }
    } else if args.len() > 1 && args[1] == "eval" {
        // Evaluate a position given as a move string.
        let state = if args.len() > 2 {
            match parse_state(&args[2]) {
                Some(s) => s,
                None => return,
            }
        } else {
            GameState::new()
        };

        display_board(&state);
        println!("Evaluation for Red:    {}", evaluate(&state, Player::Red));
        println!(
            "Evaluation for Yellow: {}",
            evaluate(&state, Player::Yellow)
        );
    } else if args.len() > 1 && args[1] == "search" {
        // Search a position: `search [moves] [depth]`.
        let (state, depth) = match parse_search_args(&args[2..]) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Error parsing moves: {e}");
                return;
            }
        };

        display_board(&state);
        println!("Searching to depth {depth}...\n");

        let start = std::time::Instant::now();
        let pruned = alpha_beta(&state, depth, state.turn);
        let pruned_time = start.elapsed();

        let start = std::time::Instant::now();
        let plain = minimax(&state, depth, state.turn);
        let plain_time = start.elapsed();

        match pruned.best_move {
            Some(col) => println!("Best move: column {col}"),
            None => println!("No legal moves available"),
        }
        println!("Score: {}", pruned.score);
        println!(
            "Alpha-beta: {} nodes in {:.3}s",
            pruned.nodes,
            pruned_time.as_secs_f64()
        );
        println!(
            "Minimax:    {} nodes in {:.3}s",
            plain.nodes,
            plain_time.as_secs_f64()
        );
    } else {
        println!("Connect Four engine");
        println!("Commands:");
        println!("  play                   - Play against the engine on stdin");
        println!("  tui                    - Play in the terminal UI");
        println!("  eval [moves]           - Evaluate a position");
        println!("  search [moves] [depth] - Search for the best move");
        println!("\nPositions are move strings of column digits, e.g. '4453'");
    }
}
