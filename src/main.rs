use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use log::{info, Level};

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_agent::{
    arrayboard::{ArrayBoard, GameState},
    config::AgentConfig,
    solver::Solver,
    Player,
};

/// Which players the agent controls
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum AiPlayers {
    None,
    One,
    Two,
    Both,
}

impl AiPlayers {
    fn controls(self, player: Player) -> bool {
        match self {
            AiPlayers::None => false,
            AiPlayers::One => player == Player::One,
            AiPlayers::Two => player == Player::Two,
            AiPlayers::Both => true,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Connect 4 against a minimax agent", long_about = None)]
struct Args {
    /// Search depth in plies, overrides the config file
    #[arg(long)]
    depth: Option<i32>,

    /// Agent configuration file, defaults are used if it does not exist
    #[arg(long, default_value = "agent.toml")]
    config: PathBuf,

    /// Players controlled by the agent
    #[arg(long, value_enum, default_value_t = AiPlayers::Two)]
    ai: AiPlayers,

    /// Starting position as 1-indexed column digits, e.g. "4453"
    #[arg(long, default_value = "")]
    moves: String,

    /// Log search diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::init_with_level(if args.verbose {
        Level::Debug
    } else {
        Level::Info
    })?;

    let mut config = AgentConfig::load_or_default(&args.config)?;
    if let Some(depth) = args.depth {
        config.depth = depth;
        config.validate()?;
    }
    info!("searching {} plies deep", config.depth);

    let mut board = ArrayBoard::from_moves(&args.moves)?;
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        board.display()?;

        match board.state {
            GameState::Playing => {
                let player = board.next_player();
                let next_move =
                    // AI player
                    if args.ai.controls(player) {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_message("AI is thinking...");
                        spinner.enable_steady_tick(100);

                        let mut solver = Solver::new(player).with_weights(config.weights.clone());
                        let best_move = solver.choose_move(&board, config.depth);
                        spinner.finish_and_clear();

                        let best_move = best_move?;
                        println!("Best move: {}", best_move + 1);
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            println!("\nInput closed, leaving the game");
                            break;
                        }

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = board.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won(Player::One) => {
                println!("Player 1 wins!");
                break;
            }
            GameState::Won(Player::Two) => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
