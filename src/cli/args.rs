//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    analyze::AnalyzeArgs, calculate_best_move::CalculateBestMoveArgs, play::PlayArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "Tic-tac-toe against a minimax opponent with adjustable difficulty"
)]
pub enum TicTacToeCli {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (default: normal). You play X and move first unless you pass `--player o`. Alpha-beta pruning can be disabled with `--no-alpha-beta`, and the computer's random moves can be made reproducible with `--seed`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move for the side to move in a position given in board notation with `--board` (required), e.g. `XO./.X./... o`. The search depth defaults to 9, which solves the game."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "analyze",
        about = "Measure the search cost of every difficulty on a set of fixed positions, and compare node counts with and without alpha-beta pruning at each depth."
    )]
    Analyze(AnalyzeArgs),
}

impl crate::cli::commands::Command for TicTacToeCli {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            CalculateBestMove(cmd),
            Analyze(cmd),
        }
    }
}
