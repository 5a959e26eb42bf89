//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use tictactoe::board::{Board, TicTacToe};
use tictactoe::minimax_searcher::SearchContext;

use super::util::millis;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
    #[structopt(short, long)]
    pub board: Board,
    #[structopt(long = "no-alpha-beta")]
    pub no_alpha_beta: bool,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        if let Some(ending) = self.board.game_ending() {
            eprintln!("The game is already over: {:?}", ending);
            std::process::exit(1);
        }

        // Score from the point of view of the side to move
        let game = TicTacToe::new(self.board.to_move());
        let mut search_context = SearchContext::new(!self.no_alpha_beta);

        match search_context.decide(&game, &self.board, self.depth, true) {
            Ok(outcome) => {
                let stats = search_context.stats();
                match outcome.best_move {
                    Some(best_move) => println!("best move: {}", best_move),
                    None => println!("best move: none"),
                }
                println!("score: {}", outcome.score);
                println!("nodes evaluated: {}", stats.nodes_evaluated);
                if let Some(duration) = stats.last_search_duration {
                    println!("time: {:.3} ms", millis(duration));
                }
            }
            Err(err) => {
                eprintln!("Failed to calculate best move: {}", err);
                std::process::exit(1);
            }
        }
    }
}
