mod cli;

use cli::commands::Command;
use cli::TicTacToeCli;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    tictactoe::instrumentation::init_tracing();

    TicTacToeCli::from_args().execute();

    #[cfg(feature = "instrumentation")]
    tictactoe::instrumentation::print_timing_statistics();
}
