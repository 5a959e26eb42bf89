//! Play command - play a game against the computer.

use structopt::StructOpt;
use tictactoe::board::Player;
use tictactoe::difficulty::Difficulty;
use tictactoe::game::display::GameDisplay;
use tictactoe::game::r#loop::GameLoop;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "normal")]
    pub difficulty: Difficulty,
    #[structopt(short, long, default_value = "x")]
    pub player: Player,
    #[structopt(long = "no-alpha-beta")]
    pub no_alpha_beta: bool,
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut config = create_config(self.difficulty, !self.no_alpha_beta, self.seed);
        config.human_player = self.player;

        let stdin = std::io::stdin();
        let mut game = GameLoop::new(config, GameDisplay::new(), stdin.lock());
        game.run();
    }
}
