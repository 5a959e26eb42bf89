use std::io::BufRead;

use log::debug;

use crate::board::GameEnding;
use crate::game::display::{render_decision, render_summary, GameDisplay};
use crate::game::engine::{Engine, EngineConfig};
use crate::input_handler::{read_input, InputError, MenuInput, MoveInput};

const MOVE_PROMPT: &str = "Enter a move as `row col` (0-2), or `q` to quit:";
const MENU_PROMPT: &str =
    "`r` to play again, `d <easy|normal|hard|impossible>` to change difficulty, `q` to quit:";

/// Console driver for a human-versus-AI session.
pub struct GameLoop<R: BufRead> {
    engine: Engine,
    ui: GameDisplay,
    reader: R,
}

impl<R: BufRead> GameLoop<R> {
    pub fn new(config: EngineConfig, ui: GameDisplay, reader: R) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui,
            reader,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Plays games until the user quits or input runs out, then prints the
    /// session summary.
    pub fn run(&mut self) {
        let mut stats: Option<String> = None;

        loop {
            self.ui.render_game_state(
                self.engine.board(),
                self.engine.difficulty(),
                self.engine.last_move(),
                stats.as_deref(),
            );

            if let Some(ending) = self.engine.check_game_over() {
                match ending {
                    GameEnding::Win(player) if player == self.engine.human_player() => {
                        println!("You win!")
                    }
                    GameEnding::Win(_) => println!("The AI wins!"),
                    GameEnding::Draw => println!("Draw!"),
                }

                if !self.handle_menu() {
                    break;
                }
                stats = None;
                continue;
            }

            if self.engine.is_ai_turn() {
                match self.engine.make_ai_move() {
                    Ok(coordinate) => {
                        stats = self.engine.last_record().map(|record| {
                            format!("AI played {}\n{}", coordinate, render_decision(record))
                        });
                    }
                    Err(error) => {
                        println!("error: {}", error);
                        break;
                    }
                }
                continue;
            }

            println!("{}", MOVE_PROMPT);
            match read_input::<_, MoveInput>(&mut self.reader) {
                Ok(MoveInput::Coordinate(coordinate)) => {
                    match self.engine.make_human_move(coordinate) {
                        Ok(()) => stats = None,
                        Err(error) => stats = Some(format!("error: {}", error)),
                    }
                }
                Ok(MoveInput::Quit) => break,
                Err(InputError::EndOfInput) => break,
                Err(error) => stats = Some(format!("error: {}", error)),
            }
        }

        println!("\n{}", render_summary(self.engine.records()));
    }

    /// Returns `false` when the session should end.
    fn handle_menu(&mut self) -> bool {
        loop {
            println!("{}", MENU_PROMPT);
            match read_input::<_, MenuInput>(&mut self.reader) {
                Ok(MenuInput::StartOver) => {
                    debug!("starting a new game");
                    self.engine.new_game();
                    return true;
                }
                Ok(MenuInput::ChangeDifficulty(difficulty)) => {
                    println!("{}", render_summary(self.engine.records()));
                    self.engine.set_difficulty(difficulty);
                    self.engine.reset();
                    return true;
                }
                Ok(MenuInput::Exit) | Err(InputError::EndOfInput) => return false,
                Err(error) => println!("error: {}", error),
            }
        }
    }
}
