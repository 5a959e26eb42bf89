//! Analyze command - measure search cost per difficulty and the effect of pruning.

use structopt::StructOpt;
use tictactoe::game::analysis::{analyze_difficulties, compare_pruning};
use tictactoe::game::display::render_summary;

use super::util::millis;
use super::Command;

#[derive(StructOpt)]
pub struct AnalyzeArgs {
    #[structopt(long, default_value = "0")]
    pub seed: u64,
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
}

impl Command for AnalyzeArgs {
    fn execute(self) {
        let analysis = match analyze_difficulties(self.seed) {
            Ok(analysis) => analysis,
            Err(err) => {
                eprintln!("Analysis failed: {}", err);
                std::process::exit(1);
            }
        };

        let mut current_position = "";
        for measurement in analysis.measurements.iter() {
            if measurement.position != current_position {
                current_position = measurement.position;
                println!("\nPosition: {}", current_position);
            }
            println!(
                "  {:>10}: {:>6} nodes, {:>8.3} ms, move {}",
                measurement.difficulty.to_string(),
                measurement.nodes_evaluated,
                millis(measurement.elapsed),
                measurement.chosen_move
            );
        }

        println!("\nNodes evaluated from the empty board:");
        println!(
            "{:>6} {:>14} {:>14} {:>10}",
            "depth", "no pruning", "alpha-beta", "saved"
        );
        match compare_pruning(self.depth) {
            Ok(comparisons) => {
                for comparison in comparisons.iter() {
                    println!(
                        "{:>6} {:>14} {:>14} {:>9.1}%",
                        comparison.depth,
                        comparison.nodes_without_pruning,
                        comparison.nodes_with_pruning,
                        comparison.reduction_percent()
                    );
                }
            }
            Err(err) => {
                eprintln!("Pruning comparison failed: {}", err);
                std::process::exit(1);
            }
        }

        println!("\n{}", render_summary(&analysis.records));
    }
}
