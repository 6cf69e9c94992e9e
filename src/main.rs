use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gearscore::item::Enchantment;
use gearscore::output::ScoredItem;
use gearscore::scoring::{calculate_score, ScoreResult};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List enchantments ranked by power score (default if no subcommand)
    List {
        /// Output tab-separated values instead of a table (for scripting)
        #[arg(long)]
        tsv: bool,
    },
    /// Show one enchantment with its stage-by-stage score breakdown
    Explain {
        /// Rank of the enchantment to explain (1-based, as shown in list)
        index: usize,
    },
    /// Attach scores to stored items that are missing one and save the file
    Backfill,
}

#[derive(Parser, Debug)]
#[command(name = "gearscore")]
#[command(about = "Power-score ranking for community enchantment cards", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the gallery file (defaults to ./enchantments.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Validate a 1-based explain rank against the gallery size.
/// Returns an error message to print, or None if the rank is usable.
fn explain_index_error(index: usize, len: usize) -> Option<String> {
    if len == 0 {
        Some("No enchantments to explain.".to_string())
    } else if index < 1 || index > len {
        Some(format!(
            "Invalid index {}. Must be between 1 and {}.",
            index, len
        ))
    } else {
        None
    }
}

/// Score every item and sort by score descending; older items win ties.
fn rank(items: &[Enchantment]) -> Vec<(&Enchantment, ScoreResult)> {
    let mut ranked: Vec<(&Enchantment, ScoreResult)> = items
        .iter()
        .map(|item| (item, calculate_score(item)))
        .collect();

    ranked.sort_by(|a, b| {
        let score_cmp = b.1.score.cmp(&a.1.score);
        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }
        // Tie-breaker: older first
        a.0.created_at.cmp(&b.0.created_at)
    });

    ranked
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List { tsv: false });
    let path = cli
        .file
        .unwrap_or_else(|| PathBuf::from("enchantments.json"));

    let mut items = match gearscore::gallery::load_items(&path) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Gallery error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} enchantments from {}",
            items.len(),
            path.display()
        );
    }

    match command {
        Commands::Backfill => {
            let filled = gearscore::gallery::backfill_scores(&mut items);
            if filled == 0 {
                println!("All {} enchantments already scored.", items.len());
                std::process::exit(EXIT_SUCCESS);
            }

            if let Err(e) = gearscore::gallery::save_items(&path, &items) {
                eprintln!("Save error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
            println!(
                "Scored {} of {} enchantments, saved to {}.",
                filled,
                items.len(),
                path.display()
            );
        }
        Commands::List { tsv } => {
            let ranked = rank(&items);
            let rows: Vec<ScoredItem> = ranked
                .iter()
                .map(|(item, result)| ScoredItem { item: *item, result })
                .collect();

            if tsv {
                println!("{}", gearscore::output::format_tsv(&rows));
            } else {
                let use_colors = gearscore::output::should_use_colors();
                println!("{}", gearscore::output::format_ranked_table(&rows, use_colors));
            }
        }
        Commands::Explain { index } => {
            let ranked = rank(&items);
            if let Some(message) = explain_index_error(index, ranked.len()) {
                eprintln!("{}", message);
                std::process::exit(EXIT_INPUT);
            }

            let (item, result) = &ranked[index - 1];
            let use_colors = gearscore::output::should_use_colors();
            println!("{}", gearscore::output::format_item_detail(item, use_colors));
            println!("{}", gearscore::output::format_breakdown(result, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
