use std::io::IsTerminal;

use chrono::Duration;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::item::{Enchantment, Rarity};
use crate::scoring::ScoreResult;

/// An item paired with its computed score for display
pub struct ScoredItem<'a> {
    pub item: &'a Enchantment,
    pub result: &'a ScoreResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Rarity-tinted item name, matching the gallery's color scheme
fn colorize_name(name: &str, rarity: &Rarity) -> String {
    match rarity {
        Rarity::Legendary => name.yellow().to_string(),
        Rarity::Epic => name.magenta().to_string(),
        Rarity::Rare => name.blue().to_string(),
        Rarity::Common | Rarity::Other(_) => name.to_string(),
    }
}

/// Format age compactly: "3d", "5h", "12m", "now"
pub fn format_age(age: Duration) -> String {
    if age.num_days() >= 1 {
        format!("{}d", age.num_days())
    } else if age.num_hours() >= 1 {
        format!("{}h", age.num_hours())
    } else if age.num_minutes() >= 1 {
        format!("{}m", age.num_minutes())
    } else {
        "now".to_string()
    }
}

/// Format items as a ranked table: index, score, name, slot, author.
/// No headers; one line per item.
pub fn format_ranked_table(items: &[ScoredItem], use_colors: bool) -> String {
    if items.is_empty() {
        return "No enchantments found.".to_string();
    }

    let term_width = get_terminal_width();

    // Index column: 3 chars + 1 space = 4
    // Score column: 5 chars + 2 spaces (fits "99999")
    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    items
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", scored.result.score, width = score_width);
            let slot = scored.item.slot.label();
            let author = scored.item.author.as_str();

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 3 + slot.len() + author.len();

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&scored.item.name, width - fixed_width)
                } else {
                    truncate_name(&scored.item.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.item.name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    colorize_name(&name, &scored.item.rarity),
                    separator,
                    slot.cyan(),
                    separator,
                    author.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, slot, separator, author
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one item with full detail (for the explain view)
pub fn format_item_detail(item: &Enchantment, use_colors: bool) -> String {
    let age = format_age(item.age());
    let effects = if item.effects.is_empty() {
        "(none)".to_string()
    } else {
        item.effects
            .iter()
            .map(|e| format!("    - {}", e))
            .collect::<Vec<_>>()
            .join("\n")
    };

    if use_colors {
        format!(
            "{}\n  Rarity: {}\n  Slot: {}\n  Type: {}\n  Trigger: {}\n  Effects:\n{}\n  Author: {}\n  Age: {}\n  Stats: {} likes / {} views / {} downloads",
            colorize_name(&item.name, &item.rarity).bold(),
            item.rarity.label(),
            item.slot.label().cyan(),
            item.kind,
            item.trigger,
            effects,
            item.author.yellow(),
            age,
            item.stats.likes,
            item.stats.views,
            item.stats.downloads
        )
    } else {
        format!(
            "{}\n  Rarity: {}\n  Slot: {}\n  Type: {}\n  Trigger: {}\n  Effects:\n{}\n  Author: {}\n  Age: {}\n  Stats: {} likes / {} views / {} downloads",
            item.name,
            item.rarity.label(),
            item.slot.label(),
            item.kind,
            item.trigger,
            effects,
            item.author,
            age,
            item.stats.likes,
            item.stats.views,
            item.stats.downloads
        )
    }
}

/// Format a score breakdown, one line per factor
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for factor in &result.breakdown.factors {
        // Pad before styling so escape codes don't skew the columns
        let label = format!("{:<18}", factor.label);
        let values = format!(
            "{:<28} {:>8.2} -> {:.2}",
            factor.description, factor.before, factor.after
        );
        let line = if use_colors {
            format!("  {} {}", label.cyan(), values)
        } else {
            format!("  {} {}", label, values)
        };
        lines.push(line);
    }
    let total = format!("  Score: {}", result.score);
    if use_colors {
        lines.push(total.bold().to_string());
    } else {
        lines.push(total);
    }
    lines.join("\n")
}

/// Format items as tab-separated values for scripting
/// Columns: score, name, rarity, slot, author (no headers, no colors)
pub fn format_tsv(items: &[ScoredItem]) -> String {
    items
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                scored.result.score,
                scored.item.name,
                scored.item.rarity.label(),
                scored.item.slot.label(),
                scored.item.author
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemStats, Slot};
    use crate::scoring::calculate_score;

    fn sample_item(name: &str) -> Enchantment {
        Enchantment {
            id: "t".to_string(),
            name: name.to_string(),
            slot: Slot::Weapon,
            rarity: Rarity::Legendary,
            kind: "On Use".to_string(),
            cost: String::new(),
            trigger: String::new(),
            flavor_text: String::new(),
            effects: vec!["Deal 40 damage".to_string()],
            icon_url: None,
            author: "tester".to_string(),
            stats: ItemStats::default(),
            created_at: 0,
            item_score: None,
            is_liked: None,
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_ranked_table(&[], false), "No enchantments found.");
    }

    #[test]
    fn test_table_line_contains_fields() {
        let item = sample_item("Doombringer");
        let result = calculate_score(&item);
        let rows = [ScoredItem {
            item: &item,
            result: &result,
        }];
        let out = format_ranked_table(&rows, false);
        assert!(out.contains("Doombringer"));
        assert!(out.contains("Weapon"));
        assert!(out.contains("tester"));
        assert!(out.contains(&result.score.to_string()));
    }

    #[test]
    fn test_truncate_name_unicode_safe() {
        assert_eq!(truncate_name("short", 20), "short");
        assert_eq!(truncate_name("a very long enchantment name", 10), "a very ...");
        // Multibyte chars must not split
        let name = "Klinge der Dämmerung";
        let truncated = truncate_name(name, 12);
        assert!(truncated.chars().count() <= 12);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::days(3)), "3d");
        assert_eq!(format_age(Duration::hours(5)), "5h");
        assert_eq!(format_age(Duration::minutes(12)), "12m");
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }

    #[test]
    fn test_tsv_one_line_per_item() {
        let a = sample_item("Alpha");
        let b = sample_item("Beta");
        let ra = calculate_score(&a);
        let rb = calculate_score(&b);
        let rows = [
            ScoredItem {
                item: &a,
                result: &ra,
            },
            ScoredItem {
                item: &b,
                result: &rb,
            },
        ];
        let out = format_tsv(&rows);
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with(&ra.score.to_string()));
    }

    #[test]
    fn test_breakdown_lists_factors_and_total() {
        let item = sample_item("Doombringer");
        let result = calculate_score(&item);
        let out = format_breakdown(&result, false);
        assert!(out.contains("Rarity"));
        assert!(out.contains("Keyword: damage"));
        assert!(out.contains(&format!("Score: {}", result.score)));
        // No-color output stays free of escape codes
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_breakdown_colors_factor_labels() {
        let item = sample_item("Doombringer");
        let result = calculate_score(&item);
        let plain = format_breakdown(&result, false);
        let colored = format_breakdown(&result, true);
        assert_ne!(plain, colored);
        // Every factor line carries a styled label, not just the total
        let styled_lines = colored
            .lines()
            .filter(|l| l.contains('\u{1b}'))
            .count();
        assert_eq!(styled_lines, colored.lines().count());
    }
}
