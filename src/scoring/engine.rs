use super::factors::{extract_numbers, number_weight, KEYWORD_WEIGHTS, UPTIME_MULTIPLIER};
use crate::item::Enchantment;

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Rarity", "Keyword: stun", "Slot"
    pub description: String, // e.g. "Epic baseline", "matched 'stun' -> +50"
    pub before: f64,         // Score before this factor
    pub after: f64,          // Score after this factor
}

#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Compute the power score for one enchantment.
///
/// Pure and total: never fails, reads only the item's fields, and returns
/// the same integer for the same input every time. Unrecognized rarity or
/// slot values take their documented defaults rather than erroring.
///
/// Pipeline: rarity baseline, then additive weight for every number and
/// keyword found in the effect/trigger text, then the always-on multiplier,
/// then the slot budget multiplier over the whole total, floored to an
/// integer.
pub fn calculate_score(item: &Enchantment) -> ScoreResult {
    let base_score = item.rarity.base_score();
    let mut score = base_score;
    let mut factors = vec![FactorContribution {
        label: "Rarity".to_string(),
        description: format!("{} baseline", item.rarity.label()),
        before: 0.0,
        after: score,
    }];

    let text = item.analysis_text();

    // Every number in the text contributes independently; magnitude alone
    // decides the weight (raw stats dampened, percentages weighted up)
    for n in extract_numbers(&text) {
        let bonus = number_weight(n);
        if bonus == 0.0 {
            continue;
        }
        let before = score;
        score += bonus;
        factors.push(FactorContribution {
            label: "Number".to_string(),
            description: format!("{} -> {:+.2}", n, bonus),
            before,
            after: score,
        });
    }

    // Keyword presence is boolean: a keyword adds its weight once no matter
    // how often it appears
    for (word, value) in KEYWORD_WEIGHTS {
        if text.contains(word) {
            let before = score;
            score += value;
            factors.push(FactorContribution {
                label: format!("Keyword: {}", word),
                description: format!("matched '{}' -> {:+}", word, value),
                before,
                after: score,
            });
        }
    }

    // Always-on effects get full uptime; conditional procs don't
    if item.is_always_on() {
        let before = score;
        score *= UPTIME_MULTIPLIER;
        factors.push(FactorContribution {
            label: "Uptime".to_string(),
            description: format!("'{}' is always on -> x{}", item.kind, UPTIME_MULTIPLIER),
            before,
            after: score,
        });
    }

    // Slot budget multiplier applies to the entire accumulated score
    let multiplier = item.slot.budget_multiplier();
    if multiplier != 1.0 {
        let before = score;
        score *= multiplier;
        factors.push(FactorContribution {
            label: "Slot".to_string(),
            description: format!("{} -> x{}", item.slot.label(), multiplier),
            before,
            after: score,
        });
    }

    ScoreResult {
        score: score.floor().max(0.0) as u32,
        breakdown: ScoreBreakdown {
            base_score,
            factors,
        },
    }
}
