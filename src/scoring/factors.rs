/// Keyword weights for the text scan. Each keyword present anywhere in the
/// lowercase analysis text adds its value once; repeats don't stack.
/// Matching is substring, not whole-word, to stay compatible with scores
/// already attached to stored items.
pub const KEYWORD_WEIGHTS: &[(&str, f64)] = &[
    ("damage", 20.0),
    ("heal", 20.0),
    ("stun", 50.0), // CC is expensive
    ("silence", 40.0),
    ("immune", 100.0), // Immunity is very strong
    ("invulnerable", 100.0),
    ("kill", 50.0),
    ("destroy", 40.0),
    ("summon", 60.0),
    ("shockwave", 30.0),
    ("critical", 25.0),
    ("speed", 20.0),
];

/// Always-on effects ("Passive Effect"/"Aura") are worth more than
/// conditional procs with partial uptime.
pub const UPTIME_MULTIPLIER: f64 = 1.1;

/// Extract every maximal integer-or-decimal substring from `text`, in
/// left-to-right scan order. "300" -> 300, "10.5%" -> 10.5. A dot not
/// followed by a digit ends the number, so "1.2.3" yields [1.2, 3.0].
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // Optional fractional part: a dot counts only if a digit follows
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        if let Ok(n) = text[start..i].parse::<f64>() {
            numbers.push(n);
        }
    }

    numbers
}

/// Score contribution of a single extracted number.
///
/// Magnitude is the only signal: raw stats usually land in the hundreds,
/// percentages and durations in 1-100. Large numbers are dampened, small
/// ones weighted up. No unit parsing: "150 Strength" and "150%" score
/// the same on purpose, to keep scores comparable with stored values.
pub fn number_weight(n: f64) -> f64 {
    if n > 100.0 {
        n * 0.15
    } else if n > 0.0 {
        n * 1.5
    } else {
        0.0
    }
}
