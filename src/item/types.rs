use serde::{Deserialize, Serialize};

/// Rarity tier of an enchantment. Drives the baseline score.
///
/// Stored items carry the tier as a plain string. Anything we don't
/// recognize lands in `Other` with the source text intact, scores a
/// minimal baseline, and round-trips back to the file unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Other(String),
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Common" => Rarity::Common,
            "Rare" => Rarity::Rare,
            "Epic" => Rarity::Epic,
            "Legendary" => Rarity::Legendary,
            _ => Rarity::Other(s),
        }
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.label().to_string()
    }
}

impl Rarity {
    /// Baseline score for this tier, before any text analysis.
    pub fn base_score(&self) -> f64 {
        match self {
            Rarity::Legendary => 400.0,
            Rarity::Epic => 250.0,
            Rarity::Rare => 150.0,
            Rarity::Common => 50.0,
            Rarity::Other(_) => 10.0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Other(s) => s,
        }
    }
}

/// Equipment slot the enchantment binds to.
///
/// Unrecognized slots fall through to `Other` (source text preserved)
/// and take the neutral multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Slot {
    Weapon,
    Chest,
    Head,
    Legs,
    Hands,
    Ring,
    Trinket,
    Other(String),
}

impl From<String> for Slot {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Weapon" => Slot::Weapon,
            "Chest" => Slot::Chest,
            "Head" => Slot::Head,
            "Legs" => Slot::Legs,
            "Hands" => Slot::Hands,
            "Ring" => Slot::Ring,
            "Trinket" => Slot::Trinket,
            _ => Slot::Other(s),
        }
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.label().to_string()
    }
}

impl Slot {
    /// Stat-budget multiplier, applied to the whole accumulated score.
    /// Weapons and body armor carry more budget in most RPGs; trinkets
    /// are strong but situational.
    pub fn budget_multiplier(&self) -> f64 {
        match self {
            Slot::Weapon => 1.25,
            Slot::Chest | Slot::Legs => 1.15,
            Slot::Trinket => 1.1,
            Slot::Head | Slot::Hands | Slot::Ring | Slot::Other(_) => 1.0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Slot::Weapon => "Weapon",
            Slot::Chest => "Chest",
            Slot::Head => "Head",
            Slot::Legs => "Legs",
            Slot::Hands => "Hands",
            Slot::Ring => "Ring",
            Slot::Trinket => "Trinket",
            Slot::Other(s) => s,
        }
    }
}

/// Like/view/download counters attached by the gallery.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemStats {
    pub likes: u64,
    pub views: u64,
    pub downloads: u64,
}

/// A community-authored enchantment card, as stored in the gallery file.
///
/// Field names mirror the stored JSON (camelCase). `item_score` is a
/// derived value: a pure function of the other fields, recomputable at
/// any time, and only cached here so the gallery can sort without
/// rescoring.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enchantment {
    pub id: String,
    pub name: String,
    pub slot: Slot,
    pub rarity: Rarity,
    /// Effect-timing classifier ("Passive Effect", "Aura", "On Use", ...).
    /// Free-form; only the two always-on values get special treatment.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub author: String,
    #[serde(default)]
    pub stats: ItemStats,
    /// Creation time as epoch milliseconds.
    pub created_at: i64,
    /// Cached power score. `None` for items stored before scoring existed;
    /// the backfill pass fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_score: Option<u32>,
    /// Local user state, not part of the shared record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

impl Enchantment {
    /// The text the scoring engine analyzes: every effect line, then the
    /// trigger, joined with spaces and lowercased. Order matters for
    /// extraction but not for the resulting score.
    pub fn analysis_text(&self) -> String {
        let mut parts: Vec<&str> = self.effects.iter().map(String::as_str).collect();
        parts.push(&self.trigger);
        parts.join(" ").to_lowercase()
    }

    /// Whether the effect is always active rather than a conditional proc.
    /// Exact-match on the two classifier values the gallery uses.
    pub fn is_always_on(&self) -> bool {
        self.kind == "Passive Effect" || self.kind == "Aura"
    }

    pub fn age(&self) -> chrono::Duration {
        let created = chrono::DateTime::from_timestamp_millis(self.created_at)
            .unwrap_or_else(chrono::Utc::now);
        chrono::Utc::now() - created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "abc123",
            "name": "Band of Echoes",
            "slot": "Ring",
            "rarity": "Epic",
            "type": "Passive Effect",
            "cost": "1200g",
            "trigger": "Always Active",
            "flavorText": "It hums when danger is near.",
            "effects": ["Grants 50 Haste", "Reduces damage taken by 5%"],
            "author": "mira",
            "stats": { "likes": 4, "views": 120, "downloads": 9 },
            "createdAt": 1735689600000
        }"#
    }

    #[test]
    fn test_deserialize_stored_record() {
        let item: Enchantment = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.rarity, Rarity::Epic);
        assert_eq!(item.slot, Slot::Ring);
        assert_eq!(item.kind, "Passive Effect");
        assert_eq!(item.effects.len(), 2);
        assert_eq!(item.stats.views, 120);
        assert!(item.item_score.is_none());
    }

    #[test]
    fn test_unknown_rarity_and_slot_fall_through() {
        let json = r#"{
            "id": "x", "name": "Oddity", "slot": "Belt", "rarity": "Mythic",
            "type": "On Use", "author": "nb", "createdAt": 0
        }"#;
        let item: Enchantment = serde_json::from_str(json).unwrap();
        assert_eq!(item.rarity, Rarity::Other("Mythic".to_string()));
        assert_eq!(item.slot, Slot::Other("Belt".to_string()));
        assert_eq!(item.rarity.base_score(), 10.0);
        assert_eq!(item.slot.budget_multiplier(), 1.0);
    }

    #[test]
    fn test_unrecognized_strings_round_trip_unchanged() {
        // The gallery file is shared; rewriting it must never rewrite
        // another client's rarity or slot vocabulary
        let json = r#"{
            "id": "x", "name": "Oddity", "slot": "Belt", "rarity": "Mythic",
            "type": "On Use", "author": "nb", "createdAt": 0
        }"#;
        let item: Enchantment = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"rarity\":\"Mythic\""));
        assert!(out.contains("\"slot\":\"Belt\""));
    }

    #[test]
    fn test_analysis_text_joins_effects_then_trigger() {
        let item: Enchantment = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            item.analysis_text(),
            "grants 50 haste reduces damage taken by 5% always active"
        );
    }

    #[test]
    fn test_always_on_is_exact_match() {
        let mut item: Enchantment = serde_json::from_str(sample_json()).unwrap();
        assert!(item.is_always_on());
        item.kind = "Aura".to_string();
        assert!(item.is_always_on());
        item.kind = "passive effect".to_string(); // Case matters
        assert!(!item.is_always_on());
        item.kind = "On Use".to_string();
        assert!(!item.is_always_on());
    }

    #[test]
    fn test_serialize_uses_stored_field_names() {
        let item: Enchantment = serde_json::from_str(sample_json()).unwrap();
        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"type\":\"Passive Effect\""));
        assert!(out.contains("\"rarity\":\"Epic\""));
        assert!(out.contains("\"flavorText\""));
        assert!(out.contains("\"createdAt\""));
        // No score yet, so the derived field is absent
        assert!(!out.contains("itemScore"));
    }

    #[test]
    fn test_slot_multiplier_table() {
        assert_eq!(Slot::Weapon.budget_multiplier(), 1.25);
        assert_eq!(Slot::Chest.budget_multiplier(), 1.15);
        assert_eq!(Slot::Legs.budget_multiplier(), 1.15);
        assert_eq!(Slot::Trinket.budget_multiplier(), 1.1);
        assert_eq!(Slot::Head.budget_multiplier(), 1.0);
        assert_eq!(Slot::Hands.budget_multiplier(), 1.0);
        assert_eq!(Slot::Ring.budget_multiplier(), 1.0);
    }

    #[test]
    fn test_rarity_base_table() {
        assert_eq!(Rarity::Legendary.base_score(), 400.0);
        assert_eq!(Rarity::Epic.base_score(), 250.0);
        assert_eq!(Rarity::Rare.base_score(), 150.0);
        assert_eq!(Rarity::Common.base_score(), 50.0);
        assert_eq!(Rarity::Other("Mythic".to_string()).base_score(), 10.0);
    }
}
