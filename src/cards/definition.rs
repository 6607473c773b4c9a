//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card:
//! its type, threat, deck-building flags and stat gates. A definition never
//! changes during a validation pass; decks refer to it by `CardId`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog card.
///
/// The external catalog hands out opaque string ids (UUIDs in practice).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Catalog card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    Character,
    Location,
    Mission,
    Event,
    Power,
    Special,
    Aspect,
    Teamwork,
    Training,
    BasicUniverse,
    AdvancedUniverse,
    AllyUniverse,
}

impl CardType {
    /// Every card type, in catalog order.
    pub const ALL: [CardType; 12] = [
        CardType::Character,
        CardType::Location,
        CardType::Mission,
        CardType::Event,
        CardType::Power,
        CardType::Special,
        CardType::Aspect,
        CardType::Teamwork,
        CardType::Training,
        CardType::BasicUniverse,
        CardType::AdvancedUniverse,
        CardType::AllyUniverse,
    ];

    /// Characters, locations and missions sit outside the draw pile.
    #[must_use]
    pub const fn is_draw_pile(self) -> bool {
        !matches!(self, CardType::Character | CardType::Location | CardType::Mission)
    }

    /// Types whose cards may declare a stat requirement a character must meet.
    #[must_use]
    pub const fn is_stat_gated(self) -> bool {
        matches!(
            self,
            CardType::Power
                | CardType::BasicUniverse
                | CardType::AdvancedUniverse
                | CardType::AllyUniverse
                | CardType::Training
                | CardType::Teamwork
        )
    }

    /// Kebab-case name, as used by the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Character => "character",
            CardType::Location => "location",
            CardType::Mission => "mission",
            CardType::Event => "event",
            CardType::Power => "power",
            CardType::Special => "special",
            CardType::Aspect => "aspect",
            CardType::Teamwork => "teamwork",
            CardType::Training => "training",
            CardType::BasicUniverse => "basic-universe",
            CardType::AdvancedUniverse => "advanced-universe",
            CardType::AllyUniverse => "ally-universe",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four character stats, plus the "any stat" gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Energy,
    Combat,
    BruteForce,
    Intelligence,
    /// Satisfied by a character's highest stat.
    AnyPower,
}

impl StatKind {
    /// Display name used in violation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Energy => "Energy",
            StatKind::Combat => "Combat",
            StatKind::BruteForce => "Brute Force",
            StatKind::Intelligence => "Intelligence",
            StatKind::AnyPower => "Any-Power",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A character's stat line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub energy: i64,
    pub combat: i64,
    pub brute_force: i64,
    pub intelligence: i64,
}

impl Stats {
    /// Create a stat line.
    #[must_use]
    pub const fn new(energy: i64, combat: i64, brute_force: i64, intelligence: i64) -> Self {
        Self {
            energy,
            combat,
            brute_force,
            intelligence,
        }
    }

    /// Value of a single stat. `AnyPower` yields the highest stat.
    #[must_use]
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Energy => self.energy,
            StatKind::Combat => self.combat,
            StatKind::BruteForce => self.brute_force,
            StatKind::Intelligence => self.intelligence,
            StatKind::AnyPower => self
                .energy
                .max(self.combat)
                .max(self.brute_force)
                .max(self.intelligence),
        }
    }
}

/// Minimum stat a deck character must have for a card to be usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRequirement {
    pub stat: StatKind,
    pub value: i64,
}

impl StatRequirement {
    #[must_use]
    pub const fn new(stat: StatKind, value: i64) -> Self {
        Self { stat, value }
    }

    /// Check a character's stats against this requirement.
    #[must_use]
    pub fn is_met_by(&self, stats: &Stats) -> bool {
        stats.get(self.stat) >= self.value
    }
}

/// Static catalog card definition.
///
/// ## Example
///
/// ```
/// use deck_rules::cards::{CardDefinition, CardType};
///
/// let hero = CardDefinition::new("c1", "Leonidas", CardType::Character)
///     .with_threat(18)
///     .with_stats(6, 7, 5, 4);
///
/// assert_eq!(hero.threat_level, Some(18));
/// assert!(hero.is_character());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Catalog type.
    pub card_type: CardType,

    /// Threat contributed by characters and locations.
    #[serde(default)]
    pub threat_level: Option<i64>,

    /// At most one copy of this exact card per deck.
    #[serde(default)]
    pub one_per_deck: bool,

    /// Special card in the mutually exclusive cataclysm group.
    #[serde(default)]
    pub is_cataclysm: bool,

    /// Special card in the mutually exclusive assist group.
    #[serde(default)]
    pub is_assist: bool,

    /// Special card in the mutually exclusive ambush group.
    #[serde(default)]
    pub is_ambush: bool,

    /// Aspect card in the mutually exclusive fortification group.
    #[serde(default)]
    pub is_fortification: bool,

    /// Character that may not share a deck with any other character.
    #[serde(default)]
    pub solo_exclusive: bool,

    /// Never drawn into a practice hand.
    #[serde(default)]
    pub exclude_from_draw: bool,

    /// Character names this card cannot be played alongside.
    #[serde(default)]
    pub unusable_with: Vec<String>,

    /// Stat gate for power/universe/training/teamwork cards.
    #[serde(default)]
    pub stat_requirement: Option<StatRequirement>,

    /// Character stats. Only meaningful for characters.
    #[serde(default)]
    pub stats: Option<Stats>,

    /// Printed stat icons. Empty means the stat gate's stat, if any.
    #[serde(default)]
    pub icons: Vec<StatKind>,
}

impl CardDefinition {
    /// Create a new card definition with no flags set.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            threat_level: None,
            one_per_deck: false,
            is_cataclysm: false,
            is_assist: false,
            is_ambush: false,
            is_fortification: false,
            solo_exclusive: false,
            exclude_from_draw: false,
            unusable_with: Vec::new(),
            stat_requirement: None,
            stats: None,
            icons: Vec::new(),
        }
    }

    /// Set the threat level (builder pattern).
    #[must_use]
    pub fn with_threat(mut self, threat: i64) -> Self {
        self.threat_level = Some(threat);
        self
    }

    /// Set character stats (builder pattern).
    #[must_use]
    pub fn with_stats(
        mut self,
        energy: i64,
        combat: i64,
        brute_force: i64,
        intelligence: i64,
    ) -> Self {
        self.stats = Some(Stats::new(energy, combat, brute_force, intelligence));
        self
    }

    /// Require a character with `value`+ in `stat` (builder pattern).
    #[must_use]
    pub fn requires(mut self, stat: StatKind, value: i64) -> Self {
        self.stat_requirement = Some(StatRequirement::new(stat, value));
        self
    }

    /// Set the printed stat icons (builder pattern).
    #[must_use]
    pub fn with_icons(mut self, icons: impl IntoIterator<Item = StatKind>) -> Self {
        self.icons = icons.into_iter().collect();
        self
    }

    /// Add a character name this card cannot be used with (builder pattern).
    #[must_use]
    pub fn unusable_with(mut self, name: impl Into<String>) -> Self {
        self.unusable_with.push(name.into());
        self
    }

    #[must_use]
    pub fn one_per_deck(mut self) -> Self {
        self.one_per_deck = true;
        self
    }

    #[must_use]
    pub fn cataclysm(mut self) -> Self {
        self.is_cataclysm = true;
        self
    }

    #[must_use]
    pub fn assist(mut self) -> Self {
        self.is_assist = true;
        self
    }

    #[must_use]
    pub fn ambush(mut self) -> Self {
        self.is_ambush = true;
        self
    }

    #[must_use]
    pub fn fortification(mut self) -> Self {
        self.is_fortification = true;
        self
    }

    #[must_use]
    pub fn solo_exclusive(mut self) -> Self {
        self.solo_exclusive = true;
        self
    }

    #[must_use]
    pub fn exclude_from_draw(mut self) -> Self {
        self.exclude_from_draw = true;
        self
    }

    /// Is this a character card?
    #[must_use]
    pub fn is_character(&self) -> bool {
        self.card_type == CardType::Character
    }

    /// Threat, treating a missing value as zero.
    #[must_use]
    pub fn threat(&self) -> i64 {
        self.threat_level.unwrap_or(0)
    }

    /// Stat icons the card shows, `AnyPower` excluded.
    pub fn icon_stats(&self) -> impl Iterator<Item = StatKind> + '_ {
        let gate = if self.icons.is_empty() {
            self.stat_requirement.map(|r| r.stat)
        } else {
            None
        };
        self.icons
            .iter()
            .copied()
            .chain(gate)
            .filter(|stat| *stat != StatKind::AnyPower)
    }
}
