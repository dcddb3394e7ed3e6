//! Typed names for the canonical collision categories

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

/// One variant per entry of the canonical catalog, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobCategory {
    Pets,
    Jockeys,
    KillerBunnies,
    Npcs,
    Animals,
    Monsters,
    PassiveMobs,
    NeutralMobs,
    HostileMobs,
    TameableMobs,
    UtilityMobs,
    BossMobs,
}

impl MobCategory {
    /// All canonical categories in catalog order
    pub fn all() -> &'static [MobCategory] {
        &[
            MobCategory::Pets,
            MobCategory::Jockeys,
            MobCategory::KillerBunnies,
            MobCategory::Npcs,
            MobCategory::Animals,
            MobCategory::Monsters,
            MobCategory::PassiveMobs,
            MobCategory::NeutralMobs,
            MobCategory::HostileMobs,
            MobCategory::TameableMobs,
            MobCategory::UtilityMobs,
            MobCategory::BossMobs,
        ]
    }

    /// Programmatic catalog key
    pub fn key(&self) -> &'static str {
        match self {
            MobCategory::Pets => "PETS",
            MobCategory::Jockeys => "JOCKEYS",
            MobCategory::KillerBunnies => "KILLER_BUNNIES",
            MobCategory::Npcs => "NPCS",
            MobCategory::Animals => "ANIMALS",
            MobCategory::Monsters => "MONSTERS",
            MobCategory::PassiveMobs => "PASSIVE_MOBS",
            MobCategory::NeutralMobs => "NEUTRAL_MOBS",
            MobCategory::HostileMobs => "HOSTILE_MOBS",
            MobCategory::TameableMobs => "TAMEABLE_MOBS",
            MobCategory::UtilityMobs => "UTILITY_MOBS",
            MobCategory::BossMobs => "BOSS_MOBS",
        }
    }

    /// Configuration identifier
    pub fn id(&self) -> &'static str {
        match self {
            MobCategory::Pets => "pet",
            MobCategory::Jockeys => "jockey",
            MobCategory::KillerBunnies => "killer_bunny",
            MobCategory::Npcs => "npc",
            MobCategory::Animals => "animal",
            MobCategory::Monsters => "monster",
            MobCategory::PassiveMobs => "passive",
            MobCategory::NeutralMobs => "neutral",
            MobCategory::HostileMobs => "hostile",
            MobCategory::TameableMobs => "tameable",
            MobCategory::UtilityMobs => "utility",
            MobCategory::BossMobs => "boss",
        }
    }

    pub fn plural_id(&self) -> &'static str {
        match self {
            MobCategory::Pets => "pets",
            MobCategory::Jockeys => "jockeys",
            MobCategory::KillerBunnies => "killer_bunnies",
            MobCategory::Npcs => "npcs",
            MobCategory::Animals => "animals",
            MobCategory::Monsters => "monsters",
            MobCategory::PassiveMobs => "passives",
            MobCategory::NeutralMobs => "neutrals",
            MobCategory::HostileMobs => "hostiles",
            MobCategory::TameableMobs => "tameables",
            MobCategory::UtilityMobs => "utilities",
            MobCategory::BossMobs => "bosses",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MobCategory::Pets => "Pets",
            MobCategory::Jockeys => "Jockeys",
            MobCategory::KillerBunnies => "Killer Bunnies",
            MobCategory::Npcs => "NPCs",
            MobCategory::Animals => "Animals",
            MobCategory::Monsters => "Monsters",
            MobCategory::PassiveMobs => "Passive Mobs",
            MobCategory::NeutralMobs => "Neutral Mobs",
            MobCategory::HostileMobs => "Hostile Mobs",
            MobCategory::TameableMobs => "Tameable Mobs",
            MobCategory::UtilityMobs => "Utility Mobs",
            MobCategory::BossMobs => "Boss Mobs",
        }
    }

    /// Whether this is a whole class of mobs (passive, hostile, ...)
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            MobCategory::PassiveMobs
                | MobCategory::NeutralMobs
                | MobCategory::HostileMobs
                | MobCategory::TameableMobs
                | MobCategory::UtilityMobs
                | MobCategory::BossMobs
        )
    }
}

impl fmt::Display for MobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for MobCategory {
    type Err = ParseError;

    /// Accepts either the catalog key (`HOSTILE_MOBS`) or the id (`hostile`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MobCategory::all()
            .iter()
            .copied()
            .find(|category| category.key() == s || category.id() == s)
            .ok_or_else(|| ParseError::unknown("mob category", s))
    }
}
