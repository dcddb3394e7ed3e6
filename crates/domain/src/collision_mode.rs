//! Collision modes a vehicle can apply to an entity it runs into
//!
//! Aggregate categories carry one of these as their default. The registry
//! stores and hands them back without looking inside.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

/// What happens when a minecart collides with an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// Vanilla behaviour for the entity
    #[default]
    Default,
    /// Pushes the entity out of the way
    Push,
    /// Stops the cart before it hits the entity
    Cancel,
    /// Kills the entity, dropping its loot
    Kill,
    /// Kills the entity without drops
    KillNoDrops,
    /// Lets the entity board the cart
    Enter,
    /// Links the cart to the entity's train
    Link,
    /// Passes through the entity
    Skip,
    /// Damages the entity, dropping loot on death
    Damage,
    /// Damages the entity without drops
    DamageNoDrops,
    /// Unloads the train on contact
    Unload,
}

impl CollisionMode {
    /// Get all collision modes, in configuration order
    pub fn all() -> &'static [CollisionMode] {
        &[
            CollisionMode::Default,
            CollisionMode::Push,
            CollisionMode::Cancel,
            CollisionMode::Kill,
            CollisionMode::KillNoDrops,
            CollisionMode::Enter,
            CollisionMode::Link,
            CollisionMode::Skip,
            CollisionMode::Damage,
            CollisionMode::DamageNoDrops,
            CollisionMode::Unload,
        ]
    }

    /// Token used in configuration files
    pub fn config_name(&self) -> &'static str {
        match self {
            CollisionMode::Default => "default",
            CollisionMode::Push => "push",
            CollisionMode::Cancel => "cancel",
            CollisionMode::Kill => "kill",
            CollisionMode::KillNoDrops => "killnodrops",
            CollisionMode::Enter => "enter",
            CollisionMode::Link => "link",
            CollisionMode::Skip => "skip",
            CollisionMode::Damage => "damage",
            CollisionMode::DamageNoDrops => "damagenodrops",
            CollisionMode::Unload => "unload",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CollisionMode::Default => "Default",
            CollisionMode::Push => "Push",
            CollisionMode::Cancel => "Cancel",
            CollisionMode::Kill => "Kill",
            CollisionMode::KillNoDrops => "Kill (no drops)",
            CollisionMode::Enter => "Enter",
            CollisionMode::Link => "Link",
            CollisionMode::Skip => "Skip",
            CollisionMode::Damage => "Damage",
            CollisionMode::DamageNoDrops => "Damage (no drops)",
            CollisionMode::Unload => "Unload",
        }
    }
}

impl fmt::Display for CollisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for CollisionMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        CollisionMode::all()
            .iter()
            .copied()
            .find(|mode| mode.config_name() == token)
            .ok_or_else(|| ParseError::unknown("collision mode", s))
    }
}
