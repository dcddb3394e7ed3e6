//! Canonical collision category definitions
//!
//! Groupings follow the mob classes of the game (see the Minecraft wiki mob
//! list). Order matters: entity resolution returns the first category whose
//! kinds match, so the narrow groups (pets, jockeys, ...) come before the broad
//! mob classes.

use crate::category::Category;
use crate::collision_mode::CollisionMode;
use crate::entity_kind::{kinds, EntityKind};
use crate::mob_category::MobCategory;

const PETS: &[EntityKind] = &[
    kinds::TAMED_WOLF,
    kinds::TAMED_CAT,
    kinds::TAMED_PARROT,
    kinds::TAMED_HORSE,
    kinds::TAMED_DONKEY,
    kinds::TAMED_MULE,
    kinds::TAMED_LLAMA,
];

const JOCKEYS: &[EntityKind] = &[
    kinds::CHICKEN_JOCKEY,
    kinds::SPIDER_JOCKEY,
    kinds::SKELETON_HORSEMAN,
];

const KILLER_BUNNIES: &[EntityKind] = &[kinds::KILLER_BUNNY];

const NPCS: &[EntityKind] = &[kinds::VILLAGER, kinds::WANDERING_TRADER];

const ANIMALS: &[EntityKind] = &[
    kinds::AXOLOTL,
    kinds::CAMEL,
    kinds::CAT,
    kinds::CHICKEN,
    kinds::COW,
    kinds::DONKEY,
    kinds::FOX,
    kinds::FROG,
    kinds::GOAT,
    kinds::HOGLIN,
    kinds::HORSE,
    kinds::LLAMA,
    kinds::MOOSHROOM,
    kinds::MULE,
    kinds::OCELOT,
    kinds::PANDA,
    kinds::PARROT,
    kinds::PIG,
    kinds::POLAR_BEAR,
    kinds::RABBIT,
    kinds::SHEEP,
    kinds::SKELETON_HORSE,
    kinds::SNIFFER,
    kinds::STRIDER,
    kinds::TRADER_LLAMA,
    kinds::TURTLE,
    kinds::WOLF,
];

const MONSTERS: &[EntityKind] = &[
    kinds::BLAZE,
    kinds::CAVE_SPIDER,
    kinds::CREEPER,
    kinds::DROWNED,
    kinds::ELDER_GUARDIAN,
    kinds::ENDERMAN,
    kinds::ENDERMITE,
    kinds::EVOKER,
    kinds::GUARDIAN,
    kinds::HUSK,
    kinds::PIGLIN,
    kinds::PIGLIN_BRUTE,
    kinds::PILLAGER,
    kinds::RAVAGER,
    kinds::SILVERFISH,
    kinds::SKELETON,
    kinds::SPIDER,
    kinds::STRAY,
    kinds::VEX,
    kinds::VINDICATOR,
    kinds::WARDEN,
    kinds::WITCH,
    kinds::WITHER,
    kinds::WITHER_SKELETON,
    kinds::ZOGLIN,
    kinds::ZOMBIE,
    kinds::ZOMBIE_VILLAGER,
    kinds::ZOMBIFIED_PIGLIN,
];

const PASSIVE_MOBS: &[EntityKind] = &[
    kinds::ALLAY,
    kinds::AXOLOTL,
    kinds::BAT,
    kinds::CAMEL,
    kinds::CAT,
    kinds::CHICKEN,
    kinds::COD,
    kinds::COW,
    kinds::DONKEY,
    kinds::FROG,
    kinds::GLOW_SQUID,
    kinds::HORSE,
    kinds::MOOSHROOM,
    kinds::MULE,
    kinds::OCELOT,
    kinds::PARROT,
    kinds::PIG,
    kinds::PUFFERFISH,
    kinds::RABBIT,
    kinds::SALMON,
    kinds::SHEEP,
    kinds::SKELETON_HORSE,
    kinds::SNIFFER,
    kinds::SNOW_GOLEM,
    kinds::SQUID,
    kinds::STRIDER,
    kinds::TADPOLE,
    kinds::TROPICAL_FISH,
    kinds::TURTLE,
    kinds::VILLAGER,
    kinds::WANDERING_TRADER,
];

const NEUTRAL_MOBS: &[EntityKind] = &[
    kinds::BEE,
    kinds::CAVE_SPIDER,
    kinds::DOLPHIN,
    kinds::DROWNED,
    kinds::ENDERMAN,
    kinds::FOX,
    kinds::GOAT,
    kinds::IRON_GOLEM,
    kinds::LLAMA,
    kinds::PANDA,
    kinds::PIGLIN,
    kinds::POLAR_BEAR,
    kinds::SPIDER,
    kinds::TRADER_LLAMA,
    kinds::WOLF,
    kinds::ZOMBIFIED_PIGLIN,
];

const HOSTILE_MOBS: &[EntityKind] = &[
    kinds::BLAZE,
    kinds::CREEPER,
    kinds::ELDER_GUARDIAN,
    kinds::ENDERMITE,
    kinds::EVOKER,
    kinds::GHAST,
    kinds::GUARDIAN,
    kinds::HOGLIN,
    kinds::HUSK,
    kinds::MAGMA_CUBE,
    kinds::PHANTOM,
    kinds::PIGLIN_BRUTE,
    kinds::PILLAGER,
    kinds::RAVAGER,
    kinds::SHULKER,
    kinds::SILVERFISH,
    kinds::SKELETON,
    kinds::SLIME,
    kinds::STRAY,
    kinds::VEX,
    kinds::VINDICATOR,
    kinds::WARDEN,
    kinds::WITCH,
    kinds::WITHER_SKELETON,
    kinds::ZOGLIN,
    kinds::ZOMBIE,
    kinds::ZOMBIE_VILLAGER,
];

const TAMEABLE_MOBS: &[EntityKind] = &[
    kinds::CAT,
    kinds::DONKEY,
    kinds::HORSE,
    kinds::LLAMA,
    kinds::MULE,
    kinds::PARROT,
    kinds::SKELETON_HORSE,
    kinds::TRADER_LLAMA,
    kinds::WOLF,
];

const UTILITY_MOBS: &[EntityKind] = &[kinds::IRON_GOLEM, kinds::SNOW_GOLEM];

const BOSS_MOBS: &[EntityKind] = &[kinds::ENDER_DRAGON, kinds::WITHER];

impl MobCategory {
    /// Entity kinds this canonical category matches
    pub fn entity_kinds(&self) -> &'static [EntityKind] {
        match self {
            MobCategory::Pets => PETS,
            MobCategory::Jockeys => JOCKEYS,
            MobCategory::KillerBunnies => KILLER_BUNNIES,
            MobCategory::Npcs => NPCS,
            MobCategory::Animals => ANIMALS,
            MobCategory::Monsters => MONSTERS,
            MobCategory::PassiveMobs => PASSIVE_MOBS,
            MobCategory::NeutralMobs => NEUTRAL_MOBS,
            MobCategory::HostileMobs => HOSTILE_MOBS,
            MobCategory::TameableMobs => TAMEABLE_MOBS,
            MobCategory::UtilityMobs => UTILITY_MOBS,
            MobCategory::BossMobs => BOSS_MOBS,
        }
    }

    /// Build the catalog entry for this category.
    ///
    /// Aggregate categories are emitted into generated configuration with
    /// [`CollisionMode::Default`]; the narrow groups have no default.
    pub fn definition(&self) -> Category {
        let category = Category::new(self.key(), self.id(), self.plural_id(), self.display_name())
            .with_kinds(self.entity_kinds().iter().copied());

        if self.is_aggregate() {
            category
                .with_default_policy(CollisionMode::Default)
                .in_generated_config()
                .aggregate()
        } else {
            category
        }
    }
}

/// Every canonical category, in catalog order
pub fn canonical_categories() -> Vec<Category> {
    MobCategory::all()
        .iter()
        .map(MobCategory::definition)
        .collect()
}
