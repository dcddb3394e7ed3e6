//! Entity kind markers
//!
//! An [`EntityKind`] names one concrete kind of game entity (`zombie`), or a
//! variant of one that the host classifier knows how to recognise
//! (`tamed_wolf`, `chicken_jockey`). Categories match entities through sets of
//! these markers.

use serde::Serialize;
use std::fmt;

/// Opaque marker for a kind of game entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityKind(&'static str);

impl EntityKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Kind markers used by the canonical catalog
pub mod kinds {
    use super::EntityKind;

    // === Tamed state variants ===
    pub const TAMED_WOLF: EntityKind = EntityKind::new("tamed_wolf");
    pub const TAMED_CAT: EntityKind = EntityKind::new("tamed_cat");
    pub const TAMED_PARROT: EntityKind = EntityKind::new("tamed_parrot");
    pub const TAMED_HORSE: EntityKind = EntityKind::new("tamed_horse");
    pub const TAMED_DONKEY: EntityKind = EntityKind::new("tamed_donkey");
    pub const TAMED_MULE: EntityKind = EntityKind::new("tamed_mule");
    pub const TAMED_LLAMA: EntityKind = EntityKind::new("tamed_llama");

    // === Mounted variants ===
    pub const CHICKEN_JOCKEY: EntityKind = EntityKind::new("chicken_jockey");
    pub const SPIDER_JOCKEY: EntityKind = EntityKind::new("spider_jockey");
    pub const SKELETON_HORSEMAN: EntityKind = EntityKind::new("skeleton_horseman");
    pub const KILLER_BUNNY: EntityKind = EntityKind::new("killer_bunny");

    // === Passive ===
    pub const ALLAY: EntityKind = EntityKind::new("allay");
    pub const AXOLOTL: EntityKind = EntityKind::new("axolotl");
    pub const BAT: EntityKind = EntityKind::new("bat");
    pub const CAMEL: EntityKind = EntityKind::new("camel");
    pub const CAT: EntityKind = EntityKind::new("cat");
    pub const CHICKEN: EntityKind = EntityKind::new("chicken");
    pub const COD: EntityKind = EntityKind::new("cod");
    pub const COW: EntityKind = EntityKind::new("cow");
    pub const DONKEY: EntityKind = EntityKind::new("donkey");
    pub const FROG: EntityKind = EntityKind::new("frog");
    pub const GLOW_SQUID: EntityKind = EntityKind::new("glow_squid");
    pub const HORSE: EntityKind = EntityKind::new("horse");
    pub const MOOSHROOM: EntityKind = EntityKind::new("mooshroom");
    pub const MULE: EntityKind = EntityKind::new("mule");
    pub const OCELOT: EntityKind = EntityKind::new("ocelot");
    pub const PARROT: EntityKind = EntityKind::new("parrot");
    pub const PIG: EntityKind = EntityKind::new("pig");
    pub const PUFFERFISH: EntityKind = EntityKind::new("pufferfish");
    pub const RABBIT: EntityKind = EntityKind::new("rabbit");
    pub const SALMON: EntityKind = EntityKind::new("salmon");
    pub const SHEEP: EntityKind = EntityKind::new("sheep");
    pub const SKELETON_HORSE: EntityKind = EntityKind::new("skeleton_horse");
    pub const SNIFFER: EntityKind = EntityKind::new("sniffer");
    pub const SNOW_GOLEM: EntityKind = EntityKind::new("snow_golem");
    pub const SQUID: EntityKind = EntityKind::new("squid");
    pub const STRIDER: EntityKind = EntityKind::new("strider");
    pub const TADPOLE: EntityKind = EntityKind::new("tadpole");
    pub const TROPICAL_FISH: EntityKind = EntityKind::new("tropical_fish");
    pub const TURTLE: EntityKind = EntityKind::new("turtle");
    pub const VILLAGER: EntityKind = EntityKind::new("villager");
    pub const WANDERING_TRADER: EntityKind = EntityKind::new("wandering_trader");

    // === Neutral ===
    pub const BEE: EntityKind = EntityKind::new("bee");
    pub const CAVE_SPIDER: EntityKind = EntityKind::new("cave_spider");
    pub const DOLPHIN: EntityKind = EntityKind::new("dolphin");
    pub const DROWNED: EntityKind = EntityKind::new("drowned");
    pub const ENDERMAN: EntityKind = EntityKind::new("enderman");
    pub const FOX: EntityKind = EntityKind::new("fox");
    pub const GOAT: EntityKind = EntityKind::new("goat");
    pub const IRON_GOLEM: EntityKind = EntityKind::new("iron_golem");
    pub const LLAMA: EntityKind = EntityKind::new("llama");
    pub const PANDA: EntityKind = EntityKind::new("panda");
    pub const PIGLIN: EntityKind = EntityKind::new("piglin");
    pub const POLAR_BEAR: EntityKind = EntityKind::new("polar_bear");
    pub const SPIDER: EntityKind = EntityKind::new("spider");
    pub const TRADER_LLAMA: EntityKind = EntityKind::new("trader_llama");
    pub const WOLF: EntityKind = EntityKind::new("wolf");
    pub const ZOMBIFIED_PIGLIN: EntityKind = EntityKind::new("zombified_piglin");

    // === Hostile ===
    pub const BLAZE: EntityKind = EntityKind::new("blaze");
    pub const CREEPER: EntityKind = EntityKind::new("creeper");
    pub const ELDER_GUARDIAN: EntityKind = EntityKind::new("elder_guardian");
    pub const ENDERMITE: EntityKind = EntityKind::new("endermite");
    pub const EVOKER: EntityKind = EntityKind::new("evoker");
    pub const GHAST: EntityKind = EntityKind::new("ghast");
    pub const GUARDIAN: EntityKind = EntityKind::new("guardian");
    pub const HOGLIN: EntityKind = EntityKind::new("hoglin");
    pub const HUSK: EntityKind = EntityKind::new("husk");
    pub const MAGMA_CUBE: EntityKind = EntityKind::new("magma_cube");
    pub const PHANTOM: EntityKind = EntityKind::new("phantom");
    pub const PIGLIN_BRUTE: EntityKind = EntityKind::new("piglin_brute");
    pub const PILLAGER: EntityKind = EntityKind::new("pillager");
    pub const RAVAGER: EntityKind = EntityKind::new("ravager");
    pub const SHULKER: EntityKind = EntityKind::new("shulker");
    pub const SILVERFISH: EntityKind = EntityKind::new("silverfish");
    pub const SKELETON: EntityKind = EntityKind::new("skeleton");
    pub const SLIME: EntityKind = EntityKind::new("slime");
    pub const STRAY: EntityKind = EntityKind::new("stray");
    pub const VEX: EntityKind = EntityKind::new("vex");
    pub const VINDICATOR: EntityKind = EntityKind::new("vindicator");
    pub const WARDEN: EntityKind = EntityKind::new("warden");
    pub const WITCH: EntityKind = EntityKind::new("witch");
    pub const WITHER_SKELETON: EntityKind = EntityKind::new("wither_skeleton");
    pub const ZOGLIN: EntityKind = EntityKind::new("zoglin");
    pub const ZOMBIE: EntityKind = EntityKind::new("zombie");
    pub const ZOMBIE_VILLAGER: EntityKind = EntityKind::new("zombie_villager");

    // === Bosses ===
    pub const ENDER_DRAGON: EntityKind = EntityKind::new("ender_dragon");
    pub const WITHER: EntityKind = EntityKind::new("wither");
}
