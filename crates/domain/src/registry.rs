//! Collision category registry
//!
//! Owns an ordered, immutable catalog of [`Category`] entries and resolves
//! entities and configuration keys to them. Resolution is a linear scan in
//! catalog order and the first match wins.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::catalog::canonical_categories;
use crate::category::Category;
use crate::classifier::EntityClassifier;
use crate::collision_mode::CollisionMode;
use crate::error::{CatalogError, Decoration, ResolveError};
use crate::mob_category::MobCategory;

static CANONICAL: Lazy<CategoryRegistry> = Lazy::new(|| {
    let categories = canonical_categories();
    tracing::debug!(
        "Initialised canonical collision catalog with {} categories",
        categories.len()
    );
    CategoryRegistry { categories }
});

/// Ordered catalog of collision categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry from custom categories, keeping their order.
    ///
    /// Fails if two categories share an `id` or a `plural_id`.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut plurals = HashSet::new();
        for category in &categories {
            if !ids.insert(category.id()) {
                return Err(CatalogError::DuplicateId(category.id().to_string()));
            }
            if !plurals.insert(category.plural_id()) {
                return Err(CatalogError::DuplicatePluralId(
                    category.plural_id().to_string(),
                ));
            }
        }

        tracing::debug!("Built collision registry with {} categories", categories.len());
        Ok(Self { categories })
    }

    /// The canonical catalog, built on first access and shared for the
    /// lifetime of the process
    pub fn canonical() -> &'static CategoryRegistry {
        &CANONICAL
    }

    /// All categories in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a canonical category by its typed name
    pub fn get(&self, category: MobCategory) -> Option<&Category> {
        self.categories.iter().find(|c| c.key() == category.key())
    }

    /// Find the first category, in catalog order, whose kinds match `entity`.
    ///
    /// Categories with no kinds are skipped without consulting the classifier.
    pub fn resolve_entity<E, C>(&self, classifier: &C, entity: &E) -> Option<&Category>
    where
        C: EntityClassifier<E> + ?Sized,
    {
        let found = self.categories.iter().find(|category| {
            !category.entity_kinds().is_empty()
                && classifier.matches_any_kind(entity, category.entity_kinds())
        });
        if found.is_none() {
            tracing::trace!("No collision category matches entity");
        }
        found
    }

    /// Exact, case-sensitive lookup by singular `id`
    pub fn resolve_id(&self, text: &str) -> Option<&Category> {
        let found = self.categories.iter().find(|c| c.id() == text);
        if found.is_none() {
            tracing::trace!("No collision category with id '{}'", text);
        }
        found
    }

    /// Exact, case-sensitive lookup by `plural_id`
    pub fn resolve_plural(&self, text: &str) -> Option<&Category> {
        let found = self.categories.iter().find(|c| c.plural_id() == text);
        if found.is_none() {
            tracing::trace!("No collision category with plural id '{}'", text);
        }
        found
    }

    /// Lookup by `id` after dropping `prefix.len()` leading characters.
    ///
    /// The text is not checked to actually start with `prefix`; only the
    /// length is used. A text shorter than the prefix is a caller error.
    pub fn resolve_id_with_prefix(
        &self,
        text: &str,
        prefix: Option<&str>,
    ) -> Result<Option<&Category>, ResolveError> {
        match prefix {
            None => Ok(self.resolve_id(text)),
            Some(prefix) => {
                let rest = strip_leading(text, prefix.chars().count())?;
                Ok(self.resolve_id(rest))
            }
        }
    }

    /// Lookup by `id` from a `<prefix><id><suffix>` configuration key.
    ///
    /// The suffix is dropped first, then the prefix, both purely by length.
    pub fn resolve_id_with_affixes(
        &self,
        text: &str,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Option<&Category>, ResolveError> {
        match suffix {
            None => self.resolve_id_with_prefix(text, prefix),
            Some(suffix) => {
                let rest = strip_trailing(text, suffix.chars().count())?;
                self.resolve_id_with_prefix(rest, prefix)
            }
        }
    }

    /// Categories the configuration writer should emit by default, in
    /// catalog order, paired with the policy to write for them
    pub fn generated_config_defaults(&self) -> Vec<(&Category, CollisionMode)> {
        self.categories
            .iter()
            .filter(|c| c.include_in_generated_config())
            .map(|c| (c, c.default_policy().unwrap_or_default()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CategoryRegistry {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn strip_leading(text: &str, count: usize) -> Result<&str, ResolveError> {
    let mut chars = text.chars();
    for _ in 0..count {
        if chars.next().is_none() {
            return Err(out_of_range(Decoration::Prefix, text, count));
        }
    }
    Ok(chars.as_str())
}

fn strip_trailing(text: &str, count: usize) -> Result<&str, ResolveError> {
    let mut chars = text.chars();
    for _ in 0..count {
        if chars.next_back().is_none() {
            return Err(out_of_range(Decoration::Suffix, text, count));
        }
    }
    Ok(chars.as_str())
}

fn out_of_range(decoration: Decoration, text: &str, decoration_len: usize) -> ResolveError {
    let text_len = text.chars().count();
    tracing::warn!(
        "Collision key '{}' is shorter than its {} ({} < {})",
        text,
        decoration,
        text_len,
        decoration_len
    );
    ResolveError::out_of_range(decoration, text_len, decoration_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{DirectKindClassifier, MockClassifier};
    use crate::entity_kind::{kinds, EntityKind};

    fn registry() -> &'static CategoryRegistry {
        CategoryRegistry::canonical()
    }

    fn id_of(category: Option<&Category>) -> Option<&str> {
        category.map(Category::id)
    }

    // =========================================================================
    // Identifier resolution
    // =========================================================================

    #[test]
    fn every_category_resolves_from_its_own_id() {
        for category in registry() {
            assert_eq!(registry().resolve_id(category.id()), Some(category));
        }
    }

    #[test]
    fn unknown_or_empty_ids_resolve_to_none() {
        assert_eq!(registry().resolve_id(""), None);
        assert_eq!(registry().resolve_id("nonexistent"), None);
    }

    #[test]
    fn id_lookup_is_exact_and_case_sensitive() {
        assert_eq!(registry().resolve_id("Hostile"), None);
        assert_eq!(registry().resolve_id(" hostile"), None);
        assert_eq!(registry().resolve_id("hostiles"), None);
        assert_eq!(registry().resolve_id("HOSTILE_MOBS"), None);
    }

    #[test]
    fn plural_lookup_uses_plural_ids_only() {
        assert_eq!(id_of(registry().resolve_plural("utilities")), Some("utility"));
        assert_eq!(id_of(registry().resolve_plural("bosses")), Some("boss"));
        assert_eq!(registry().resolve_plural("boss"), None);
    }

    #[test]
    fn absent_prefix_is_a_plain_lookup() {
        for text in ["", "pet", "monster", "nonexistent"] {
            assert_eq!(
                registry().resolve_id_with_prefix(text, None),
                Ok(registry().resolve_id(text))
            );
        }
    }

    #[test]
    fn prefix_is_stripped_before_lookup() {
        let found = registry()
            .resolve_id_with_prefix("pet_monster", Some("pet_"))
            .expect("prefix fits");

        assert_eq!(found, registry().get(MobCategory::Monsters));
    }

    #[test]
    fn stripped_prefix_equals_lookup_of_remainder() {
        for category in registry() {
            for prefix in ["", "collision.", "mob_", "x"] {
                let text = format!("{}{}", prefix, category.id());
                assert_eq!(
                    registry().resolve_id_with_prefix(&text, Some(prefix)),
                    Ok(registry().resolve_id(category.id()))
                );
            }
        }
    }

    #[test]
    fn prefix_content_is_not_verified() {
        let found = registry()
            .resolve_id_with_prefix("abcdboss", Some("pet_"))
            .expect("prefix fits");

        assert_eq!(id_of(found), Some("boss"));
    }

    #[test]
    fn prefix_equal_to_text_leaves_empty_id() {
        assert_eq!(registry().resolve_id_with_prefix("pet_", Some("pet_")), Ok(None));
    }

    #[test]
    fn prefix_longer_than_text_is_out_of_range() {
        let err = registry()
            .resolve_id_with_prefix("pet", Some("pet_"))
            .expect_err("prefix longer than text");

        assert_eq!(err, ResolveError::out_of_range(Decoration::Prefix, 3, 4));
    }

    #[test]
    fn both_affixes_absent_is_a_plain_lookup() {
        for text in ["", "npc", "npcs", "nonexistent"] {
            assert_eq!(
                registry().resolve_id_with_affixes(text, None, None),
                Ok(registry().resolve_id(text))
            );
        }
    }

    #[test]
    fn absent_suffix_applies_prefix_rule() {
        assert_eq!(
            registry().resolve_id_with_affixes("pet_monster", Some("pet_"), None),
            registry().resolve_id_with_prefix("pet_monster", Some("pet_"))
        );
    }

    #[test]
    fn suffix_only_is_stripped_from_the_end() {
        let found = registry()
            .resolve_id_with_affixes("hostile_cfg", None, Some("_cfg"))
            .expect("suffix fits");

        assert_eq!(found, registry().get(MobCategory::HostileMobs));
    }

    #[test]
    fn both_affixes_are_stripped() {
        let found = registry()
            .resolve_id_with_affixes("collision.tameable_mode", Some("collision."), Some("_mode"))
            .expect("affixes fit");

        assert_eq!(found, registry().get(MobCategory::TameableMobs));
    }

    #[test]
    fn config_keys_round_trip_through_affix_resolution() {
        let prefix = Some("mobs.");
        let suffix = Some(".collision");
        for category in registry() {
            let key = category.config_key(prefix, suffix);
            assert_eq!(
                registry().resolve_id_with_affixes(&key, prefix, suffix),
                Ok(Some(category))
            );
        }
    }

    #[test]
    fn suffix_longer_than_text_is_out_of_range() {
        let err = registry()
            .resolve_id_with_affixes("boss", None, Some("_collision"))
            .expect_err("suffix longer than text");

        assert_eq!(err, ResolveError::out_of_range(Decoration::Suffix, 4, 10));
    }

    #[test]
    fn prefix_longer_than_remainder_after_suffix_is_out_of_range() {
        let err = registry()
            .resolve_id_with_affixes("ab_cfg", Some("abc"), Some("_cfg"))
            .expect_err("prefix longer than remainder");

        assert_eq!(err, ResolveError::out_of_range(Decoration::Prefix, 2, 3));
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        let found = registry()
            .resolve_id_with_affixes("ñø_npc_é", Some("ñø_"), Some("_é"))
            .expect("affixes fit");

        assert_eq!(id_of(found), Some("npc"));
    }

    // =========================================================================
    // Entity resolution
    // =========================================================================

    #[test]
    fn narrow_groups_win_over_broad_classes() {
        let classifier = DirectKindClassifier;

        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::TAMED_WOLF)),
            Some("pet")
        );
        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::VILLAGER)),
            Some("npc")
        );
        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::ZOMBIE)),
            Some("monster")
        );
        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::COW)),
            Some("animal")
        );
        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::GHAST)),
            Some("hostile")
        );
        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::IRON_GOLEM)),
            Some("neutral")
        );
        assert_eq!(
            id_of(registry().resolve_entity(&classifier, &kinds::ENDER_DRAGON)),
            Some("boss")
        );
    }

    #[test]
    fn unclassified_entity_resolves_to_none() {
        let armor_stand = EntityKind::new("armor_stand");
        assert_eq!(
            registry().resolve_entity(&DirectKindClassifier, &armor_stand),
            None
        );
    }

    #[test]
    fn overlapping_kinds_resolve_in_declaration_order() {
        let first = Category::new("FARM", "farm", "farms", "Farm").with_kinds([kinds::COW]);
        let second =
            Category::new("CATTLE", "cattle", "cattles", "Cattle").with_kinds([kinds::COW, kinds::PIG]);

        let forward = CategoryRegistry::new(vec![first.clone(), second.clone()])
            .expect("unique catalog");
        let reversed = CategoryRegistry::new(vec![second, first]).expect("unique catalog");

        assert_eq!(
            id_of(forward.resolve_entity(&DirectKindClassifier, &kinds::COW)),
            Some("farm")
        );
        assert_eq!(
            id_of(reversed.resolve_entity(&DirectKindClassifier, &kinds::COW)),
            Some("cattle")
        );
    }

    #[test]
    fn classifier_is_not_consulted_for_empty_kind_sets_or_after_a_match() {
        let registry = CategoryRegistry::new(vec![
            Category::new("VOID", "void", "voids", "Void"),
            Category::new("FARM", "farm", "farms", "Farm").with_kinds([kinds::COW]),
            Category::new("CATTLE", "cattle", "cattles", "Cattle").with_kinds([kinds::COW]),
        ])
        .expect("unique catalog");

        let mut classifier = MockClassifier::new();
        classifier
            .expect_matches_any_kind()
            .withf(|_, kinds| !kinds.is_empty())
            .times(1)
            .returning(|entity, kinds| kinds.contains(entity));

        let found = registry.resolve_entity(&classifier, &kinds::COW);
        assert_eq!(id_of(found), Some("farm"));
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let registry = CategoryRegistry::new(Vec::new()).expect("empty catalog is valid");

        let mut classifier = MockClassifier::new();
        classifier.expect_matches_any_kind().never();

        assert!(registry.is_empty());
        assert_eq!(registry.resolve_entity(&classifier, &kinds::COW), None);
        assert_eq!(registry.resolve_id("pet"), None);
    }

    // =========================================================================
    // Catalog shape
    // =========================================================================

    #[test]
    fn canonical_registry_is_shared() {
        assert!(std::ptr::eq(CategoryRegistry::canonical(), registry()));
        assert_eq!(registry().len(), MobCategory::all().len());
    }

    #[test]
    fn typed_lookup_finds_every_canonical_category() {
        for mob in MobCategory::all() {
            let category = registry().get(*mob).expect("canonical category present");
            assert_eq!(category.id(), mob.id());
            assert_eq!(category.is_aggregate(), mob.is_aggregate());
        }
    }

    #[test]
    fn aggregate_categories_are_exactly_the_mob_classes() {
        let aggregates: Vec<&str> = registry()
            .iter()
            .filter(|c| c.is_aggregate())
            .map(Category::id)
            .collect();

        assert_eq!(
            aggregates,
            ["passive", "neutral", "hostile", "tameable", "utility", "boss"]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = CategoryRegistry::new(vec![
            Category::new("A", "pet", "pets", "Pets"),
            Category::new("B", "pet", "pets_again", "Pets again"),
        ])
        .expect_err("duplicate id");

        assert_eq!(err, CatalogError::DuplicateId("pet".to_string()));
    }

    #[test]
    fn duplicate_plural_ids_are_rejected() {
        let err = CategoryRegistry::new(vec![
            Category::new("A", "sheep", "sheep", "Sheep"),
            Category::new("B", "ewe", "sheep", "Ewes"),
        ])
        .expect_err("duplicate plural id");

        assert_eq!(err, CatalogError::DuplicatePluralId("sheep".to_string()));
    }

    #[test]
    fn generated_defaults_list_aggregates_in_order() {
        let defaults: Vec<(&str, CollisionMode)> = registry()
            .generated_config_defaults()
            .into_iter()
            .map(|(c, mode)| (c.id(), mode))
            .collect();

        assert_eq!(
            defaults,
            [
                ("passive", CollisionMode::Default),
                ("neutral", CollisionMode::Default),
                ("hostile", CollisionMode::Default),
                ("tameable", CollisionMode::Default),
                ("utility", CollisionMode::Default),
                ("boss", CollisionMode::Default),
            ]
        );
    }

    #[test]
    fn generated_defaults_fall_back_when_policy_missing() {
        let registry = CategoryRegistry::new(vec![
            Category::new("PETS", "pet", "pets", "Pets"),
            Category::new("CARTS", "cart", "carts", "Carts").in_generated_config(),
            Category::new("BOSS_MOBS", "boss", "bosses", "Boss Mobs")
                .with_default_policy(CollisionMode::Cancel)
                .in_generated_config(),
        ])
        .expect("unique catalog");

        let defaults: Vec<(&str, CollisionMode)> = registry
            .generated_config_defaults()
            .into_iter()
            .map(|(c, mode)| (c.id(), mode))
            .collect();

        assert_eq!(
            defaults,
            [("cart", CollisionMode::Default), ("boss", CollisionMode::Cancel)]
        );
    }

    #[test]
    fn concurrent_readers_see_the_same_catalog() {
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let registry = CategoryRegistry::canonical();
                        id_of(registry.resolve_entity(&DirectKindClassifier, &kinds::WITHER))
                            .map(str::to_string)
                    })
                })
                .collect();

            for handle in handles {
                let id = handle.join().expect("reader thread");
                assert_eq!(id.as_deref(), Some("monster"));
            }
        });
    }
}
