//! Entity classification port
//!
//! The registry never inspects entities itself. Hosts supply an
//! [`EntityClassifier`] that knows how their entity handles map onto
//! [`EntityKind`] markers, including any subtype or variant relationships.

use std::collections::BTreeSet;

use crate::entity_kind::EntityKind;

/// Tests whether an entity belongs to a set of entity kinds.
///
/// Implementations must be deterministic for resolution to be deterministic.
pub trait EntityClassifier<E> {
    /// Returns `true` if `entity` is a member of any kind in `kinds`,
    /// directly or through a grouping the classifier recognises.
    fn matches_any_kind(&self, entity: &E, kinds: &BTreeSet<EntityKind>) -> bool;
}

/// An entity that can report its own kind markers
pub trait KindedEntity {
    /// Every marker that applies to this entity, e.g. `wolf` and `tamed_wolf`
    fn entity_kinds(&self) -> &[EntityKind];
}

impl KindedEntity for EntityKind {
    fn entity_kinds(&self) -> &[EntityKind] {
        std::slice::from_ref(self)
    }
}

/// Classifier for entities that report their markers directly.
///
/// Matches when any reported marker is in the requested set. No subtype
/// relationships are inferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectKindClassifier;

impl<E: KindedEntity> EntityClassifier<E> for DirectKindClassifier {
    fn matches_any_kind(&self, entity: &E, kinds: &BTreeSet<EntityKind>) -> bool {
        entity.entity_kinds().iter().any(|kind| kinds.contains(kind))
    }
}

#[cfg(test)]
mockall::mock! {
    /// Mock classifier whose entities are bare kind markers.
    pub Classifier {}

    impl EntityClassifier<EntityKind> for Classifier {
        fn matches_any_kind(&self, entity: &EntityKind, kinds: &BTreeSet<EntityKind>) -> bool;
    }
}
