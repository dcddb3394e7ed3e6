//! Collision category value object

use serde::Serialize;
use std::collections::BTreeSet;

use crate::collision_mode::CollisionMode;
use crate::entity_kind::EntityKind;

/// One entry of the collision category catalog.
///
/// Categories are immutable once built and have no identity beyond their
/// `id`. Construct them with [`Category::new`] and the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    key: String,
    id: String,
    plural_id: String,
    display_name: String,
    entity_kinds: BTreeSet<EntityKind>,
    include_in_generated_config: bool,
    default_policy: Option<CollisionMode>,
    aggregate: bool,
}

impl Category {
    /// Create a leaf category with no kinds, no default policy, and no
    /// presence in generated configuration.
    pub fn new(
        key: impl Into<String>,
        id: impl Into<String>,
        plural_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            plural_id: plural_id.into(),
            display_name: display_name.into(),
            entity_kinds: BTreeSet::new(),
            include_in_generated_config: false,
            default_policy: None,
            aggregate: false,
        }
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.entity_kinds.extend(kinds);
        self
    }

    pub fn with_default_policy(mut self, policy: CollisionMode) -> Self {
        self.default_policy = Some(policy);
        self
    }

    /// Emit this category when configuration is auto-populated
    pub fn in_generated_config(mut self) -> Self {
        self.include_in_generated_config = true;
        self
    }

    /// Mark this category as covering a whole class of mobs
    pub fn aggregate(mut self) -> Self {
        self.aggregate = true;
        self
    }

    /// Programmatic catalog key, e.g. `HOSTILE_MOBS`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Short identifier used as a configuration key, e.g. `hostile`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn plural_id(&self) -> &str {
        &self.plural_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn entity_kinds(&self) -> &BTreeSet<EntityKind> {
        &self.entity_kinds
    }

    pub fn include_in_generated_config(&self) -> bool {
        self.include_in_generated_config
    }

    pub fn default_policy(&self) -> Option<CollisionMode> {
        self.default_policy
    }

    /// Whether this category groups a whole class of mobs rather than one
    /// narrowly named group
    pub fn is_aggregate(&self) -> bool {
        self.aggregate
    }

    /// Build the decorated configuration key `<prefix><id><suffix>`.
    ///
    /// Resolving the result with the same prefix and suffix yields this
    /// category again.
    pub fn config_key(&self, prefix: Option<&str>, suffix: Option<&str>) -> String {
        format!(
            "{}{}{}",
            prefix.unwrap_or_default(),
            self.id,
            suffix.unwrap_or_default()
        )
    }
}
