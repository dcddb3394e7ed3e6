//! # Cartcollide Domain
//!
//! Collision categories for minecart collision handling. Each category groups
//! entity kinds (pets, hostile mobs, NPCs, ...) under a configuration
//! identifier and an optional default [`CollisionMode`].
//!
//! ## Architecture Role
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ domain (THIS CRATE)                     │  ← Pure vocabulary + registry
//! │   Category catalog, name resolution     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//!  ┌─────────────┐        ┌───────────────┐
//!  │ config      │        │ collision     │
//!  │ loader      │        │ handling      │
//!  │ (host)      │        │ (host)        │
//!  └─────────────┘        └───────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **No I/O** - configuration files and entity enumeration belong to the host
//! 2. **Immutable catalog** - built once, read concurrently without locks
//! 3. **Pluggable classification** - hosts implement [`EntityClassifier`]
//! 4. **Absence is not an error** - failed lookups return `None`

mod catalog;
pub use catalog::canonical_categories;

mod category;
pub use category::Category;

mod classifier;
pub use classifier::{DirectKindClassifier, EntityClassifier, KindedEntity};

mod collision_mode;
pub use collision_mode::CollisionMode;

mod entity_kind;
pub use entity_kind::{kinds, EntityKind};

pub mod error;
pub use error::{CatalogError, Decoration, ParseError, ResolveError};

mod mob_category;
pub use mob_category::MobCategory;

mod registry;
pub use registry::CategoryRegistry;
