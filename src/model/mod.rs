//! Core data structures representing near-Earth objects and their close approaches.
//!
//! - [`neo`] – A catalogued NEO with optional name and diameter.
//! - [`approach`] – A timestamped close approach and its linked view.
//! - [`types`] – Typed table ids and the close-approach timestamp.
//!
//! Cross-references are index based: a [`CloseApproach`] names its NEO through
//! a [`NeoId`] and a [`NearEarthObject`] lists its approaches as
//! [`ApproachId`]s, both resolved against the owning
//! [`NeoDatabase`](crate::NeoDatabase).
//!
//! [`CloseApproach`]: approach::CloseApproach
//! [`NearEarthObject`]: neo::NearEarthObject
//! [`NeoId`]: types::NeoId
//! [`ApproachId`]: types::ApproachId

pub mod approach;
pub mod neo;
pub mod types;
