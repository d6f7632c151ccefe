//! In-memory NEO database: indices over the catalog and the linkage of
//! close approaches to their NEOs.
//!
//! A [`NeoDatabase`] is built once from the loaded collections and is
//! read-only afterwards. Construction:
//!
//! 1. indexes NEOs by designation (see [`DuplicatePolicy`] for repeated keys),
//! 2. indexes the named NEOs that won step 1 by name (exact, case-sensitive),
//! 3. walks the approaches in file order, setting each approach's `neo` and
//!    appending it to that NEO's `approaches` when its designation is known.
//!
//! Approaches whose designation matches no NEO stay in
//! [`get_approaches`](NeoDatabase::get_approaches) with `neo == None`.

mod config;
mod error;
mod index;

pub use config::{DatabaseConfig, DuplicatePolicy};
pub use error::Error;

use crate::model::approach::{CloseApproach, LinkedApproach};
use crate::model::neo::NearEarthObject;
use crate::model::types::{ApproachId, NeoId};
use crate::query::{self, Filter};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
    unresolved: usize,
}

impl NeoDatabase {
    /// Builds a database with the default [`DatabaseConfig`], which rejects
    /// duplicate designations and names.
    pub fn new(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
    ) -> Result<Self, Error> {
        Self::with_config(neos, approaches, &DatabaseConfig::default())
    }

    pub fn with_config(
        mut neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
        config: &DatabaseConfig,
    ) -> Result<Self, Error> {
        let by_designation = index::by_designation(&neos, config.duplicates)?;
        let by_name = index::by_name(&neos, &by_designation, config.duplicates)?;
        let unresolved = index::link(&mut neos, &mut approaches, &by_designation);

        if unresolved > 0 {
            debug!(unresolved, "close approaches without a matching NEO");
        }
        info!(
            neos = neos.len(),
            approaches = approaches.len(),
            named = by_name.len(),
            "built NEO database"
        );

        Ok(Self {
            neos,
            approaches,
            by_designation,
            by_name,
            unresolved,
        })
    }

    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|id| &self.neos[id.index()])
    }

    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|id| &self.neos[id.index()])
    }

    /// Every close approach in file order, linked or not.
    #[inline]
    pub fn get_approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    #[inline]
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// NEOs reachable by designation, in catalog order. Differs from
    /// [`neos`](Self::neos) only when [`DuplicatePolicy::KeepLast`] replaced
    /// earlier rows.
    pub fn canonical_neos(&self) -> impl Iterator<Item = &NearEarthObject> + '_ {
        self.neos.iter().enumerate().filter_map(|(i, neo)| {
            (self.by_designation.get(&neo.designation) == Some(&NeoId(i))).then_some(neo)
        })
    }

    #[inline]
    pub fn canonical_count(&self) -> usize {
        self.by_designation.len()
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.index())
    }

    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.index())
    }

    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo.and_then(|id| self.neo(id))
    }

    /// Approaches linked to `neo`, in file order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches.iter().filter_map(|&id| self.approach(id))
    }

    pub fn link<'a>(&'a self, approach: &'a CloseApproach) -> LinkedApproach<'a> {
        LinkedApproach::new(approach, self.neo_for(approach))
    }

    pub fn linked_approaches(&self) -> impl Iterator<Item = LinkedApproach<'_>> + '_ {
        self.approaches.iter().map(|approach| self.link(approach))
    }

    /// Lazily yields the linked approaches that satisfy every filter, in file
    /// order. An empty filter slice yields everything.
    pub fn query<'a>(
        &'a self,
        filters: &'a [Filter],
    ) -> impl Iterator<Item = LinkedApproach<'a>> + 'a {
        self.linked_approaches()
            .filter(move |linked| query::matches_all(filters, linked))
    }

    #[inline]
    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    #[inline]
    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Number of approaches whose designation matched no NEO.
    #[inline]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved
    }
}
