use super::config::DuplicatePolicy;
use super::error::Error;
use crate::model::approach::CloseApproach;
use crate::model::neo::NearEarthObject;
use crate::model::types::{ApproachId, NeoId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::warn;

pub fn by_designation(
    neos: &[NearEarthObject],
    policy: DuplicatePolicy,
) -> Result<HashMap<String, NeoId>, Error> {
    let mut index = HashMap::with_capacity(neos.len());
    for (i, neo) in neos.iter().enumerate() {
        match index.entry(neo.designation.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(NeoId(i));
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateDesignation(neo.designation.clone()));
                }
                DuplicatePolicy::KeepLast => {
                    warn!(designation = %neo.designation, "duplicate designation, keeping last");
                    slot.insert(NeoId(i));
                }
            },
        }
    }
    Ok(index)
}

/// Indexes names of the NEOs that won `designations`; NEOs replaced there
/// under [`DuplicatePolicy::KeepLast`] are never reachable by name.
pub fn by_name(
    neos: &[NearEarthObject],
    designations: &HashMap<String, NeoId>,
    policy: DuplicatePolicy,
) -> Result<HashMap<String, NeoId>, Error> {
    let mut index = HashMap::new();
    for (i, neo) in neos.iter().enumerate() {
        if designations.get(&neo.designation) != Some(&NeoId(i)) {
            continue;
        }
        let Some(name) = neo.name.as_deref() else {
            continue;
        };
        match index.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(NeoId(i));
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::duplicate_name(name, &neo.designation));
                }
                DuplicatePolicy::KeepLast => {
                    warn!(neo_name = name, designation = %neo.designation, "duplicate name, keeping last");
                    slot.insert(NeoId(i));
                }
            },
        }
    }
    Ok(index)
}

/// Resolves every approach against `index` in file order and returns how
/// many stayed unresolved. Existing links are discarded first.
pub fn link(
    neos: &mut [NearEarthObject],
    approaches: &mut [CloseApproach],
    index: &HashMap<String, NeoId>,
) -> usize {
    for neo in neos.iter_mut() {
        neo.approaches.clear();
    }

    let mut unresolved = 0;
    for (i, approach) in approaches.iter_mut().enumerate() {
        match index.get(&approach.designation) {
            Some(&id) => {
                approach.neo = Some(id);
                neos[id.0].approaches.push(ApproachId(i));
            }
            None => {
                approach.neo = None;
                unresolved += 1;
            }
        }
    }
    unresolved
}
