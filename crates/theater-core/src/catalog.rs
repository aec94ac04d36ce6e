//! # Play Catalog
//!
//! Read-only lookup from play id to [`Play`]. The aggregator only needs
//! this trait, so callers can keep plays in whatever map suits them.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::types::Play;

/// Resolves a play id to its catalog entry.
pub trait PlayCatalog {
    /// Returns the play, or `None` when the id is not in the catalog.
    fn play(&self, play_id: &str) -> Option<&Play>;
}

impl<S: BuildHasher> PlayCatalog for HashMap<String, Play, S> {
    fn play(&self, play_id: &str) -> Option<&Play> {
        self.get(play_id)
    }
}

impl PlayCatalog for BTreeMap<String, Play> {
    fn play(&self, play_id: &str) -> Option<&Play> {
        self.get(play_id)
    }
}

impl<C: PlayCatalog + ?Sized> PlayCatalog for &C {
    fn play(&self, play_id: &str) -> Option<&Play> {
        (**self).play(play_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_catalog() {
        let mut plays = HashMap::new();
        plays.insert("hamlet".to_string(), Play::new("Hamlet", "tragedy"));

        assert_eq!(plays.play("hamlet").map(|p| p.name.as_str()), Some("Hamlet"));
        assert!(plays.play("ghost").is_none());
    }

    #[test]
    fn test_btree_map_catalog_through_reference() {
        let mut plays = BTreeMap::new();
        plays.insert("othello".to_string(), Play::new("Othello", "tragedy"));

        let catalog: &dyn PlayCatalog = &plays;
        assert!(catalog.play("othello").is_some());
        assert!((&plays).play("OTHELLO").is_none());
    }
}
