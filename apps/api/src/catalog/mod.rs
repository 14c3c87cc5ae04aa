//! Listing Store: the read-only internship catalogue.

pub mod handlers;
pub mod seed;

use anyhow::{bail, Result};
use std::collections::HashSet;

use crate::models::listing::Listing;

/// Immutable, ordered set of listings. Order is the seed order and doubles as
/// the tie-break order when ranking.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Rejects duplicate ids; the store is never mutated afterwards.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id) {
                bail!("duplicate listing id {}", listing.id);
            }
        }
        Ok(Self { listings })
    }

    /// The store preloaded with the demo catalogue.
    pub fn seeded() -> Result<Self> {
        Self::new(seed::seed_listings())
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_five_listings_in_order() {
        let store = ListingStore::seeded().unwrap();
        let ids: Vec<u32> = store.all().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_get_by_id() {
        let store = ListingStore::seeded().unwrap();
        assert_eq!(store.get(3).map(|l| l.company.as_str()), Some("DataFlow Analytics"));
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut listings = seed::seed_listings();
        listings[1].id = listings[0].id;
        assert!(ListingStore::new(listings).is_err());
    }
}
