//! In-memory tape catalog

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tape_core::{seed_tapes, CatalogError, CreateOutcome, Result, Tape, TapeStore};

/// Ordered tape collection guarded by a single lock.
///
/// `create` holds the write lock across the scan and the mutation, so two
/// concurrent creates of the same title can neither both append nor lose an
/// increment.
pub struct MemoryCatalog {
    tapes: RwLock<Vec<Tape>>,
}

impl MemoryCatalog {
    pub fn new(tapes: Vec<Tape>) -> Self {
        Self {
            tapes: RwLock::new(tapes),
        }
    }

    /// Catalog preloaded with the seed tapes
    pub fn seeded() -> Self {
        Self::new(seed_tapes())
    }

    // A poisoned lock still holds a valid Vec, so keep serving it.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Tape>> {
        self.tapes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Tape>> {
        self.tapes.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl TapeStore for MemoryCatalog {
    fn list(&self, genre: Option<&str>) -> Result<Vec<Tape>> {
        let tapes = self.read();
        let Some(genre) = genre else {
            return Ok(tapes.clone());
        };

        let filtered: Vec<Tape> = tapes
            .iter()
            .filter(|tape| tape.genre == genre)
            .cloned()
            .collect();

        if filtered.is_empty() {
            return Err(CatalogError::GenreUnavailable(genre.to_string()));
        }
        Ok(filtered)
    }

    fn get_by_id(&self, id: &str) -> Result<Tape> {
        self.read()
            .iter()
            .find(|tape| tape.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::TapeNotFound(id.to_string()))
    }

    fn create(&self, candidate: Tape) -> CreateOutcome {
        let mut tapes = self.write();

        if let Some(existing) = tapes.iter_mut().find(|tape| tape.is_same_title(&candidate)) {
            // Stock wraps at the integer limit instead of panicking.
            existing.quantity = existing.quantity.wrapping_add(1);
            return CreateOutcome::Merged {
                title: existing.title.clone(),
                quantity: existing.quantity,
            };
        }

        tapes.push(candidate.clone());
        CreateOutcome::Created(candidate)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
