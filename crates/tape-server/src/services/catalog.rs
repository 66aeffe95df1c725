//! Catalog service

use std::sync::Arc;
use tape_core::{CreateOutcome, Result, Tape, TapeStore};
use tracing::{debug, info};

pub struct CatalogService {
    store: Arc<dyn TapeStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn TapeStore>) -> Self {
        Self { store }
    }

    /// List tapes. An empty genre is treated the same as no filter.
    pub fn list_tapes(&self, genre: Option<&str>) -> Result<Vec<Tape>> {
        let genre = genre.filter(|g| !g.is_empty());
        debug!("Listing tapes: genre={:?}", genre);

        let tapes = self.store.list(genre)?;
        debug!("Listed {} tapes", tapes.len());
        Ok(tapes)
    }

    pub fn get_tape(&self, id: &str) -> Result<Tape> {
        debug!("Looking up tape: id={}", id);
        self.store.get_by_id(id)
    }

    pub fn create_tape(&self, candidate: Tape) -> CreateOutcome {
        let outcome = self.store.create(candidate);

        match &outcome {
            CreateOutcome::Created(tape) => {
                info!(
                    "Added tape: id={}, title={}, catalog size={}",
                    tape.id,
                    tape.title,
                    self.store.len()
                );
            }
            CreateOutcome::Merged { title, quantity } => {
                info!("Tape {} already in catalog, stock now {}", title, quantity);
            }
        }

        outcome
    }
}
