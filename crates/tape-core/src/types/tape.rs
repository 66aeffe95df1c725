//! Tape types

use serde::{Deserialize, Serialize};

/// A stocked title in the catalog.
///
/// Missing fields deserialize to their zero value, so a partial body such as
/// `{"title": "Dune"}` is accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tape {
    /// Caller-assigned, never checked for uniqueness
    pub id: String,
    pub title: String,
    pub director: String,
    pub genre: String,
    /// Units in stock
    pub quantity: i64,
    pub price: f64,
}

impl Tape {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            quantity,
            price,
        }
    }

    /// Two tapes are the same title when both title and director match exactly.
    pub fn is_same_title(&self, other: &Tape) -> bool {
        self.title == other.title && self.director == other.director
    }
}

/// Result of adding a tape to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The tape was appended to the catalog unchanged
    Created(Tape),
    /// An existing tape matched and its stock was bumped to `quantity`
    Merged { title: String, quantity: i64 },
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

/// The catalog every process starts with.
pub fn seed_tapes() -> Vec<Tape> {
    vec![
        Tape::new("1", "2001: A Space Odyssey", "Stanley Kubrick", "Sci-Fi", 1, 5999.99),
        Tape::new("2", "Blade Runner", "Ridley Scott", "Sci-Fi", 1, 3999.99),
        Tape::new("3", "Dune", "David Lynch", "Sci-Fi", 1, 2999.99),
        Tape::new("4", "Stalker", "Andrei Tarkovsky", "Sci-Fi", 1, 5999.99),
        Tape::new("5", "Amarcord", "Federico Fellini", "Drama", 1, 5999.99),
    ]
}
