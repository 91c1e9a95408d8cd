//! Named cipher phrases and their display ordering.
//!
//! A [`CipherPhrase`] is the record a storage layer keeps for each saved
//! passphrase. [`PhraseBook`] holds records in memory and keeps them in
//! display order: favorites first, then newest first. Records implement
//! `Serialize`/`Deserialize`; the storage format is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::KleiraError;
use crate::grid::{build_grid, Grid};

/// A saved, named passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherPhrase {
    id: Uuid,
    name: String,
    phrase: String,
    created: DateTime<Utc>,
    favorite: bool,
}

impl CipherPhrase {
    /// Creates a non-favorite record with a fresh id, stamped now.
    pub fn new(name: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self::with_created(name, phrase, Utc::now())
    }

    /// Creates a non-favorite record with a fresh id and an explicit timestamp.
    pub fn with_created(
        name: impl Into<String>,
        phrase: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        CipherPhrase {
            id: Uuid::new_v4(),
            name: name.into(),
            phrase: phrase.into(),
            created,
            favorite: false,
        }
    }

    /// Rebuilds a record exactly as it was stored.
    pub fn from_parts(
        id: Uuid,
        name: impl Into<String>,
        phrase: impl Into<String>,
        created: DateTime<Utc>,
        favorite: bool,
    ) -> Self {
        CipherPhrase {
            id,
            name: name.into(),
            phrase: phrase.into(),
            created,
            favorite,
        }
    }

    /// Stable identifier of the record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Display name chosen by the user.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passphrase the grid is built from.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Creation time, used for newest-first ordering.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Whether the record is pinned above non-favorites.
    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Builds the cipher grid for this record's passphrase.
    pub fn grid(&self) -> Grid {
        build_grid(&self.phrase)
    }
}

/// In-memory collection of cipher phrases in display order.
///
/// # Examples
///
/// ```
/// use kleira::phrase::PhraseBook;
///
/// let mut book = PhraseBook::new();
/// let work = book.add("work", "correct horse");
/// let home = book.add("home", "battery staple");
///
/// book.toggle_favorite(work).unwrap();
/// let order: Vec<_> = book.iter().map(|p| p.id()).collect();
/// assert_eq!(order, vec![work, home]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    phrases: Vec<CipherPhrase>,
}

impl PhraseBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new record stamped now and returns its id.
    pub fn add(&mut self, name: impl Into<String>, phrase: impl Into<String>) -> Uuid {
        let record = CipherPhrase::new(name, phrase);
        let id = record.id;
        self.insert(record);
        id
    }

    /// Inserts `record`, replacing any record that has the same id.
    pub fn insert(&mut self, record: CipherPhrase) {
        self.phrases.retain(|p| p.id != record.id);
        debug!(id = %record.id, "adding cipher phrase");
        // Newest insert goes first so equal timestamps still list it on top.
        self.phrases.insert(0, record);
        self.sort();
    }

    /// Flips the favorite flag of a record and returns the new value.
    ///
    /// # Errors
    /// Returns [`KleiraError::PhraseNotFound`] if no record has `id`.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Result<bool, KleiraError> {
        let record = self
            .phrases
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(KleiraError::PhraseNotFound(id))?;
        record.favorite = !record.favorite;
        let favorite = record.favorite;
        debug!(id = %id, favorite, "toggled cipher phrase favorite");
        self.sort();
        Ok(favorite)
    }

    /// Removes a record and returns it.
    ///
    /// # Errors
    /// Returns [`KleiraError::PhraseNotFound`] if no record has `id`.
    pub fn remove(&mut self, id: Uuid) -> Result<CipherPhrase, KleiraError> {
        let index = self
            .phrases
            .iter()
            .position(|p| p.id == id)
            .ok_or(KleiraError::PhraseNotFound(id))?;
        debug!(id = %id, "removing cipher phrase");
        Ok(self.phrases.remove(index))
    }

    /// Looks up a record by id.
    pub fn get(&self, id: Uuid) -> Option<&CipherPhrase> {
        self.phrases.iter().find(|p| p.id == id)
    }

    /// Iterates over records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, CipherPhrase> {
        self.phrases.iter()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Favorites first, then newest first. Stable for ties.
    fn sort(&mut self) {
        self.phrases.sort_by(|a, b| {
            b.favorite
                .cmp(&a.favorite)
                .then_with(|| b.created.cmp(&a.created))
        });
    }
}

impl<'a> IntoIterator for &'a PhraseBook {
    type Item = &'a CipherPhrase;
    type IntoIter = std::slice::Iter<'a, CipherPhrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CipherPhrase> for PhraseBook {
    fn from_iter<I: IntoIterator<Item = CipherPhrase>>(iter: I) -> Self {
        let mut book = PhraseBook::new();
        for record in iter {
            book.insert(record);
        }
        book
    }
}
