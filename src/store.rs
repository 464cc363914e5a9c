//! Session & Note Store
//!
//! Owns the bearer token and the in-memory list of notes, and performs every
//! network request. The store is shared by `Rc` between the controller and
//! the renderer and only ever touched from the page's main thread, so state
//! lives in `RefCell`s. No borrow is held across an `.await`.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::api::{NoteArgs, TodoApi};
use crate::error::{NoteError, Result};
use crate::models::{Note, NoteId, Statistics};
use crate::session::{Session, TokenStore};

/// True if no note already carries exactly this value
pub fn is_unique(text: &str, notes: &[Note]) -> bool {
    !notes.iter().any(|note| note.value == text)
}

pub struct NoteStore {
    api: Rc<dyn TodoApi>,
    tokens: Box<dyn TokenStore>,
    session: RefCell<Session>,
    notes: RefCell<Vec<Note>>,
    default_priority: u32,
}

impl NoteStore {
    pub fn new(api: Rc<dyn TodoApi>, tokens: Box<dyn TokenStore>, default_priority: u32) -> Self {
        Self {
            api,
            tokens,
            session: RefCell::new(Session::default()),
            notes: RefCell::new(Vec::new()),
            default_priority,
        }
    }

    // ========================
    // Reads
    // ========================

    /// Snapshot of the notes in store order
    pub fn notes(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    pub fn find(&self, id: &NoteId) -> Option<Note> {
        self.notes.borrow().iter().find(|note| &note.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.notes.borrow().len()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn is_unique(&self, text: &str) -> bool {
        is_unique(text, &self.notes.borrow())
    }

    pub fn statistics(&self) -> Statistics {
        self.notes.borrow().iter().fold(Statistics::default(), |mut stats, note| {
            stats.total += 1;
            if note.is_complete {
                stats.completed += 1;
            } else {
                stats.not_completed += 1;
            }
            stats
        })
    }

    fn token(&self) -> Result<String> {
        self.session.borrow().bearer()
    }

    fn args<'a>(&self, text: &'a str, priority: Option<u32>) -> NoteArgs<'a> {
        NoteArgs {
            value: text,
            priority: priority.unwrap_or(self.default_priority),
        }
    }

    // ========================
    // Operations
    // ========================

    /// Log in with the concatenated credentials and keep the issued token
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<()> {
        let credentials = format!("{}{}", login, password);
        let token = self.api.login(&credentials).await?;
        self.session.borrow_mut().set_token(token.clone());
        self.tokens.save(&token)?;
        log::info!("authenticated");
        Ok(())
    }

    /// Replace the local list with the server's notes
    pub async fn fetch_notes(&self) -> Result<()> {
        let token = self.token()?;
        let records = self.api.list_notes(&token).await?;
        let notes: Vec<Note> = records.into_iter().map(Note::from).collect();
        log::debug!("fetched {} notes", notes.len());
        *self.notes.borrow_mut() = notes;
        Ok(())
    }

    /// Create a note. `Ok(None)` means the server did not return a usable
    /// record, or an equal note appeared while the request was in flight.
    pub async fn add_note(&self, text: &str, priority: Option<u32>) -> Result<Option<Note>> {
        if !self.is_unique(text) {
            return Err(NoteError::DuplicateValue(text.to_string()));
        }
        let token = self.token()?;
        let created = self.api.create_note(&token, &self.args(text, priority)).await?;

        let Some(note) = created.into_note() else {
            log::warn!("create of {:?} returned no note", text);
            return Ok(None);
        };
        let mut notes = self.notes.borrow_mut();
        if !is_unique(&note.value, &notes) {
            log::warn!("{:?} was added concurrently, dropping the duplicate", note.value);
            return Ok(None);
        }
        notes.push(note.clone());
        Ok(Some(note))
    }

    /// Delete on the server, then locally whatever the server said.
    ///
    /// The returned result is the server's; the local removal has already
    /// happened either way.
    pub async fn remove(&self, id: &NoteId) -> Result<()> {
        let outcome = match self.token() {
            Ok(token) => self.api.delete_note(&token, id).await,
            Err(e) => Err(e),
        };
        self.notes.borrow_mut().retain(|note| &note.id != id);
        outcome
    }

    /// Rename a note locally, then on the server.
    ///
    /// The local match coerces `id` to a number and only hits notes whose
    /// stored id is numeric and equal; a text id leaves local state untouched
    /// while the server request still goes out.
    pub async fn update(&self, id: &NoteId, text: &str, priority: Option<u32>) -> Result<()> {
        if !self.is_unique(text) {
            return Err(NoteError::DuplicateValue(text.to_string()));
        }
        let token = self.token()?;
        for note in self.notes.borrow_mut().iter_mut().filter(|note| note.id.matches_coerced(id)) {
            note.value = text.to_string();
        }
        self.api.update_note(&token, id, &self.args(text, priority)).await
    }

    /// Flip the local completion flag now and hand back the server request.
    ///
    /// The local flip does not wait for the request; if the request fails
    /// local state and the server disagree until the next fetch.
    pub fn toggle_complete(&self, id: &NoteId) -> impl Future<Output = Result<()>> + 'static {
        if let Some(note) = self.notes.borrow_mut().iter_mut().find(|note| &note.id == id) {
            note.is_complete = !note.is_complete;
        }
        let token = self.token();
        let api = Rc::clone(&self.api);
        let id = id.clone();
        async move { api.toggle_note(&token?, &id).await }
    }
}
