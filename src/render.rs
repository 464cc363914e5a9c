//! Renderer
//!
//! Keeps the visible entry list in sync with the store. Entries are held in
//! a signal that the `TodoList` view renders; nothing here talks to the
//! network or writes to the store.

use std::rc::Rc;

use leptos::prelude::*;

use crate::models::{Note, NoteId, Statistics};
use crate::store::NoteStore;

/// Class names the list markup and the click dispatcher agree on
pub mod class {
    pub const LIST: &str = "todo__list";
    pub const ITEM: &str = "todo__item";
    pub const ITEM_COMPLETED: &str = "todo__item_completed";
    pub const TEXT: &str = "todo__text";
    pub const CHECKBOX: &str = "todo__checkbox";
    pub const REMOVE: &str = "todo__btn-remove";
    pub const CHANGE: &str = "todo__btn-change";
    pub const APPLY: &str = "todo__btn-apply";
    pub const UNDO: &str = "todo__btn-undo";
    pub const CHANGE_FORM: &str = "todo__change-form";
    pub const CHANGE_INPUT: &str = "todo__change-input";
    pub const BUTTONS: &str = "todo__btns";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMode {
    Viewing,
    /// Inline edit form holding the typed text
    Editing { draft: String },
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: NoteId,
    pub text: String,
    pub completed: bool,
    pub mode: EntryMode,
}

impl Entry {
    fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            text: note.value.clone(),
            completed: note.is_complete,
            mode: EntryMode::Viewing,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EntryMode::Editing { .. })
    }

    pub fn class_name(&self) -> String {
        if self.completed {
            format!("{} {}", class::ITEM, class::ITEM_COMPLETED)
        } else {
            class::ITEM.to_string()
        }
    }
}

/// Entries in display order.
///
/// Placement rule: incomplete entries go to the front, completed ones to
/// the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<NoteId> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    /// Id of the entry rendered with this `data-id` attribute
    pub fn id_for_data_id(&self, raw: &str) -> Option<NoteId> {
        self.entries
            .iter()
            .find(|entry| entry.id.to_string() == raw)
            .map(|entry| entry.id.clone())
    }

    pub fn get(&self, id: &NoteId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    fn get_mut(&mut self, id: &NoteId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| &entry.id == id)
    }

    fn place(&mut self, entry: Entry) {
        if entry.completed {
            self.entries.push(entry);
        } else {
            self.entries.insert(0, entry);
        }
    }

    fn take(&mut self, id: &NoteId) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| &entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn rebuild(&mut self, notes: &[Note]) {
        self.entries.clear();
        for note in notes {
            self.place(Entry::from_note(note));
        }
    }

    pub fn insert(&mut self, note: &Note) {
        self.place(Entry::from_note(note));
    }

    pub fn remove(&mut self, id: &NoteId) {
        self.entries.retain(|entry| &entry.id != id);
    }

    pub fn edit(&mut self, id: &NoteId, value: String) {
        if let Some(entry) = self.get_mut(id) {
            entry.mode = EntryMode::Editing { draft: value };
        }
    }

    pub fn set_draft(&mut self, id: &NoteId, text: String) {
        if let Some(Entry { mode: EntryMode::Editing { draft }, .. }) = self.get_mut(id) {
            *draft = text;
        }
    }

    /// Leave edit mode showing `text`, or the typed draft when `text` is `None`
    pub fn finish_edit(&mut self, id: &NoteId, text: Option<String>) {
        if let Some(entry) = self.get_mut(id) {
            let mode = std::mem::replace(&mut entry.mode, EntryMode::Viewing);
            match (text, mode) {
                (Some(text), _) => entry.text = text,
                (None, EntryMode::Editing { draft }) => entry.text = draft,
                (None, EntryMode::Viewing) => {}
            }
        }
    }

    /// Flip the completed state and move the entry to its new end
    pub fn toggle(&mut self, id: &NoteId) {
        if let Some(mut entry) = self.take(id) {
            entry.completed = !entry.completed;
            self.place(entry);
        }
    }
}

/// Projects store state into the entry list
#[derive(Clone)]
pub struct Renderer {
    store: Rc<NoteStore>,
    entries: RwSignal<EntryList>,
    statistics: RwSignal<Statistics>,
}

impl Renderer {
    pub fn new(store: Rc<NoteStore>) -> Self {
        Self {
            store,
            entries: RwSignal::new(EntryList::default()),
            statistics: RwSignal::new(Statistics::default()),
        }
    }

    pub fn entries(&self) -> ReadSignal<EntryList> {
        self.entries.read_only()
    }

    pub fn statistics(&self) -> ReadSignal<Statistics> {
        self.statistics.read_only()
    }

    /// Visible id order, first entry first
    pub fn order(&self) -> Vec<NoteId> {
        self.entries.with_untracked(EntryList::ids)
    }

    pub fn entry(&self, id: &NoteId) -> Option<Entry> {
        self.entries.with_untracked(|list| list.get(id).cloned())
    }

    pub fn refresh_statistics(&self) {
        self.statistics.set(self.store.statistics());
    }

    /// Clear the list and rebuild it from the store
    pub fn render_all(&self) {
        let notes = self.store.notes();
        self.entries.update(|list| list.rebuild(&notes));
        self.refresh_statistics();
        log::debug!("rendered {} entries", notes.len());
    }

    pub fn append_entry(&self, note: &Note) {
        self.entries.update(|list| list.insert(note));
        self.refresh_statistics();
    }

    pub fn remove_entry(&self, id: &NoteId) {
        self.entries.update(|list| list.remove(id));
        self.refresh_statistics();
    }

    /// Swap the entry for an inline form pre-filled with the stored value
    pub fn enter_edit_mode(&self, id: &NoteId) {
        let value = self
            .store
            .find(id)
            .map(|note| note.value)
            .or_else(|| self.entry(id).map(|entry| entry.text));
        if let Some(value) = value {
            self.entries.update(|list| list.edit(id, value));
        }
    }

    pub fn update_draft(&self, id: &NoteId, text: String) {
        self.entries.update(|list| list.set_draft(id, text));
    }

    /// Text currently in the entry's edit field
    pub fn draft(&self, id: &NoteId) -> Option<String> {
        self.entries.with_untracked(|list| match list.get(id).map(|entry| &entry.mode) {
            Some(EntryMode::Editing { draft }) => Some(draft.clone()),
            _ => None,
        })
    }

    /// Back to display mode showing the edited text
    pub fn apply_edit(&self, id: &NoteId) {
        self.entries.update(|list| list.finish_edit(id, None));
    }

    /// Back to display mode with the store's value, dropping typed changes
    pub fn cancel_edit(&self, id: &NoteId) {
        let stored = self.store.find(id).map(|note| note.value);
        self.entries.update(|list| list.finish_edit(id, stored));
    }

    /// Must run in the same step as the store's toggle
    pub fn toggle_visual_complete(&self, id: &NoteId) {
        self.entries.update(|list| list.toggle(id));
        self.refresh_statistics();
    }
}
