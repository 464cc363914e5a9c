//! Controller
//!
//! Turns form submissions and list clicks into store operations followed by
//! the matching renderer update. Holds no state of its own apart from the
//! sign-in flag that decides which form is shown.

use std::rc::Rc;

use leptos::prelude::*;

use crate::error::{NoteError, Result};
use crate::models::NoteId;
use crate::render::{class, Renderer};
use crate::store::NoteStore;

/// What a click inside an entry asks for, by the clicked element's class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Remove,
    Toggle,
    Edit,
    Apply,
    Undo,
}

impl EntryAction {
    pub fn from_class(class_name: &str) -> Option<Self> {
        match class_name {
            class::REMOVE => Some(EntryAction::Remove),
            class::CHECKBOX => Some(EntryAction::Toggle),
            class::CHANGE => Some(EntryAction::Edit),
            class::APPLY => Some(EntryAction::Apply),
            class::UNDO => Some(EntryAction::Undo),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct Controller {
    store: Rc<NoteStore>,
    renderer: Renderer,
    signed_in: RwSignal<bool>,
}

impl Controller {
    pub fn new(store: Rc<NoteStore>) -> Self {
        Self {
            renderer: Renderer::new(store.clone()),
            store,
            signed_in: RwSignal::new(false),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// True once the auth form was submitted; the add form is shown from then on
    pub fn signed_in(&self) -> ReadSignal<bool> {
        self.signed_in.read_only()
    }

    /// Auth form submit: swap the forms, then authenticate, fetch and render
    /// strictly in that order. Blank credentials are ignored.
    pub async fn submit_auth(&self, login: &str, password: &str) -> Result<()> {
        if login.trim().is_empty() || password.trim().is_empty() {
            return Ok(());
        }
        self.signed_in.set(true);
        self.store.authenticate(login, password).await?;
        self.store.fetch_notes().await?;
        self.renderer.render_all();
        Ok(())
    }

    /// Add form submit. `Ok(true)` when a note was added and the form should reset.
    pub async fn submit_note(&self, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        match self.store.add_note(text, None).await? {
            Some(note) => {
                self.renderer.append_entry(&note);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Dispatch a click on one of an entry's controls
    pub async fn handle_action(&self, id: NoteId, action: EntryAction) -> Result<()> {
        log::debug!("{:?} on entry {}", action, id);
        match action {
            EntryAction::Remove => {
                self.renderer.remove_entry(&id);
                let outcome = self.store.remove(&id).await;
                self.renderer.refresh_statistics();
                outcome
            }
            EntryAction::Toggle => {
                let pending = self.store.toggle_complete(&id);
                self.renderer.toggle_visual_complete(&id);
                pending.await
            }
            EntryAction::Edit => {
                self.renderer.enter_edit_mode(&id);
                Ok(())
            }
            EntryAction::Apply => {
                let Some(text) = self.renderer.draft(&id) else {
                    return Ok(());
                };
                if text.trim().is_empty() {
                    return Ok(());
                }
                let result = self.store.update(&id, &text, None).await;
                // A duplicate keeps the form open; anything else already changed local state
                if !matches!(result, Err(NoteError::DuplicateValue(_))) {
                    self.renderer.apply_edit(&id);
                }
                result
            }
            EntryAction::Undo => {
                self.renderer.cancel_edit(&id);
                Ok(())
            }
        }
    }
}
