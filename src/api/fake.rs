//! In-memory [`TodoApi`] for tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::{NoteArgs, TodoApi};
use crate::error::{NoteError, Result};
use crate::models::{CreatedRecord, NoteId, NoteRecord};

#[derive(Default)]
struct FakeState {
    notes: Vec<(NoteId, String, bool)>,
    next_id: i64,
    requests: Vec<String>,
    failing: Vec<&'static str>,
    created_reply: Option<CreatedRecord>,
}

/// Server double that records every request it receives.
///
/// Handles are cheap clones sharing one state, so a test keeps one handle
/// and gives the other to the store.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.borrow_mut().next_id = 1;
        api
    }

    pub fn with_notes(notes: &[(i64, &str, bool)]) -> Self {
        let api = Self::new();
        {
            let mut state = api.state.borrow_mut();
            for (id, value, checked) in notes {
                state.notes.push((NoteId::Number(*id), value.to_string(), *checked));
                state.next_id = state.next_id.max(id + 1);
            }
        }
        api
    }

    /// Add a server note with an arbitrary id shape
    pub fn push_note(&self, id: NoteId, value: &str, checked: bool) {
        self.state.borrow_mut().notes.push((id, value.to_string(), checked));
    }

    /// Make every request of the named operation fail with a 500
    pub fn fail(&self, op: &'static str) {
        self.state.borrow_mut().failing.push(op);
    }

    /// Reply to the next creates with this record instead of echoing the request
    pub fn reply_to_create(&self, record: CreatedRecord) {
        self.state.borrow_mut().created_reply = Some(record);
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.borrow().requests.clone()
    }

    pub fn server_notes(&self) -> Vec<(NoteId, String, bool)> {
        self.state.borrow().notes.clone()
    }

    fn record(&self, op: &'static str, request: String) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request);
        if state.failing.contains(&op) {
            return Err(NoteError::Status { status: 500, url: op.to_string() });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn login(&self, credentials: &str) -> Result<String> {
        self.record("login", format!("POST /auth/login {}", credentials))?;
        Ok(format!("token-{}", credentials))
    }

    async fn list_notes(&self, token: &str) -> Result<Vec<NoteRecord>> {
        self.record("list", format!("GET /todo [{}]", token))?;
        let state = self.state.borrow();
        Ok(state
            .notes
            .iter()
            .map(|(id, value, checked)| NoteRecord { id: id.clone(), value: value.clone(), checked: *checked })
            .collect())
    }

    async fn create_note(&self, token: &str, args: &NoteArgs<'_>) -> Result<CreatedRecord> {
        self.record("create", format!("POST /todo {} {} [{}]", args.value, args.priority, token))?;
        // Let other tasks run while the request is "in flight"
        tokio::task::yield_now().await;
        let mut state = self.state.borrow_mut();
        if let Some(reply) = state.created_reply.clone() {
            return Ok(reply);
        }
        let id = NoteId::Number(state.next_id);
        state.next_id += 1;
        state.notes.push((id.clone(), args.value.to_string(), false));
        Ok(CreatedRecord { value: Some(args.value.to_string()), id: Some(id), checked: false })
    }

    async fn delete_note(&self, token: &str, id: &NoteId) -> Result<()> {
        self.record("delete", format!("DELETE /todo/{} [{}]", id, token))?;
        self.state.borrow_mut().notes.retain(|(note_id, _, _)| note_id != id);
        Ok(())
    }

    async fn update_note(&self, token: &str, id: &NoteId, args: &NoteArgs<'_>) -> Result<()> {
        self.record("update", format!("PUT /todo/{} {} {} [{}]", id, args.value, args.priority, token))?;
        if let Some(note) = self.state.borrow_mut().notes.iter_mut().find(|(note_id, _, _)| note_id == id) {
            note.1 = args.value.to_string();
        }
        Ok(())
    }

    async fn toggle_note(&self, token: &str, id: &NoteId) -> Result<()> {
        self.record("toggle", format!("PUT /todo/{}/toggle [{}]", id, token))?;
        if let Some(note) = self.state.borrow_mut().notes.iter_mut().find(|(note_id, _, _)| note_id == id) {
            note.2 = !note.2;
        }
        Ok(())
    }
}
