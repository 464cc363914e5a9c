//! UI Components
//!
//! Leptos components for the forms and the note list.

mod auth_form;
mod new_note_form;
mod note_entry;
mod todo_list;

pub use auth_form::AuthForm;
pub use new_note_form::NewNoteForm;
pub use note_entry::NoteEntry;
pub use todo_list::TodoList;
