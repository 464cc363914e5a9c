//! New Note Form Component
//!
//! Single-field form for adding a note. Hidden until sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn NewNoteForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let controller = ctx.controller();

        spawn_local(async move {
            match controller.submit_note(&text).await {
                Ok(true) => set_new_text.set(String::new()),
                Ok(false) => {}
                Err(e) => log::error!("could not add {:?}: {}", text, e),
            }
        });
    };

    view! {
        <form
            class="todo__input-form"
            style:display=move || if ctx.signed_in.get() { "" } else { "none" }
            on:submit=add_note
        >
            <input
                type="text"
                name="text"
                placeholder="Add new note..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
