//! Todo List Component
//!
//! The list container. A single delegated click handler finds the entry
//! and the control that was clicked and hands both to the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::NoteEntry;
use crate::context::use_app_context;
use crate::controller::EntryAction;
use crate::models::NoteId;
use crate::render::{class, EntryList};

/// Entry id and action for a click, or `None` for clicks outside an entry's controls.
///
/// The `data-id` text is matched against the rendered entries so the id keeps
/// the shape the server gave it.
fn clicked_action(ev: &web_sys::MouseEvent, entries: &EntryList) -> Option<(NoteId, EntryAction)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let item = target.closest(&format!(".{}", class::ITEM)).ok()??;
    let action = EntryAction::from_class(&target.class_name())?;
    let raw_id = item.get_attribute("data-id")?;
    Some((entries.id_for_data_id(&raw_id)?, action))
}

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some((id, action)) = ctx.entries.with_untracked(|list| clicked_action(&ev, list)) else {
            return;
        };
        let controller = ctx.controller();
        spawn_local(async move {
            if let Err(e) = controller.handle_action(id.clone(), action).await {
                log::error!("{:?} on entry {} failed: {}", action, id, e);
            }
        });
    };

    view! {
        <ul class=class::LIST on:click=on_click>
            <For
                each=move || ctx.entries.with(|list| list.iter().cloned().collect::<Vec<_>>())
                key=|entry| (entry.id.clone(), entry.text.clone(), entry.completed, entry.is_editing())
                children=move |entry| view! { <NoteEntry entry=entry /> }
            />
        </ul>
    }
}
