//! Note Entry Component
//!
//! One `<li>` of the list, in display or inline-edit form. Clicks on the
//! controls are handled by the list, matched by class name.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::{class, Entry, EntryMode};

#[component]
pub fn NoteEntry(entry: Entry) -> impl IntoView {
    let ctx = use_app_context();

    let item_class = entry.class_name();
    let data_id = entry.id.to_string();
    let completed = entry.completed;

    let body = match entry.mode {
        EntryMode::Viewing => view! {
            <input type="checkbox" class=class::CHECKBOX checked=completed />
            <p class=class::TEXT>{entry.text}</p>
            <div class=class::BUTTONS>
                <button class=class::REMOVE>"Remove"</button>
                <button class=class::CHANGE>"Change"</button>
            </div>
        }
        .into_any(),
        EntryMode::Editing { draft } => {
            let id = entry.id;
            view! {
                <input type="checkbox" class=class::CHECKBOX checked=completed disabled=true />
                <form class=class::CHANGE_FORM on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                    <input
                        class=class::CHANGE_INPUT
                        type="text"
                        name="text"
                        value=draft
                        on:input=move |ev| {
                            ctx.controller().renderer().update_draft(&id, event_target_value(&ev));
                        }
                    />
                </form>
                <div class=class::BUTTONS>
                    <button class=class::APPLY>"Apply"</button>
                    <button class=class::UNDO>"Undo"</button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <li class=item_class data-id=data_id>
            {body}
        </li>
    }
}
