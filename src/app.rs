//! Todo App
//!
//! Root component: auth form, add form, note list and the statistics line.

use leptos::prelude::*;

use crate::components::{AuthForm, NewNoteForm, TodoList};
use crate::context::AppContext;
use crate::controller::Controller;

#[component]
pub fn App(controller: Controller) -> impl IntoView {
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    view! {
        <main class="todo">
            <h1>"Todo"</h1>

            <AuthForm />
            <NewNoteForm />

            <TodoList />

            <p class="todo__statistics">{move || ctx.statistics.get().summary()}</p>
        </main>
    }
}
