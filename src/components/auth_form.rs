//! Auth Form Component
//!
//! Login/password form shown until the user signs in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn AuthForm() -> impl IntoView {
    let ctx = use_app_context();

    let (login, set_login) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        let login = login.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            if let Err(e) = controller.submit_auth(&login, &password).await {
                log::error!("sign-in failed: {}", e);
            }
        });
    };

    view! {
        <form
            class="todo__auth-form"
            style:display=move || if ctx.signed_in.get() { "none" } else { "" }
            on:submit=sign_in
        >
            <input
                type="text"
                name="login"
                placeholder="Login"
                prop:value=move || login.get()
                on:input=move |ev| set_login.set(event_target_value(&ev))
            />
            <input
                type="password"
                name="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Sign in"</button>
        </form>
    }
}
