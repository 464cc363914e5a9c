//! Todo Notes Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod render;
mod session;
mod store;

use std::rc::Rc;

use app::App;
use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::session::LocalStorageTokens;
use crate::store::NoteStore;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    wasm_logger::init(wasm_logger::Config::new(
        config.log_level().to_level().unwrap_or(log::Level::Info),
    ));
    log::info!("using API at {}", config.api_root());

    let store = Rc::new(NoteStore::new(
        Rc::new(HttpApi::new(config.api_root())),
        Box::new(LocalStorageTokens::new(config.token_key.clone())),
        config.default_priority,
    ));

    mount_to_body(move || {
        let controller = Controller::new(store);
        view! { <App controller=controller /> }
    });
}
