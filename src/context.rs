//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::controller::Controller;
use crate::models::Statistics;
use crate::render::EntryList;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The page's controller; kept thread-local since it holds the store by `Rc`
    controller: StoredValue<Controller, LocalStorage>,
    /// Whether the auth form was submitted
    pub signed_in: ReadSignal<bool>,
    /// Rendered list entries in display order
    pub entries: ReadSignal<EntryList>,
    /// Counts shown under the list
    pub statistics: ReadSignal<Statistics>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            signed_in: controller.signed_in(),
            entries: controller.renderer().entries(),
            statistics: controller.renderer().statistics(),
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
