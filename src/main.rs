use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod subscribers;
mod tracking;
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;
mod components {
    pub mod fade_in;
    pub mod header;
    pub mod modal;
    pub mod newsletter;
    pub mod notification;
    pub mod sparkles;
    pub mod vintage_item;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
