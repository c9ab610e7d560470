use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod motion;
mod state;
mod components {
    pub mod button;
    pub mod configurator;
    pub mod fade_in;
    pub mod faq;
    pub mod marquee;
    pub mod model_viewer;
    pub mod navbar;
    pub mod parallax_image;
    pub mod reveal_text;
}
mod pages {
    pub mod landing;
}

use components::navbar::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting ColdBoxers");
    yew::Renderer::<App>::new().render();
}
