use log::{info, Level};
use yew::prelude::*;

mod config;
mod contact;
mod hooks;
mod motion;
mod scroll;

mod components {
    pub mod about;
    pub mod back_to_top;
    pub mod background;
    pub mod contact;
    pub mod experience;
    pub mod expertise;
    pub mod footer;
    pub mod hero;
    pub mod navigation;
    pub mod philosophy;
    pub mod portfolio;
    pub mod process;
    pub mod reveal;
    pub mod stats;
    pub mod testimonials;
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
