use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod bindings;
mod catalog;
mod components;
mod config;
mod controller;
mod dates;
mod dom;
mod error;
mod state;
mod timers;
mod pages {
    pub mod landing;
}

use config::PageConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<PageConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing config={props.config.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    let config = Rc::new(PageConfig::load());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
