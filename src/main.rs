use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod reveal;
mod stagger;

mod components {
    pub mod about;
    pub mod fallback_image;
    pub mod hero;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::site().log_level()).expect("error initializing log");

    if let Some(err) = config::site_error() {
        warn!("Falling back to default site config: {}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
