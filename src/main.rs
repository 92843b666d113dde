use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod content;
mod motion;
mod theme;
mod components {
    pub mod call_to_action;
    pub mod custom_cursor;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod live_editor;
    pub mod navbar;
    pub mod pricing;
    pub mod reveal;
    pub mod testimonials;
    pub mod theme_toggle;
}
mod hooks {
    pub mod parallax;
    pub mod reveal;
    pub mod theme;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::theme_toggle::ThemeProvider;
use pages::{landing::Landing, not_found::NotFound};

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
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
