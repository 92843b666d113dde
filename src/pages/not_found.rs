use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        text-align: center;
                        font-family: system-ui, sans-serif;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        margin: 0;
                    }
                    .not-found a {
                        color: #a855f7;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page drifted out of view."}</p>
            <Link<Route> to={Route::Home}>{"Back to the landing page"}</Link<Route>>
            <ThemeToggle />
        </div>
    }
}
