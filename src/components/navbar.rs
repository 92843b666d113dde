use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::{NavbarOptions, BRAND_NAME, NAVBAR_SCROLL_THRESHOLD};
use crate::content::content;

#[function_component(Navbar)]
pub fn navbar(options: &NavbarOptions) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD;

    html! {
        <header class={classes!("top-nav", "enter-down", scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: var(--glass);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid var(--border);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        color: var(--muted);
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .nav-link:hover {
                        color: var(--fg);
                        transform: translateY(-2px);
                    }
                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <a href="#" class="nav-logo text-gradient">{ BRAND_NAME }</a>
                <nav class="nav-links">
                    { for content().nav_links.iter().map(|link| html! {
                        <a key={link.anchor.clone()} href={format!("#{}", link.anchor)} class="nav-link">
                            { link.label.clone() }
                        </a>
                    }) }
                </nav>
                <div class="nav-actions">
                    if options.show_theme_toggle {
                        <ThemeToggle />
                    }
                    if options.show_sign_in {
                        <a href="#login" class="button ghost">{"Sign In"}</a>
                    }
                    if options.show_cta {
                        <a href="#tryit" class="button primary">{"Try Free"}</a>
                    }
                </div>
            </div>
        </header>
    }
}
