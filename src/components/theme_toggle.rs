use yew::prelude::*;

use crate::browser::theme::browser_theme_store;
use crate::hooks::theme::{use_theme, ThemeContext};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's single theme store. Resolves once on mount.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(browser_theme_store);
    let theme = {
        let store = store.clone();
        use_state(move || store.borrow_mut().resolve_initial())
    };

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = store.borrow_mut().toggle();
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Icon and accessible label offering the other theme.
fn toggle_face(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("☀️", "Switch to light theme"),
        Theme::Light => ("🌙", "Switch to dark theme"),
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let context = use_theme();
    let Some(ThemeContext { theme, toggle }) = context else {
        return html! {};
    };

    let (icon, label) = toggle_face(theme);

    html! {
        <button
            class="theme-toggle"
            aria-label={label}
            onclick={Callback::from(move |_: MouseEvent| toggle.emit(()))}
        >
            { icon }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_offers_the_other_theme() {
        assert_eq!(toggle_face(Theme::Dark).1, "Switch to light theme");
        assert_eq!(toggle_face(Theme::Light).1, "Switch to dark theme");
        assert_ne!(toggle_face(Theme::Dark).0, toggle_face(Theme::Light).0);
    }
}
