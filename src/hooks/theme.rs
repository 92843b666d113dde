use yew::prelude::*;

use crate::theme::Theme;

/// Current theme plus the one way to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}
