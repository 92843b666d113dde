use log::Level;
use yew::Properties;

use crate::motion::spring::SpringConfig;
use crate::theme::Theme;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose tracker lifecycle when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Visible fraction a region must reach before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Inset applied to the viewport edges for card-level reveals.
pub const NEAR_MARGIN_PX: f64 = 100.0;
/// Inset applied to the viewport edges for section-header reveals.
pub const FAR_MARGIN_PX: f64 = 200.0;

/// Pixel travel of a layer at depth 1.0 for a pointer at the container edge.
pub const PARALLAX_STRENGTH: f64 = 50.0;
pub const PARALLAX_BASE_DEPTH: f64 = 0.1;
pub const PARALLAX_DEPTH_STEP: f64 = 0.1;

pub const PRESS_PULSE_MS: f64 = 150.0;
/// Longest frame gap the cursor springs integrate. Anything longer (a hidden
/// tab, a debugger pause) counts as this much.
pub const MAX_FRAME_GAP_MS: f64 = 100.0;
pub const PRESS_SCALE: f64 = 0.7;
pub const HOVER_SCALE: f64 = 2.0;

pub const DOT_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 25.0,
    mass: 1.0,
    delay_ms: 0.0,
};

pub const RING_SPRING: SpringConfig = SpringConfig {
    stiffness: 150.0,
    damping: 40.0,
    mass: 1.0,
    delay_ms: 20.0,
};

/// Elements that switch the cursor into its hover state.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";
pub const DEFAULT_THEME: Theme = Theme::Dark;

/// Scroll offset after which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

pub const BRAND_NAME: &str = "Aesthetic";

/// Feature flags for the single navbar component.
#[derive(Properties, PartialEq, Clone, Debug)]
pub struct NavbarOptions {
    /// Render the light/dark switch on the right side.
    #[prop_or(true)]
    pub show_theme_toggle: bool,
    /// Render the ghost "Sign In" link.
    #[prop_or(true)]
    pub show_sign_in: bool,
    /// Render the gradient "Try Free" call to action.
    #[prop_or(true)]
    pub show_cta: bool,
}

impl Default for NavbarOptions {
    fn default() -> Self {
        Self {
            show_theme_toggle: true,
            show_sign_in: true,
            show_cta: true,
        }
    }
}
