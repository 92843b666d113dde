use yew::prelude::*;

/// Where a block starts before it is revealed, and how it gets to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from_x: f64,
    pub from_y: f64,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
}

impl Entrance {
    pub const fn rise(distance: f64) -> Self {
        Self {
            from_x: 0.0,
            from_y: distance,
            duration: 0.7,
            delay: 0.0,
        }
    }

    pub const fn slide(distance: f64) -> Self {
        Self {
            from_x: distance,
            from_y: 0.0,
            duration: 0.7,
            delay: 0.0,
        }
    }

    pub const fn fade() -> Self {
        Self::rise(0.0)
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Inline style for the hidden or revealed end state.
    pub fn style(&self, visible: bool) -> String {
        let (opacity, x, y) = if visible {
            (1.0, 0.0, 0.0)
        } else {
            (0.0, self.from_x, self.from_y)
        };
        format!(
            "opacity: {opacity}; transform: translate3d({x}px, {y}px, 0); \
             transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
            d = self.duration,
            delay = self.delay,
        )
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::rise(30.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub visible: bool,
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Switches its children between the two entrance end states.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div class={props.class.clone()} style={props.entrance.style(props.visible)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_offsets_and_fades() {
        let style = Entrance::rise(30.0).delay(0.3).style(false);
        assert!(style.starts_with("opacity: 0; transform: translate3d(0px, 30px, 0);"));
        assert!(style.contains("opacity 0.7s ease-out 0.3s"));
    }

    #[test]
    fn revealed_state_rests_at_origin() {
        let style = Entrance::slide(-30.0).style(true);
        assert!(style.starts_with("opacity: 1; transform: translate3d(0px, 0px, 0);"));
    }

    #[test]
    fn fade_has_no_travel() {
        let style = Entrance::fade().duration(1.0).style(false);
        assert!(style.contains("translate3d(0px, 0px, 0)"));
        assert!(style.contains("transform 1s"));
    }
}
