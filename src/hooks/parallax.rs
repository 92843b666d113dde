use web_sys::HtmlElement;
use yew::prelude::*;

use crate::browser::parallax::ParallaxTracker;

/// Drives `layers` (in depth order) from pointer moves over `container`.
#[hook]
pub fn use_parallax(container: NodeRef, layers: Vec<NodeRef>) {
    use_effect_with_deps(
        move |(container, layers)| {
            let mut tracker = ParallaxTracker::new();
            if let Some(element) = container.cast::<HtmlElement>() {
                for layer in layers.iter().filter_map(|l| l.cast::<HtmlElement>()) {
                    tracker.register_layer(layer);
                }
                tracker.attach_container(&element);
            }
            move || tracker.detach()
        },
        (container, layers),
    );
}
