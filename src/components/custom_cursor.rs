use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::browser::cursor::CursorTracker;

/// The two-layer cursor, painted above the page and ignoring pointer events.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot = use_node_ref();
    let ring = use_node_ref();

    {
        let dot = dot.clone();
        let ring = ring.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = match (dot.cast::<HtmlElement>(), ring.cast::<HtmlElement>()) {
                    (Some(dot), Some(ring)) => CursorTracker::mount(dot, ring),
                    _ => None,
                };
                if tracker.is_none() {
                    warn!("Custom cursor unavailable, keeping the system pointer");
                }
                move || drop(tracker)
            },
            (),
        );
    }

    html! {
        <>
            <div class="cursor-layer cursor-dot" ref={dot}></div>
            <div class="cursor-layer cursor-ring" ref={ring}></div>
        </>
    }
}
