use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::call_to_action::CallToActionSection;
use crate::components::custom_cursor::CustomCursor;
use crate::components::features::FeaturesSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::live_editor::LiveEditorSection;
use crate::components::navbar::Navbar;
use crate::components::pricing::PricingSection;
use crate::components::testimonials::TestimonialsSection;
use crate::config::NavbarOptions;
use crate::hooks::reveal::RevealContext;
use crate::motion::reveal::{RegionId, RevealMargin};

const FADE_IN_CLASS: &str = "animate-fade-in";

/// Every `<section>` on the page, in document order.
fn page_sections() -> Vec<Element> {
    let Some(list) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all("section").ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let reveal = use_state(RevealContext::new);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Page-level fade-in, one shot per section.
    {
        let reveal = (*reveal).clone();
        use_effect_with_deps(
            move |_| {
                let regions: Vec<RegionId> = page_sections()
                    .into_iter()
                    .filter_map(|section| {
                        let target = section.clone();
                        let on_reveal = Callback::from(move |_| {
                            let _ = target.class_list().add_1(FADE_IN_CLASS);
                        });
                        reveal.engine().register(&section, RevealMargin::Edge, on_reveal)
                    })
                    .collect();
                debug!("Watching {} page sections", regions.len());
                move || {
                    for id in regions {
                        reveal.engine().unregister(id);
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<RevealContext> context={(*reveal).clone()}>
            <style>
                {r#"
                    html.dark {
                        --bg: #0b0b12;
                        --fg: #f5f5f7;
                        --muted: rgba(255, 255, 255, 0.6);
                        --border: rgba(255, 255, 255, 0.1);
                        --glass: rgba(11, 11, 18, 0.7);
                        --surface: rgba(255, 255, 255, 0.05);
                        --accent-soft: rgba(168, 85, 247, 0.15);
                        --accent-wash: rgba(88, 28, 135, 0.2);
                        color-scheme: dark;
                    }
                    html.light {
                        --bg: #fafafa;
                        --fg: #111827;
                        --muted: rgba(17, 24, 39, 0.6);
                        --border: rgba(17, 24, 39, 0.1);
                        --glass: rgba(250, 250, 250, 0.75);
                        --surface: rgba(17, 24, 39, 0.04);
                        --accent-soft: rgba(168, 85, 247, 0.1);
                        --accent-wash: rgba(196, 181, 253, 0.3);
                        color-scheme: light;
                    }
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--fg);
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        transition: background 0.3s ease, color 0.3s ease;
                        overflow-x: hidden;
                    }
                    a {
                        color: inherit;
                    }
                    .container {
                        width: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .page-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                    }
                    .section-header {
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                        text-align: center;
                    }
                    .section-header h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .section-header p {
                        font-size: 1.125rem;
                        color: var(--muted);
                    }
                    .text-gradient {
                        background: linear-gradient(to right, var(--fg), var(--muted));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .text-gradient-accent {
                        background: linear-gradient(to right, #c084fc, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .glass {
                        background: var(--surface);
                        backdrop-filter: blur(12px);
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                    }
                    .lift {
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .lift:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 20px 40px rgba(168, 85, 247, 0.1);
                    }
                    .blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.3;
                        pointer-events: none;
                        transition: transform 0.2s ease-out;
                    }
                    .blob.faint {
                        opacity: 0.1;
                    }
                    .blob-purple {
                        background: #a855f7;
                    }
                    .blob-indigo {
                        background: #6366f1;
                    }
                    .button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid transparent;
                        font: inherit;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .button.primary {
                        color: white;
                        background: linear-gradient(to right, #a855f7, #4f46e5);
                    }
                    .button.primary:hover {
                        box-shadow: 0 10px 30px rgba(168, 85, 247, 0.25);
                    }
                    .button.ghost {
                        color: inherit;
                        background: transparent;
                    }
                    .button.ghost:hover {
                        background: var(--surface);
                    }
                    .button.outline {
                        color: inherit;
                        background: transparent;
                        border-color: var(--border);
                    }
                    .button.outline:hover {
                        background: var(--surface);
                    }
                    .button.large {
                        padding: 0.875rem 2rem;
                        font-size: 1.125rem;
                    }
                    .button.small {
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                    }
                    .theme-toggle {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        background: var(--surface);
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .theme-toggle:hover {
                        transform: scale(1.1);
                    }
                    .cursor-layer {
                        position: fixed;
                        top: 0;
                        left: 0;
                        z-index: 9999;
                        border-radius: 9999px;
                        pointer-events: none;
                        mix-blend-mode: difference;
                        will-change: transform, opacity;
                    }
                    .cursor-dot {
                        width: 8px;
                        height: 8px;
                        margin: -4px 0 0 -4px;
                        background: white;
                    }
                    .cursor-ring {
                        width: 32px;
                        height: 32px;
                        margin: -16px 0 0 -16px;
                        border: 1px solid white;
                    }
                    @media (hover: none) {
                        .cursor-layer {
                            display: none;
                        }
                    }
                    .enter-up {
                        animation: enterUp 0.7s ease-out backwards;
                    }
                    .enter-down {
                        animation: enterDown 0.5s ease-out backwards;
                    }
                    .animate-fade-in {
                        animation: fadeIn 0.8s ease-out;
                    }
                    @keyframes enterUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes enterDown {
                        from { opacity: 0; transform: translateY(-100px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <CustomCursor />
            <Navbar ..NavbarOptions::default() />
            <main>
                <HeroSection />
                <FeaturesSection />
                <LiveEditorSection />
                <TestimonialsSection />
                <PricingSection />
                <CallToActionSection />
            </main>
            <Footer />
        </ContextProvider<RevealContext>>
    }
}
