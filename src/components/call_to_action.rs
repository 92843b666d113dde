use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::content::content;
use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::RevealMargin;

#[function_component(CallToActionSection)]
pub fn call_to_action_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone(), RevealMargin::Near);
    let cta = &content().call_to_action;

    html! {
        <section class="page-section" ref={section}>
            <style>
                {r#"
                    .cta-panel {
                        position: relative;
                        overflow: hidden;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 4rem 3rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(79, 70, 229, 0.2));
                        border: 1px solid var(--border);
                    }
                    .cta-panel h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .cta-panel p {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        font-size: 1.125rem;
                        color: var(--muted);
                    }
                    .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                "#}
            </style>
            <div class="container">
                <Reveal {visible} entrance={Entrance::fade().duration(1.0)}>
                    <div class="cta-panel">
                        <div class="blob blob-purple faint" style="top: -4rem; left: -4rem; width: 16rem; height: 16rem;"></div>
                        <div class="blob blob-indigo faint" style="bottom: -4rem; right: -4rem; width: 16rem; height: 16rem;"></div>
                        <Reveal {visible} entrance={Entrance::rise(20.0).delay(0.2)}>
                            <h2 class="text-gradient">{ cta.title.clone() }</h2>
                        </Reveal>
                        <Reveal {visible} entrance={Entrance::rise(20.0).delay(0.3)}>
                            <p>{ cta.body.clone() }</p>
                        </Reveal>
                        <Reveal {visible} entrance={Entrance::fade().delay(0.4)} class="cta-actions">
                            <button class="button primary large">{"Start Free Trial"}</button>
                            <button class="button outline large">{"Book a Demo"}</button>
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
