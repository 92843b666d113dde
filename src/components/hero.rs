use yew::prelude::*;

use crate::content::content;
use crate::hooks::parallax::use_parallax;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let hero = &content().hero;
    let container = use_node_ref();
    let blob_a = use_node_ref();
    let blob_b = use_node_ref();
    let preview = use_node_ref();

    use_parallax(
        container.clone(),
        vec![blob_a.clone(), blob_b.clone(), preview.clone()],
    );

    html! {
        <section class="hero" ref={container}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        background: linear-gradient(to bottom, var(--accent-wash), var(--bg));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: var(--muted);
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-preview {
                        position: relative;
                        width: 100%;
                        max-width: 72rem;
                        margin: 4rem auto 0;
                        padding: 0 1rem;
                    }
                    .hero-preview-panel {
                        height: clamp(300px, 40vw, 500px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        color: var(--muted);
                    }
                "#}
            </style>
            <div class="hero-backdrop">
                <div class="blob blob-purple" style="top: 25%; left: 25%; width: 16rem; height: 16rem;" ref={blob_a}></div>
                <div class="blob blob-indigo" style="bottom: 25%; right: 25%; width: 20rem; height: 20rem;" ref={blob_b}></div>
            </div>
            <div class="container hero-content">
                <h1 class="text-gradient enter-up" style="animation-delay: 0.2s;">
                    { hero.title.clone() }
                    <br />
                    <span class="text-gradient-accent">{ hero.highlight.clone() }</span>
                </h1>
                <p class="hero-subtitle enter-up" style="animation-delay: 0.4s;">
                    { hero.subtitle.clone() }
                </p>
                <div class="hero-cta-group enter-up" style="animation-delay: 0.6s;">
                    <button class="button primary large">{ hero.primary_cta.clone() }</button>
                    <button class="button outline large">{ hero.secondary_cta.clone() }</button>
                </div>
            </div>
            <div class="hero-preview enter-up" style="animation-delay: 0.8s; animation-duration: 1s;">
                // The entrance animation owns the wrapper's transform, parallax moves the panel.
                <div class="glass hero-preview-panel" ref={preview}>
                    { hero.preview_label.clone() }
                </div>
            </div>
        </section>
    }
}
