use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::content::{content, Feature};
use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::RevealMargin;

/// Stagger between consecutive cards, after a common lead-in.
fn card_delay(index: usize) -> f64 {
    0.2 + index as f64 * 0.1
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    delay: f64,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealMargin::Near);
    let Feature {
        title,
        description,
        icon,
    } = &props.feature;

    html! {
        <div ref={node} class="feature-card-slot">
            <Reveal {visible} entrance={Entrance::rise(30.0).delay(props.delay)}>
                <div class="glass feature-card lift">
                    <div class="feature-icon"><span>{ icon.clone() }</span></div>
                    <h3>{ title.clone() }</h3>
                    <p>{ description.clone() }</p>
                </div>
            </Reveal>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone(), RevealMargin::Far);

    html! {
        <section id="features" class="page-section" ref={section}>
            <style>
                {r#"
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 2rem;
                    }
                    .feature-card {
                        height: 100%;
                        padding: 2rem;
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }
                    .feature-card p {
                        color: var(--muted);
                        line-height: 1.6;
                    }
                    .feature-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        border-radius: 0.5rem;
                        font-size: 1.5rem;
                        background: var(--accent-soft);
                        border: 1px solid var(--border);
                    }
                    @media (max-width: 1024px) {
                        .features-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }
                    @media (max-width: 768px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal {visible} class="section-header">
                    <h2 class="text-gradient">{"Redefine What's Possible"}</h2>
                    <p>{"Aesthetic combines advanced AI technology with intuitive design principles to transform how you create."}</p>
                </Reveal>
                <div class="features-grid">
                    { for content().features.iter().enumerate().map(|(i, feature)| html! {
                        <FeatureCard key={feature.title.clone()} feature={feature.clone()} delay={card_delay(i)} />
                    }) }
                </div>
            </div>
            <div class="blob blob-purple faint" style="top: 25%; right: 0; width: 16rem; height: 16rem;"></div>
            <div class="blob blob-indigo faint" style="bottom: 25%; left: 0; width: 20rem; height: 20rem;"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::card_delay;

    #[test]
    fn cards_stagger_by_a_tenth_of_a_second() {
        let delays: Vec<f64> = (0..6).map(card_delay).collect();
        assert!((delays[0] - 0.2).abs() < 1e-9);
        assert!((delays[5] - 0.7).abs() < 1e-9);
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }
}
