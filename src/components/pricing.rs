use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::content::{content, PricingTier};
use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::RevealMargin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// Price shown per month for `tier`. Yearly billing takes the discount and
/// rounds to whole dollars; tiers without a list price read "Custom".
pub fn price_label(tier: &PricingTier, cycle: BillingCycle, discount_percent: u32) -> String {
    match (tier.monthly_usd, cycle) {
        (None, _) => "Custom".to_string(),
        (Some(usd), BillingCycle::Monthly) => format!("${}", usd),
        (Some(usd), BillingCycle::Yearly) => {
            let discounted = (usd * (100 - discount_percent.min(100)) + 50) / 100;
            format!("${}", discounted)
        }
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone(), RevealMargin::Near);
    let cycle = use_state(|| BillingCycle::Monthly);
    let pricing = &content().pricing;

    let cycle_button = |target: BillingCycle, label: Html| {
        let onclick = {
            let cycle = cycle.clone();
            Callback::from(move |_: MouseEvent| cycle.set(target))
        };
        html! {
            <button class={classes!("cycle-option", (*cycle == target).then_some("active"))} {onclick}>
                { label }
            </button>
        }
    };

    html! {
        <section id="pricing" class="page-section" ref={section}>
            <style>
                {r#"
                    .cycle-switch {
                        display: inline-flex;
                        margin-top: 2rem;
                        padding: 0.25rem;
                        border-radius: 9999px;
                        background: var(--surface);
                    }
                    .cycle-option {
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: var(--muted);
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .cycle-option.active {
                        color: white;
                        background: linear-gradient(to right, #a855f7, #4f46e5);
                    }
                    .cycle-option small {
                        opacity: 0.75;
                    }
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 2rem;
                    }
                    .pricing-card {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        transition: transform 0.2s ease;
                    }
                    .pricing-card:hover {
                        transform: translateY(-8px);
                    }
                    .pricing-card.popular {
                        margin-top: -1rem;
                    }
                    .popular-badge {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        color: white;
                        background: linear-gradient(to right, #a855f7, #4f46e5);
                    }
                    .pricing-head {
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .price {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .price-unit,
                    .pricing-head p {
                        color: var(--muted);
                    }
                    .tier-features {
                        list-style: none;
                        padding: 0;
                    }
                    .tier-features li {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .tier-features li::before {
                        content: "✓";
                        color: #c084fc;
                    }
                    @media (max-width: 768px) {
                        .pricing-grid {
                            grid-template-columns: 1fr;
                        }
                        .pricing-card.popular {
                            margin-top: 0;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal {visible} class="section-header">
                    <h2 class="text-gradient">{"Simple, Transparent Pricing"}</h2>
                    <p>{"Choose the plan that works best for you or your team. All plans include core features."}</p>
                    <Reveal {visible} entrance={Entrance::fade().delay(0.2)}>
                        <div class="cycle-switch">
                            { cycle_button(BillingCycle::Monthly, html! { {"Monthly"} }) }
                            { cycle_button(BillingCycle::Yearly, html! {
                                <>
                                    {"Yearly "}
                                    <small>{ format!("Save {}%", pricing.yearly_discount_percent) }</small>
                                </>
                            }) }
                        </div>
                    </Reveal>
                </Reveal>
                <div class="pricing-grid">
                    { for pricing.tiers.iter().enumerate().map(|(i, tier)| {
                        let price = price_label(tier, *cycle, pricing.yearly_discount_percent);
                        html! {
                            <Reveal
                                key={tier.name.clone()}
                                {visible}
                                entrance={Entrance::rise(50.0).delay(0.2 + i as f64 * 0.1)}
                            >
                                <div class={classes!("glass", "pricing-card", tier.popular.then_some("popular"))}>
                                    if tier.popular {
                                        <span class="popular-badge">{"Most Popular"}</span>
                                    }
                                    <div class="pricing-head">
                                        <h3>{ tier.name.clone() }</h3>
                                        <div>
                                            <span class="price">{ price }</span>
                                            if tier.monthly_usd.is_some() {
                                                <span class="price-unit">{" /month"}</span>
                                            }
                                        </div>
                                        <p>{ tier.description.clone() }</p>
                                    </div>
                                    <ul class="tier-features">
                                        { for tier.features.iter().map(|feature| html! {
                                            <li key={feature.clone()}>{ feature.clone() }</li>
                                        }) }
                                    </ul>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
            <div class="blob blob-purple faint" style="bottom: 0; left: 25%; width: 24rem; height: 24rem;"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(monthly_usd: Option<u32>) -> PricingTier {
        PricingTier {
            name: "Pro".to_string(),
            monthly_usd,
            description: String::new(),
            features: Vec::new(),
            popular: false,
        }
    }

    #[test]
    fn monthly_shows_list_price() {
        assert_eq!(price_label(&tier(Some(49)), BillingCycle::Monthly, 20), "$49");
    }

    #[test]
    fn yearly_applies_the_discount() {
        assert_eq!(price_label(&tier(Some(49)), BillingCycle::Yearly, 20), "$39");
        assert_eq!(price_label(&tier(Some(19)), BillingCycle::Yearly, 20), "$15");
    }

    #[test]
    fn custom_tier_ignores_the_cycle() {
        for cycle in [BillingCycle::Monthly, BillingCycle::Yearly] {
            assert_eq!(price_label(&tier(None), cycle, 20), "Custom");
        }
    }
}
