use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::content::content;
use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::RevealMargin;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone(), RevealMargin::Near);
    let active = use_state(|| 0usize);

    let testimonials = &content().testimonials;
    let Some(current) = testimonials.get(*active).or_else(|| testimonials.first()) else {
        return html! {};
    };

    html! {
        <section id="testimonials" class="page-section" ref={section}>
            <style>
                {r#"
                    .testimonial-card {
                        max-width: 56rem;
                        margin: 0 auto 2rem;
                        padding: 3rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .avatar {
                        width: 4rem;
                        height: 4rem;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 9999px;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: white;
                        background: linear-gradient(135deg, #a855f7, #4f46e5);
                    }
                    .testimonial-role {
                        color: var(--muted);
                    }
                    .testimonial-card blockquote {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        font-style: italic;
                        animation: fadeIn 0.5s ease;
                    }
                    .testimonial-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .testimonial-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--muted);
                        opacity: 0.4;
                        transition: all 0.3s ease;
                        cursor: pointer;
                    }
                    .testimonial-dot:hover {
                        opacity: 0.6;
                    }
                    .testimonial-dot.active {
                        width: 1.5rem;
                        opacity: 1;
                        background: #a855f7;
                    }
                "#}
            </style>
            <div class="blob blob-purple faint" style="top: 33%; left: 0; width: 18rem; height: 18rem;"></div>
            <div class="blob blob-indigo faint" style="bottom: 33%; right: 0; width: 24rem; height: 24rem;"></div>
            <div class="container">
                <Reveal {visible} class="section-header">
                    <h2 class="text-gradient">{"Loved by Designers"}</h2>
                    <p>{"See what creative professionals are saying about their experience with Aesthetic."}</p>
                </Reveal>
                <Reveal {visible} entrance={Entrance::rise(30.0).delay(0.2)}>
                    <div class="glass testimonial-card">
                        <div class="testimonial-author">
                            <div class="avatar">{ current.avatar.clone() }</div>
                            <div>
                                <h3>{ current.name.clone() }</h3>
                                <p class="testimonial-role">{ format!("{}, {}", current.role, current.company) }</p>
                            </div>
                        </div>
                        // Keyed so the quote remounts and fades in on every switch.
                        <blockquote key={(*active).to_string()}>{ format!("\"{}\"", current.content) }</blockquote>
                    </div>
                </Reveal>
                <Reveal {visible} entrance={Entrance::fade().delay(0.4)} class="testimonial-dots">
                    { for (0..testimonials.len()).map(|i| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(i))
                        };
                        html! {
                            <button
                                key={i.to_string()}
                                class={classes!("testimonial-dot", (*active == i).then_some("active"))}
                                aria-label={format!("View testimonial {}", i + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </Reveal>
            </div>
        </section>
    }
}
