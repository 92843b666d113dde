use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::content::content;
use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::RevealMargin;

/// Prompts shorter than this get no suggestions.
const SUGGESTION_MIN_CHARS: usize = 6;

fn suggestions_for<'a>(prompt: &str, all: &'a [String]) -> &'a [String] {
    if prompt.chars().count() >= SUGGESTION_MIN_CHARS {
        all
    } else {
        &[]
    }
}

#[function_component(LiveEditorSection)]
pub fn live_editor_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone(), RevealMargin::Near);
    let selected = use_state(|| None::<usize>);
    let hovered = use_state(|| None::<usize>);
    let prompt = use_state(String::new);

    let styles = &content().design_styles;
    let suggestions = suggestions_for(&prompt, &content().suggestions);

    let on_prompt = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            prompt.set(input.value());
        })
    };

    let reset = {
        let selected = selected.clone();
        let prompt = prompt.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(None);
            prompt.set(String::new());
        })
    };

    let canvas = match (*selected).and_then(|i| styles.get(i)) {
        Some(style) => html! {
            <div class={classes!("canvas", style.preview.clone())}>
                <div class="canvas-caption">
                    <p class="canvas-title">{ format!("{} Style", style.name) }</p>
                    <p class="canvas-description">{ style.description.clone() }</p>
                </div>
                <div class="canvas-frame"></div>
            </div>
        },
        None => html! {
            <div class="canvas canvas-empty">
                <div class="canvas-caption">
                    <p class="canvas-hint">{"Select a design style or start typing to see suggestions"}</p>
                    <textarea
                        class="prompt"
                        placeholder="Describe your design idea..."
                        rows="4"
                        value={(*prompt).clone()}
                        oninput={on_prompt}
                    />
                </div>
            </div>
        },
    };

    html! {
        <section id="live-editor" class="page-section" ref={section}>
            <style>
                {r#"
                    .editor-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                    }
                    .editor-canvas-panel {
                        height: 500px;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .editor-toolbar {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1rem;
                    }
                    .canvas {
                        position: relative;
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.5rem;
                        border: 1px solid var(--border);
                        text-align: center;
                    }
                    .canvas-empty {
                        background: var(--surface);
                    }
                    .canvas-frame {
                        position: absolute;
                        width: 75%;
                        height: 50%;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        border-radius: 0.5rem;
                        pointer-events: none;
                    }
                    .canvas-title {
                        font-size: 1.25rem;
                        font-weight: 500;
                    }
                    .canvas-hint,
                    .canvas-description {
                        color: var(--muted);
                        margin: 0.5rem 0 1rem;
                    }
                    .prompt {
                        width: 100%;
                        max-width: 28rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: var(--surface);
                        border: 1px solid var(--border);
                        color: inherit;
                        font: inherit;
                    }
                    .editor-sidebar {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .editor-sidebar .glass {
                        padding: 1.5rem;
                    }
                    .style-tile,
                    .suggestion {
                        display: flex;
                        align-items: center;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .style-tile:hover,
                    .suggestion:hover {
                        background: var(--surface);
                        transform: scale(1.02);
                    }
                    .style-tile.selected {
                        background: var(--accent-soft);
                        border: 1px solid var(--border);
                    }
                    .style-swatch {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.375rem;
                        margin-right: 0.75rem;
                    }
                    .style-tile small {
                        display: block;
                        color: var(--muted);
                    }
                    .preview-minimalist { background: linear-gradient(135deg, #111827, #1f2937); }
                    .preview-vibrant { background: linear-gradient(135deg, #ec4899, #eab308); }
                    .preview-elegant { background: linear-gradient(135deg, #312e81, #6b21a8); }
                    .preview-futuristic { background: linear-gradient(135deg, #06b6d4, #1d4ed8); }
                    @media (max-width: 1024px) {
                        .editor-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal {visible} class="section-header">
                    <h2 class="text-gradient">{"Design in Real-Time"}</h2>
                    <p>{"Experience the future of design with our AI-powered live editor. See your ideas transform instantly."}</p>
                </Reveal>
                <div class="editor-grid">
                    <Reveal {visible} entrance={Entrance::slide(-30.0).delay(0.2)}>
                        <div class="glass editor-canvas-panel">
                            <div class="editor-toolbar">
                                <h3>{"Canvas"}</h3>
                                <div>
                                    <button class="button outline small">{"Undo"}</button>
                                    <button class="button outline small" onclick={reset}>{"Reset"}</button>
                                </div>
                            </div>
                            { canvas }
                        </div>
                    </Reveal>
                    <Reveal {visible} entrance={Entrance::slide(30.0).delay(0.4)} class="editor-sidebar">
                        <div class="glass">
                            <h3>{"Design Styles"}</h3>
                            { for styles.iter().enumerate().map(|(i, style)| {
                                let onclick = {
                                    let selected = selected.clone();
                                    Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                                };
                                let onmouseenter = {
                                    let hovered = hovered.clone();
                                    Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                                };
                                let onmouseleave = {
                                    let hovered = hovered.clone();
                                    Callback::from(move |_: MouseEvent| hovered.set(None))
                                };
                                html! {
                                    <div
                                        key={style.name.clone()}
                                        class={classes!(
                                            "style-tile",
                                            (*selected == Some(i)).then_some("selected"),
                                            (*hovered == Some(i)).then_some("hovered"),
                                        )}
                                        {onclick}
                                        {onmouseenter}
                                        {onmouseleave}
                                    >
                                        <div class={classes!("style-swatch", style.preview.clone())}></div>
                                        <div>
                                            <p>{ style.name.clone() }</p>
                                            <small>{ style.description.clone() }</small>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                        if !suggestions.is_empty() {
                            <div class="glass">
                                <h3>{"AI Suggestions"}</h3>
                                { for suggestions.iter().enumerate().map(|(i, suggestion)| html! {
                                    <div
                                        key={i.to_string()}
                                        class="suggestion enter-up"
                                        style={format!("animation-delay: {}s;", i as f64 * 0.1)}
                                    >
                                        <p>{ suggestion.clone() }</p>
                                    </div>
                                }) }
                            </div>
                        }
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<String> {
        vec!["Add depth".to_string(), "Use contrast".to_string()]
    }

    #[test]
    fn short_prompts_get_nothing() {
        let all = all();
        assert!(suggestions_for("", &all).is_empty());
        assert!(suggestions_for("hello", &all).is_empty());
    }

    #[test]
    fn longer_prompts_get_every_suggestion() {
        let all = all();
        assert_eq!(suggestions_for("hello!", &all), all.as_slice());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let all = all();
        assert!(suggestions_for("ééééé", &all).is_empty());
    }
}
