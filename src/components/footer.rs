use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::config::BRAND_NAME;
use crate::hooks::reveal::use_reveal;
use crate::motion::reveal::RevealMargin;

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "Pricing", "Live Editor", "Changelog"]),
    ("Company", ["About", "Careers", "Blog", "Press"]),
    ("Resources", ["Documentation", "Community", "Support", "Privacy"]),
];

fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealMargin::Edge);
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer" ref={node}>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 0 2rem;
                        border-top: 1px solid var(--border);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr repeat(3, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-grid h4 {
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-grid li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-grid a,
                    .footer-tagline,
                    .footer-bottom {
                        color: var(--muted);
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .footer-grid a:hover {
                        color: var(--fg);
                    }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <Reveal {visible} entrance={Entrance::fade().duration(0.5)} class="container">
                <div class="footer-grid">
                    <div>
                        <a href="#" class="nav-logo text-gradient">{ BRAND_NAME }</a>
                        <p class="footer-tagline">{"AI-powered design for creative minds."}</p>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                        <div key={*heading}>
                            <h4>{ *heading }</h4>
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{ *link }</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <p class="footer-bottom">{ copyright(year) }</p>
            </Reveal>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright;

    #[test]
    fn copyright_names_the_year_and_brand() {
        assert_eq!(copyright(2026), "© 2026 Aesthetic. All rights reserved.");
    }
}
