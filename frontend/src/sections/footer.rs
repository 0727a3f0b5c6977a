use chrono::Datelike;
use yew::prelude::*;

use crate::components::section::{FadeUp, Section};
use crate::content::{FooterLink, FOOTER_LINKS};
use crate::motion::reveal::RevealStyle;

fn footer_links(links: &[FooterLink]) -> Html {
    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            html! {
                <span key={link.href} class="footer-link">
                    { if i > 0 { html! { <span class="footer-sep">{"|"}</span> } } else { html! {} } }
                    <a href={link.href}>{link.label}</a>
                </span>
            }
        })
        .collect()
}

pub fn colophon(year: i32) -> String {
    format!("Propulsé par OpenClaw · Construit avec les pinces · {}", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <Section margin={0} class="footer-inner">
                <FadeUp reveal={RevealStyle::FADE_UP_SHORT}>
                    <p class="footer-quote">
                        <span class="muted">{"“"}</span>
                        {"Je pince, donc je suis."}
                        <span class="muted">{"”"}</span>
                        {" "}
                        <span class="footer-lobster">{"🦞"}</span>
                    </p>
                </FadeUp>

                <div class="footer-links">
                    { footer_links(FOOTER_LINKS) }
                </div>

                <p class="footer-colophon">{colophon(year)}</p>
            </Section>

            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid var(--border);
                        padding: 4rem 6rem;
                    }

                    .footer-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .footer-quote {
                        margin: 0;
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        font-weight: 800;
                        letter-spacing: -0.025em;
                    }

                    .footer-lobster {
                        display: inline-block;
                    }

                    .footer-links {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                    }

                    .footer-link a {
                        color: var(--muted);
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-link a:hover {
                        color: var(--text);
                    }

                    .footer-sep {
                        margin-right: 1.5rem;
                        color: var(--border);
                    }

                    .footer-colophon {
                        font-family: var(--font-body);
                        font-size: 0.75rem;
                        color: var(--muted);
                        opacity: 0.4;
                    }

                    @media (max-width: 768px) {
                        .site-footer {
                            padding: 4rem 1.5rem;
                        }

                        .footer-quote {
                            font-size: 1.875rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn colophon_carries_the_year() {
        assert_eq!(
            colophon(2026),
            "Propulsé par OpenClaw · Construit avec les pinces · 2026"
        );
    }

    #[test]
    fn every_link_is_rendered() {
        match footer_links(FOOTER_LINKS) {
            VNode::VList(list) => assert_eq!(list.len(), FOOTER_LINKS.len()),
            _ => panic!("expected a list of links"),
        }
    }
}
