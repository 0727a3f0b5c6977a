use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::sections::footer::Footer;
use crate::sections::gallery::Gallery;
use crate::sections::hero::Hero;
use crate::sections::newsletter::Newsletter;
use crate::sections::offers::Offers;
use crate::sections::roadmap::Roadmap;
use crate::theme::Theme;

/// Page-level rules outside the themed root (`body` background and text).
#[function_component(ThemeStyles)]
fn theme_styles() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let c = theme.config();

    html! {
        <Global css={css!(
            r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: ${bg};
                    color: ${text};
                    font-family: ${body};
                    -webkit-font-smoothing: antialiased;
                }
            "#,
            bg = c.palette.background,
            text = c.palette.text,
            body = c.fonts.body,
        )} />
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    info!("Rendering landing page with {} theme", theme);

    html! {
        <main class="landing-page">
            <ThemeStyles />
            <Hero />
            <Newsletter />
            <Offers />
            <Gallery />
            <Roadmap />
            <Footer />
            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        overflow-x: hidden;
                    }

                    .theme-whiteboard {
                        background-image: radial-gradient(rgba(31, 41, 55, 0.08) 1px, transparent 1px);
                        background-size: 24px 24px;
                    }

                    .theme-editorial .section-title {
                        font-style: italic;
                        font-weight: 600;
                    }

                    .section-heading {
                        margin-bottom: 4rem;
                    }

                    .section-title {
                        margin: 0;
                        font-family: var(--font-display);
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 800;
                        letter-spacing: -0.025em;
                        line-height: 1.1;
                    }

                    .section-title--small {
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                    }

                    .eyebrow {
                        display: block;
                        margin-bottom: 0.75rem;
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }

                    .eyebrow--accent { color: var(--accent); }
                    .eyebrow--alt { color: var(--accent-alt); }

                    .gradient-text {
                        background: linear-gradient(to right, var(--accent), var(--accent-alt));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .muted { color: var(--muted); }
                    .strong { font-weight: 600; color: var(--text); }
                    .accent-alt { color: var(--accent-alt); }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.875rem 1.75rem;
                        border: 1px solid transparent;
                        border-radius: 9999px;
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .btn--large {
                        padding: 1rem 2rem;
                        font-size: 1rem;
                    }

                    .btn--primary {
                        background: var(--accent);
                        color: #fff;
                    }

                    .btn--primary:hover {
                        background: var(--accent-alt);
                        box-shadow: 0 0 30px color-mix(in srgb, var(--accent) 30%, transparent);
                    }

                    .btn--accent {
                        background: var(--card-accent, var(--accent));
                        color: #fff;
                    }

                    .btn--accent:hover {
                        background: var(--accent-alt);
                    }

                    .btn--ghost {
                        border-color: var(--border);
                        color: var(--muted);
                        background: transparent;
                    }

                    .btn--ghost:hover {
                        color: var(--text);
                    }

                    .btn .arrow {
                        transition: transform 0.2s;
                    }

                    .btn:hover .arrow {
                        transform: translateX(4px);
                    }
                "#}
            </style>
        </main>
    }
}
