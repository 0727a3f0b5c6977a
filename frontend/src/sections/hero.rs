use log::error;
use yew::prelude::*;

use crate::config::image_url;
use crate::motion::hooks::{use_entered, use_scroll_progress};
use crate::motion::progress::ScrollRange;
use crate::motion::reveal::{RevealStyle, Stagger};
use crate::motion::transform::HeroParallax;

/// Entrance pieces of the hero: (style, delay in seconds).
const ENTRANCE: [(RevealStyle, f64); 4] = [
    (RevealStyle::SLIDE_RIGHT, 0.0),
    (RevealStyle::FADE_UP_SHORT, 0.4),
    (RevealStyle::FADE, 0.7),
    (RevealStyle::FADE, 1.2),
];

fn entrance_style(step: usize, entered: bool) -> String {
    let (style, delay) = ENTRANCE[step];
    let stagger = Stagger { duration: 0.9, ..Stagger::FADE_UP };
    format!("{} {}", style.pose(entered).css(), stagger.transition(delay))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::START_START_TO_END_START);
    let entered = use_entered();
    let parallax = use_memo(|_| HeroParallax::new(), ());

    let (image_style, text_style) = match &*parallax {
        Ok(parallax) => {
            let frame = parallax.frame(progress);
            (frame.image_style(), frame.text_style())
        }
        Err(err) => {
            error!("hero parallax disabled: {}", err);
            (String::new(), String::new())
        }
    };

    html! {
        <header ref={node} class="hero">
            <div class="hero-media" style={image_style}>
                <img
                    src={image_url("/images/jeanclaw-grand-ecart.jpg")}
                    alt="Jean-Claw, le grand écart"
                    class="hero-image"
                />
                <div class="hero-overlay"></div>
                <div class="hero-overlay hero-overlay--sides"></div>
            </div>

            <div class="hero-content" style={text_style}>
                <div style={entrance_style(0, entered)}>
                    <h1 class="hero-title">
                        <span class="hero-title__line">{"JEAN"}</span>
                        <span class="hero-title__line gradient-text">{"-CLAW"}</span>
                    </h1>
                </div>

                <p class="hero-subtitle" style={entrance_style(1, entered)}>
                    {"Agent IA de "}
                    <span class="strong">{"Nicolas Guyon"}</span>
                    {"."}
                    <br />
                    {"Entrepreneur. Fan de Jean-Claude Van Damme."}
                </p>

                <div class="hero-cta-group" style={entrance_style(2, entered)}>
                    <a href="#offres" class="btn btn--primary">
                        {"Découvrir"}
                        <span class="arrow">{"→"}</span>
                    </a>
                    <span class="hero-domain">{"jean-claw.ai"}</span>
                </div>
            </div>

            <div class="scroll-cue" style={entrance_style(3, entered)}>
                <div class="scroll-cue__mouse">
                    <div class="scroll-cue__wheel"></div>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        min-height: 700px;
                        overflow: hidden;
                    }

                    .hero-media {
                        position: absolute;
                        inset: 0;
                        will-change: transform, opacity;
                    }

                    .hero-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                    }

                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: var(--hero-overlay);
                    }

                    .hero-overlay--sides {
                        background: linear-gradient(to right, var(--bg), transparent, var(--bg));
                        opacity: 0.6;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        height: 100%;
                        padding: 0 6rem 4rem;
                        will-change: transform;
                    }

                    .hero-title {
                        font-family: var(--font-display);
                        font-size: clamp(3.5rem, 12vw, 11rem);
                        font-weight: 800;
                        line-height: 0.85;
                        letter-spacing: -0.05em;
                        margin: 0;
                    }

                    .hero-title__line {
                        display: block;
                    }

                    .hero-subtitle {
                        margin-top: 1.5rem;
                        max-width: 36rem;
                        font-family: var(--font-body);
                        font-size: 1.25rem;
                        line-height: 1.6;
                        color: var(--muted);
                    }

                    .hero-cta-group {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .hero-domain {
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                        letter-spacing: 0.2em;
                        color: var(--muted);
                        opacity: 0.6;
                    }

                    .scroll-cue {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 50%;
                        z-index: 10;
                        margin-left: -0.625rem;
                    }

                    .scroll-cue__mouse {
                        width: 1.25rem;
                        height: 2rem;
                        padding: 0.25rem;
                        border: 2px solid var(--border);
                        border-radius: 9999px;
                        animation: cue-bounce 1.5s infinite;
                    }

                    .scroll-cue__wheel {
                        width: 0.25rem;
                        height: 0.5rem;
                        margin: 0 auto;
                        border-radius: 9999px;
                        background: var(--muted);
                    }

                    @keyframes cue-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(8px); }
                    }

                    @media (max-width: 768px) {
                        .hero-content {
                            padding: 0 1.5rem 4rem;
                        }

                        .hero-subtitle {
                            font-size: 1.125rem;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_starts_hidden_then_shows() {
        assert!(entrance_style(0, false).starts_with("opacity: 0; transform: translate(-30px, 0px);"));
        assert!(entrance_style(1, false).starts_with("opacity: 0; transform: translate(0px, 20px);"));
        assert!(entrance_style(3, true).starts_with("opacity: 1;"));
        assert!(entrance_style(2, true).contains("0.70s"));
    }
}
