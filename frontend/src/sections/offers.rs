use yew::prelude::*;

use crate::components::section::{FadeUp, Section};
use crate::content::{OfferEntry, OfferKind, OFFERS, STACK, TEAM};
use crate::theme::Theme;

fn team_and_stack() -> Html {
    html! {
        <>
            <p class="offer-subheading">{"Mon équipe"}</p>
            <div class="team">
                { for TEAM.iter().map(|member| html! {
                    <div key={member.name} class="team-member">
                        <span class="team-member__emoji">{member.emoji}</span>
                        <div>
                            <span class="team-member__name">{member.name}</span>
                            <span class="team-member__role">{member.role}</span>
                        </div>
                    </div>
                }) }
            </div>

            <p class="offer-subheading">{"Ma stack"}</p>
            <div class="stack">
                { for STACK.iter().map(|item| html! {
                    <span key={*item} class="stack-item">{*item}</span>
                }) }
            </div>
        </>
    }
}

fn offer_card(index: usize, offer: &OfferEntry, theme: Theme) -> Html {
    let accent = offer.accent.var();
    let tilt = theme.config().card_style(index);

    html! {
        <FadeUp
            key={offer.title}
            index={index + 1}
            class="offer-card"
            style={format!("--card-accent: {}; {}", accent, tilt)}
        >
            <div class="offer-card__glow"></div>
            <div class="offer-card__body">
                <div class="offer-card__header">
                    <span class="offer-tag">{offer.tag}</span>
                    {
                        if let Some(price) = offer.price {
                            html! { <span class="offer-price">{price}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <h3 class="offer-title">{offer.title}</h3>
                <p class="offer-description">{offer.description}</p>
                {
                    if offer.kind == OfferKind::Setup {
                        team_and_stack()
                    } else {
                        html! {}
                    }
                }
                <a
                    href={offer.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn--accent"
                >
                    {offer.cta_label}
                    <span class="arrow">{"→"}</span>
                </a>
            </div>
        </FadeUp>
    }
}

pub fn offer_cards(offers: &[OfferEntry], theme: Theme) -> Html {
    offers
        .iter()
        .enumerate()
        .map(|(i, offer)| offer_card(i, offer, theme))
        .collect()
}

#[function_component(Offers)]
pub fn offers() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <Section id="offres" class="offers">
            <FadeUp index={0} class="section-heading">
                <span class="eyebrow eyebrow--accent">{"Ce que je propose"}</span>
                <h2 class="section-title">
                    {"L'arsenal"}
                    <br />
                    <span class="gradient-text">{"du homard."}</span>
                </h2>
            </FadeUp>

            <div class="offer-grid">
                { offer_cards(OFFERS, theme) }
            </div>

            <style>
                {r#"
                    .offers {
                        padding: 6rem;
                    }

                    .offer-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 1.5rem;
                    }

                    .offer-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2.5rem;
                        border: 1px solid var(--border);
                        border-radius: var(--card-radius);
                        background: var(--surface);
                    }

                    .offer-card__glow {
                        position: absolute;
                        top: -5rem;
                        right: -5rem;
                        width: 10rem;
                        height: 10rem;
                        border-radius: 9999px;
                        background: var(--card-accent);
                        filter: blur(64px);
                        opacity: 0;
                        transition: opacity 0.5s;
                        pointer-events: none;
                    }

                    .offer-card:hover .offer-card__glow {
                        opacity: 1;
                    }

                    .offer-card__body {
                        position: relative;
                        z-index: 1;
                    }

                    .offer-card__header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1.25rem;
                    }

                    .offer-tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-family: var(--font-label);
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        color: var(--card-accent);
                        background: color-mix(in srgb, var(--card-accent) 10%, transparent);
                    }

                    .offer-price {
                        font-family: var(--font-label);
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: var(--card-accent);
                    }

                    .offer-title {
                        margin: 0 0 0.75rem;
                        font-family: var(--font-display);
                        font-size: 1.5rem;
                    }

                    .offer-description {
                        margin-bottom: 2rem;
                        font-family: var(--font-body);
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: var(--muted);
                    }

                    .offer-subheading {
                        margin-bottom: 0.75rem;
                        font-family: var(--font-label);
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }

                    .team, .stack {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }

                    .team-member {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.625rem 1rem;
                        border: 1px solid var(--border);
                        border-radius: 0.75rem;
                    }

                    .team-member__name {
                        display: block;
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                        font-weight: 600;
                    }

                    .team-member__role {
                        font-family: var(--font-body);
                        font-size: 0.75rem;
                        color: var(--muted);
                    }

                    .stack-item {
                        padding: 0.375rem 0.75rem;
                        border-radius: 0.5rem;
                        font-family: var(--font-label);
                        font-size: 0.75rem;
                        color: var(--accent-alt);
                        background: color-mix(in srgb, var(--accent-alt) 10%, transparent);
                    }

                    @media (max-width: 1024px) {
                        .offer-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    @media (max-width: 768px) {
                        .offers {
                            padding: 5rem 1.5rem;
                        }

                        .offer-card {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::{Key, VNode};

    #[test]
    fn one_card_per_offer_in_order() {
        match offer_cards(OFFERS, Theme::Minimalist) {
            VNode::VList(list) => {
                assert_eq!(list.len(), OFFERS.len());
                for (node, offer) in list.iter().zip(OFFERS) {
                    assert_eq!(node.key(), Some(&Key::from(offer.title)));
                }
            }
            _ => panic!("expected a list of cards"),
        }
    }

    #[test]
    fn no_offers_renders_empty_list() {
        match offer_cards(&[], Theme::Whiteboard) {
            VNode::VList(list) => assert!(list.is_empty()),
            _ => panic!("expected a list"),
        }
    }
}
