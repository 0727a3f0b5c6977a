use yew::prelude::*;

use crate::components::section::{FadeUp, Section};
use crate::content::{Badge, RoadmapItem, ROADMAP};
use crate::theme::Theme;

/// What one roadmap row shows.
#[derive(Debug, PartialEq)]
pub struct RoadmapRow<'a> {
    pub item: &'a RoadmapItem,
    pub badge: Badge,
}

pub fn roadmap_rows(items: &[RoadmapItem]) -> Vec<RoadmapRow<'_>> {
    items
        .iter()
        .map(|item| RoadmapRow { item, badge: Badge::for_status(item.status) })
        .collect()
}

fn roadmap_row(index: usize, row: &RoadmapRow<'_>, theme: Theme) -> Html {
    let item = row.item;
    html! {
        <FadeUp
            key={item.title}
            index={index + 1}
            class="roadmap-card"
            style={theme.config().card_style(index)}
        >
            <span class="roadmap-icon">{item.icon}</span>
            <div class="roadmap-text">
                <div class="roadmap-header">
                    <h3 class="roadmap-title">{item.title}</h3>
                    <span class={row.badge.class()}>{item.status}</span>
                </div>
                <p class="roadmap-description">{item.description}</p>
            </div>
        </FadeUp>
    }
}

pub fn roadmap_list(items: &[RoadmapItem], theme: Theme) -> Html {
    roadmap_rows(items)
        .iter()
        .enumerate()
        .map(|(i, row)| roadmap_row(i, row, theme))
        .collect()
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <Section id="avenir" class="roadmap">
            <FadeUp index={0} class="section-heading">
                <span class="eyebrow eyebrow--accent">{"Roadmap"}</span>
                <h2 class="section-title section-title--small">
                    {"Ce qui arrive "}
                    <span class="gradient-text">{"dans les pinces."}</span>
                </h2>
            </FadeUp>

            <div class="roadmap-grid">
                { roadmap_list(ROADMAP, theme) }
            </div>

            <style>
                {r#"
                    .roadmap {
                        padding: 4rem 6rem;
                    }

                    .roadmap-grid {
                        display: grid;
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                        gap: 1rem;
                    }

                    .roadmap-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.25rem;
                        border: 1px solid var(--border);
                        border-radius: var(--card-radius);
                        background: var(--surface);
                    }

                    .roadmap-icon {
                        display: flex;
                        flex-shrink: 0;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: var(--border);
                        font-size: 1.125rem;
                    }

                    .roadmap-text {
                        flex: 1;
                    }

                    .roadmap-header {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.25rem;
                    }

                    .roadmap-title {
                        margin: 0;
                        font-family: var(--font-display);
                        font-size: 0.875rem;
                    }

                    .roadmap-description {
                        margin: 0;
                        font-family: var(--font-body);
                        font-size: 0.75rem;
                        color: var(--muted);
                    }

                    .badge {
                        padding: 0.125rem 0.5rem;
                        border-radius: 9999px;
                        font-family: var(--font-label);
                        font-size: 0.5625rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        white-space: nowrap;
                    }

                    .badge--active {
                        color: var(--success);
                        background: color-mix(in srgb, var(--success) 10%, transparent);
                    }

                    .badge--progress {
                        color: var(--accent-alt);
                        background: color-mix(in srgb, var(--accent-alt) 10%, transparent);
                    }

                    .badge--experimental {
                        color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 10%, transparent);
                    }

                    .badge--neutral {
                        color: var(--muted);
                        background: var(--border);
                    }

                    @media (max-width: 1024px) {
                        .roadmap-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }

                    @media (max-width: 640px) {
                        .roadmap {
                            padding: 4rem 1.5rem;
                        }

                        .roadmap-grid {
                            grid-template-columns: 1fr;
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
    fn four_rows_in_source_order_with_their_own_status() {
        let rows = roadmap_rows(ROADMAP);
        assert_eq!(rows.len(), 4);
        let statuses: Vec<_> = rows.iter().map(|r| r.item.status).collect();
        assert_eq!(statuses, ["En cours", "Q2 2026", "Actif", "Expérimental"]);
        let badges: Vec<_> = rows.iter().map(|r| r.badge).collect();
        assert_eq!(
            badges,
            [Badge::InProgress, Badge::Neutral, Badge::Active, Badge::Experimental]
        );
    }

    #[test]
    fn list_has_one_keyed_node_per_item() {
        match roadmap_list(ROADMAP, Theme::Editorial) {
            VNode::VList(list) => {
                assert_eq!(list.len(), ROADMAP.len());
                for (node, item) in list.iter().zip(ROADMAP) {
                    assert_eq!(node.key(), Some(&Key::from(item.title)));
                }
            }
            _ => panic!("expected a list of rows"),
        }
    }

    #[test]
    fn unknown_status_still_renders() {
        let items = [RoadmapItem {
            title: "Podcast",
            description: "Peut-être un jour.",
            status: "Un jour",
            icon: "🎙️",
        }];
        assert_eq!(roadmap_rows(&items)[0].badge, Badge::Neutral);
        match roadmap_list(&items, Theme::Whiteboard) {
            VNode::VList(list) => assert_eq!(list.len(), 1),
            _ => panic!("expected a list"),
        }
    }

    #[tokio::test]
    async fn rendered_badges_show_status_text_verbatim() {
        let rendered = yew::ServerRenderer::<Roadmap>::new().render().await;

        let positions: Vec<usize> = ["En cours", "Q2 2026", "Actif", "Expérimental"]
            .iter()
            .map(|status| match rendered.find(status) {
                Some(at) => at,
                None => panic!("status {:?} missing from roadmap", status),
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rendered.matches("badge badge--").count(), ROADMAP.len());
        assert!(rendered.contains(r#"class="badge badge--neutral">Q2 2026<"#));
    }
}
