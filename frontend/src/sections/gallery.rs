use yew::prelude::*;

use crate::components::section::{FadeUp, Section};
use crate::config::image_url;
use crate::content::{GalleryItem, GalleryMedia, GALLERY};

fn gallery_item(index: usize, item: &GalleryItem) -> Html {
    let media = match &item.media {
        GalleryMedia::Image(src) => html! {
            <img src={image_url(src)} alt={item.caption} loading="lazy" class="gallery-image" />
        },
        GalleryMedia::Glyph(glyph) => html! {
            <span class="gallery-glyph" aria-hidden="true">{*glyph}</span>
        },
    };

    html! {
        <FadeUp key={item.caption} index={index + 1} class="gallery-item">
            <div class="gallery-frame">
                {media}
                <div class="gallery-shade"></div>
            </div>
            <p class="gallery-caption">{item.caption}</p>
        </FadeUp>
    }
}

pub fn gallery_items(items: &[GalleryItem]) -> Html {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| gallery_item(i, item))
        .collect()
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <Section id="bibliotheque" class="gallery">
            <FadeUp index={0} class="section-heading gallery-heading">
                <span class="eyebrow eyebrow--alt">{"Bibliothèque"}</span>
                <h2 class="section-title">
                    {"Les coulisses"}
                    <br />
                    <span class="muted">{"de la bête."}</span>
                </h2>
            </FadeUp>

            <div class="gallery-scroll">
                { gallery_items(GALLERY) }
            </div>

            <style>
                {r#"
                    .gallery {
                        padding: 6rem 0;
                    }

                    .gallery-heading {
                        padding: 0 6rem;
                    }

                    .gallery-scroll {
                        display: flex;
                        gap: 1.25rem;
                        overflow-x: auto;
                        padding: 0 6rem 1.5rem;
                        scrollbar-width: none;
                    }

                    .gallery-scroll::-webkit-scrollbar {
                        display: none;
                    }

                    .gallery-item {
                        flex-shrink: 0;
                    }

                    .gallery-frame {
                        position: relative;
                        width: 440px;
                        height: 320px;
                        overflow: hidden;
                        border: 1px solid var(--border);
                        border-radius: var(--card-radius);
                        background: var(--surface);
                    }

                    .gallery-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s, filter 0.5s;
                    }

                    .gallery-item:hover .gallery-image {
                        transform: scale(1.03);
                        filter: brightness(1.1);
                    }

                    .gallery-glyph {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        font-size: 6rem;
                    }

                    .gallery-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent 50%);
                    }

                    .gallery-caption {
                        margin-top: 0.75rem;
                        text-align: center;
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                        color: var(--muted);
                    }

                    @media (max-width: 768px) {
                        .gallery-heading {
                            padding: 0 1.5rem;
                        }

                        .gallery-scroll {
                            padding: 0 1.5rem 1.5rem;
                        }

                        .gallery-frame {
                            width: 380px;
                            height: 280px;
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
    fn renders_every_item_in_order() {
        match gallery_items(GALLERY) {
            VNode::VList(list) => {
                assert_eq!(list.len(), 7);
                let keys: Vec<_> = list.iter().filter_map(|n| n.key().cloned()).collect();
                let expected: Vec<_> = GALLERY.iter().map(|g| Key::from(g.caption)).collect();
                assert_eq!(keys, expected);
            }
            _ => panic!("expected a list of gallery items"),
        }
    }

    #[test]
    fn glyph_items_render_too() {
        let items = [
            GalleryItem { media: GalleryMedia::Glyph("🦞"), caption: "Homard" },
            GalleryItem { media: GalleryMedia::Image("/images/nico-portrait.jpg"), caption: "Portrait" },
        ];
        match gallery_items(&items) {
            VNode::VList(list) => assert_eq!(list.len(), 2),
            _ => panic!("expected a list"),
        }
    }
}
