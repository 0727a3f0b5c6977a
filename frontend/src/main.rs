use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod error;
mod subscribe;
mod theme;
mod motion {
    pub mod hooks;
    pub mod progress;
    pub mod reveal;
    pub mod signal;
    pub mod transform;
}
mod components {
    pub mod section;
    pub mod theme_root;
}
mod sections {
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod newsletter;
    pub mod offers;
    pub mod roadmap;
}
mod pages {
    pub mod landing;
}

use components::theme_root::ThemeRoot;
use config::{SiteQuery, NAV_SOLID_AFTER_PX};
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

/// Same-page anchors shown in the top bar.
const NAV_ANCHORS: &[(&str, &str)] = &[
    ("#newsletter", "La Pince"),
    ("#offres", "Offres"),
    ("#bibliotheque", "Coulisses"),
    ("#avenir", "Roadmap"),
];


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_window = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(scroll_top) = scroll_window.as_ref().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_top > NAV_SOLID_AFTER_PX as f64);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("nav scroll listener not attached: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors keep their default jump; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"Jean-Claw 🦞"}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ANCHORS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1rem 2rem;
                        transition: background 0.3s ease, border-color 0.3s ease;
                        border-bottom: 1px solid transparent;
                    }

                    .top-nav.scrolled {
                        background: color-mix(in srgb, var(--bg) 85%, transparent);
                        backdrop-filter: blur(12px);
                        border-bottom-color: var(--border);
                    }

                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .nav-logo {
                        font-family: var(--font-display);
                        font-weight: 800;
                        font-size: 1.25rem;
                        color: var(--text);
                        text-decoration: none;
                    }

                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        font-family: var(--font-label);
                        font-size: 0.875rem;
                        color: var(--muted);
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .nav-link:hover {
                        color: var(--text);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--text);
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem 2rem;
                            background: var(--bg);
                            border-bottom: 1px solid var(--border);
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component(Shell)]
fn shell() -> Html {
    let theme = use_location()
        .and_then(|location| location.query::<SiteQuery>().ok())
        .map(|query| query.theme())
        .unwrap_or_default();

    html! {
        <ThemeRoot theme={theme}>
            <Nav />
            <Switch<Route> render={switch} />
        </ThemeRoot>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(Level::Info) {
        eprintln!("error initializing log: {}", err);
    }

    info!("Starting Jean-Claw site");
    yew::Renderer::<App>::new().render();
}
