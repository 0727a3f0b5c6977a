use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeRootProps {
    pub theme: Theme,
    #[prop_or_default]
    pub children: Children,
}

/// Carries the theme's custom properties for everything rendered inside it.
#[function_component(ThemeRoot)]
pub fn theme_root(props: &ThemeRootProps) -> Html {
    let theme = props.theme;

    html! {
        <div
            class={classes!("site-root", format!("theme-{}", theme.slug()))}
            style={theme.config().css_variables()}
        >
            <ContextProvider<Theme> context={theme}>
                { for props.children.iter() }
            </ContextProvider<Theme>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_carries_theme_variables() {
        let rendered = yew::ServerRenderer::<ThemeRoot>::with_props(|| ThemeRootProps {
            theme: Theme::Whiteboard,
            children: Children::default(),
        })
        .render()
        .await;

        assert!(rendered.contains("theme-whiteboard"));
        assert!(rendered.contains("--bg: #fbfaf5;"));
        assert!(rendered.contains("--accent: #e63946;"));
        assert!(rendered.contains("--card-radius: 0.25rem;"));
    }
}
