use log::warn;
use serde::Deserialize;

use crate::theme::Theme;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    ""  // Served by `trunk serve` from frontend/images
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "https://jean-claw.ai"
}

pub fn image_url(path: &str) -> String {
    format!("{}{}", get_asset_base(), path)
}

/// Sections start revealing this many pixels after they enter the viewport.
pub const REVEAL_MARGIN_PX: i32 = -80;

/// Nav switches to its solid background past this scroll offset.
pub const NAV_SOLID_AFTER_PX: i32 = 600;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct SiteQuery {
    pub theme: Option<String>,
}

impl SiteQuery {
    pub fn theme(&self) -> Theme {
        match self.theme.as_deref() {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("{}, using {}", err, Theme::default());
                Theme::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_query() {
        assert_eq!(SiteQuery::default().theme(), Theme::Minimalist);
        let q = SiteQuery { theme: Some("whiteboard".into()) };
        assert_eq!(q.theme(), Theme::Whiteboard);
        let q = SiteQuery { theme: Some("vaporwave".into()) };
        assert_eq!(q.theme(), Theme::Minimalist);
    }
}
