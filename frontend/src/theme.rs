use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark page, gradient accents.
    #[default]
    Minimalist,
    /// Paper background, handwritten fonts, tilted sticky-note cards.
    Whiteboard,
    /// Cream background, serif display type.
    Editorial,
}

impl Theme {
    #[cfg(test)]
    pub const ALL: [Theme; 3] = [Theme::Minimalist, Theme::Whiteboard, Theme::Editorial];

    pub fn slug(&self) -> &'static str {
        match self {
            Theme::Minimalist => "minimalist",
            Theme::Whiteboard => "whiteboard",
            Theme::Editorial => "editorial",
        }
    }

    pub fn config(&self) -> &'static ThemeConfig {
        match self {
            Theme::Minimalist => &MINIMALIST,
            Theme::Whiteboard => &WHITEBOARD,
            Theme::Editorial => &EDITORIAL,
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimalist" | "dark" => Ok(Theme::Minimalist),
            "whiteboard" | "sticky" => Ok(Theme::Whiteboard),
            "editorial" | "serif" => Ok(Theme::Editorial),
            other => Err(ThemeError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_alt: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fonts {
    pub display: &'static str,
    pub body: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub fonts: Fonts,
    pub card_radius: &'static str,
    /// Degrees of rotation cycled over cards; empty means flat cards.
    pub card_tilt: &'static [f64],
    pub hero_overlay: &'static str,
}

impl ThemeConfig {
    pub fn tilt(&self, index: usize) -> f64 {
        if self.card_tilt.is_empty() {
            0.0
        } else {
            self.card_tilt[index % self.card_tilt.len()]
        }
    }

    pub fn card_style(&self, index: usize) -> String {
        match self.tilt(index) {
            t if t == 0.0 => String::new(),
            t => format!("rotate: {}deg;", t),
        }
    }

    /// Custom properties consumed by every section stylesheet.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let f = &self.fonts;
        format!(
            "--bg: {}; --surface: {}; --text: {}; --muted: {}; --border: {}; \
             --accent: {}; --accent-alt: {}; --success: {}; \
             --font-display: {}; --font-body: {}; --font-label: {}; \
             --card-radius: {}; --hero-overlay: {};",
            p.background,
            p.surface,
            p.text,
            p.muted,
            p.border,
            p.accent,
            p.accent_alt,
            p.success,
            f.display,
            f.body,
            f.label,
            self.card_radius,
            self.hero_overlay,
        )
    }
}

static MINIMALIST: ThemeConfig = ThemeConfig {
    palette: Palette {
        background: "#050505",
        surface: "#0d0d0d",
        text: "#ffffff",
        muted: "rgba(255, 255, 255, 0.5)",
        border: "rgba(255, 255, 255, 0.06)",
        accent: "#DC2626",
        accent_alt: "#E87722",
        success: "#4ade80",
    },
    fonts: Fonts {
        display: "'Syne', sans-serif",
        body: "'Plus Jakarta Sans', sans-serif",
        label: "'Space Grotesk', sans-serif",
    },
    card_radius: "1rem",
    card_tilt: &[],
    hero_overlay: "linear-gradient(to bottom, rgba(5,5,5,0.4), rgba(5,5,5,0.2), #050505)",
};

static WHITEBOARD: ThemeConfig = ThemeConfig {
    palette: Palette {
        background: "#fbfaf5",
        surface: "#fff7b3",
        text: "#1f2937",
        muted: "rgba(31, 41, 55, 0.6)",
        border: "rgba(31, 41, 55, 0.15)",
        accent: "#e63946",
        accent_alt: "#f4a261",
        success: "#2a9d8f",
    },
    fonts: Fonts {
        display: "'Pacifico', cursive",
        body: "'Patrick Hand', cursive",
        label: "'Caveat', cursive",
    },
    card_radius: "0.25rem",
    card_tilt: &[-1.5, 1.0, -0.5, 1.5],
    hero_overlay: "linear-gradient(to bottom, rgba(251,250,245,0.1), rgba(251,250,245,0.3), #fbfaf5)",
};

static EDITORIAL: ThemeConfig = ThemeConfig {
    palette: Palette {
        background: "#f5f1ea",
        surface: "#ffffff",
        text: "#111111",
        muted: "rgba(17, 17, 17, 0.55)",
        border: "rgba(17, 17, 17, 0.12)",
        accent: "#8b1e1e",
        accent_alt: "#b45309",
        success: "#166534",
    },
    fonts: Fonts {
        display: "'Playfair Display', serif",
        body: "'Source Serif 4', serif",
        label: "'IBM Plex Mono', monospace",
    },
    card_radius: "0",
    card_tilt: &[],
    hero_overlay: "linear-gradient(to bottom, rgba(245,241,234,0.2), rgba(245,241,234,0.4), #f5f1ea)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slugs_and_aliases() {
        for theme in Theme::ALL {
            assert_eq!(theme.slug().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(" Serif ".parse::<Theme>(), Ok(Theme::Editorial));
        assert_eq!("neon".parse::<Theme>(), Err(ThemeError("neon".into())));
    }

    #[test]
    fn only_whiteboard_tilts_cards() {
        assert_eq!(Theme::Minimalist.config().card_style(3), "");
        assert_eq!(Theme::Editorial.config().tilt(1), 0.0);
        let wb = Theme::Whiteboard.config();
        assert_eq!(wb.tilt(0), -1.5);
        assert_eq!(wb.tilt(4), -1.5);
        assert_eq!(wb.card_style(1), "rotate: 1deg;");
    }

    #[test]
    fn variables_carry_palette_and_fonts() {
        let vars = Theme::Minimalist.config().css_variables();
        assert!(vars.contains("--accent: #DC2626;"));
        assert!(vars.contains("--font-display: 'Syne', sans-serif;"));
    }
}
