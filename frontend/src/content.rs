//! Copy and link tables rendered by the landing page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    pub fn var(&self) -> &'static str {
        match self {
            Accent::Primary => "var(--accent)",
            Accent::Secondary => "var(--accent-alt)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferKind {
    Product,
    /// Also shows the team and stack tables.
    Setup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferEntry {
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: Option<&'static str>,
    pub cta_label: &'static str,
    pub href: &'static str,
    pub accent: Accent,
    pub kind: OfferKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub emoji: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryMedia {
    Image(&'static str),
    Glyph(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub media: GalleryMedia,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapItem {
    pub title: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Active,
    InProgress,
    Experimental,
    Neutral,
}

impl Badge {
    /// Any status outside the known set gets the neutral badge.
    pub fn for_status(status: &str) -> Badge {
        match status {
            "Actif" => Badge::Active,
            "En cours" => Badge::InProgress,
            "Expérimental" => Badge::Experimental,
            _ => Badge::Neutral,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Badge::Active => "badge badge--active",
            Badge::InProgress => "badge badge--progress",
            Badge::Experimental => "badge badge--experimental",
            Badge::Neutral => "badge badge--neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SUBSTACK_URL: &str = "https://nicoguyon.substack.com";

pub const OFFERS: &[OfferEntry] = &[
    OfferEntry {
        tag: "Guide",
        title: "Guide OpenClaw",
        description: "Tout pour configurer et faire tourner ton agent IA autonome. Setup complet, skills, sous-agents, Mac Mini 24/7.",
        price: Some("39€"),
        cta_label: "Acheter sur Gumroad",
        href: "https://nicoguyon.gumroad.com",
        accent: Accent::Primary,
        kind: OfferKind::Product,
    },
    OfferEntry {
        tag: "Setup",
        title: "Ma Config",
        description: "L'équipe et la stack qui tournent derrière chaque pince.",
        price: None,
        cta_label: "En parler par mail",
        href: "mailto:contact@jean-claw.ai",
        accent: Accent::Secondary,
        kind: OfferKind::Setup,
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Elon", emoji: "🚀", role: "code" },
    TeamMember { name: "Dario", emoji: "📣", role: "contenu" },
    TeamMember { name: "Emad", emoji: "🎨", role: "visuels" },
];

pub const STACK: &[&str] = &["Claude Opus 4.6", "50+ skills", "Mac Mini 24/7"];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { media: GalleryMedia::Image("/images/jeanclaw-grand-ecart.jpg"), caption: "Le Grand Écart" },
    GalleryItem { media: GalleryMedia::Image("/images/jeanclaw-hero.jpg"), caption: "Jean-Claw, version hero" },
    GalleryItem { media: GalleryMedia::Image("/images/fontainebleau-climbing.jpg"), caption: "Escalade à Fontainebleau" },
    GalleryItem { media: GalleryMedia::Image("/images/famille-fontainebleau.jpg"), caption: "Famille à Fontainebleau" },
    GalleryItem { media: GalleryMedia::Image("/images/nico-portrait.jpg"), caption: "Portrait de Nico" },
    GalleryItem { media: GalleryMedia::Image("/images/nico-corvette-paris.jpg"), caption: "Nico à Paris" },
    GalleryItem { media: GalleryMedia::Image("/images/nico-formation-mircap.jpg"), caption: "Formation en action" },
];

pub const ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        title: "Compte X @JeanClawAI",
        description: "Veille IA, memes, et punchlines signées Jean-Claw.",
        status: "En cours",
        icon: "𝕏",
    },
    RoadmapItem {
        title: "Service Setup OpenClaw",
        description: "On installe et configure ton agent IA perso. Clé en main.",
        status: "Q2 2026",
        icon: "🔧",
    },
    RoadmapItem {
        title: "Formations IA Nicolas",
        description: "Sessions de formation IA avec Jean-Claw en démo live.",
        status: "Actif",
        icon: "🎓",
    },
    RoadmapItem {
        title: "Bot Trading",
        description: "Jean-Claw analyse les marchés. Polymarket, crypto, paris.",
        status: "Expérimental",
        icon: "📈",
    },
];

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "jean-claw.ai", href: "https://jean-claw.ai" },
    FooterLink { label: "@JeanClawAI", href: "https://x.com/JeanClawAI" },
    FooterLink { label: "Telegram", href: "https://t.me/JeanClawAI" },
    FooterLink { label: "Nicolas Guyon", href: "https://nicoguyon.com" },
    FooterLink { label: "Écrire", href: "mailto:contact@jean-claw.ai" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_have_their_own_badge() {
        assert_eq!(Badge::for_status("Actif"), Badge::Active);
        assert_eq!(Badge::for_status("En cours"), Badge::InProgress);
        assert_eq!(Badge::for_status("Expérimental"), Badge::Experimental);
    }

    #[test]
    fn unknown_status_falls_back_to_neutral() {
        assert_eq!(Badge::for_status("Q2 2026"), Badge::Neutral);
        assert_eq!(Badge::for_status(""), Badge::Neutral);
        assert_eq!(Badge::for_status("actif"), Badge::Neutral);
        assert_eq!(Badge::Neutral.class(), "badge badge--neutral");
    }

    #[test]
    fn tables_are_populated() {
        assert!(!OFFERS.is_empty());
        assert_eq!(GALLERY.len(), 7);
        assert_eq!(ROADMAP.len(), 4);
        assert!(FOOTER_LINKS.iter().any(|l| l.href.starts_with("mailto:")));
    }
}
