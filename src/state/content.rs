//! Static page copy

/// Service offered by the studio: title and one-line pitch
pub const SERVICES: &[(&str, &str)] = &[
    ("Création de sites", "Sites vitrines rapides, responsives et bien référencés"),
    ("E-commerce", "Boutiques en ligne simples à gérer au quotidien"),
    ("Refonte", "Modernisation de sites existants sans perte de trafic"),
    ("Maintenance", "Mises à jour, sauvegardes et suivi de sécurité"),
];

/// A pricing card
#[derive(Debug, Clone, Copy)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 3],
}

pub const PRICING: [PricingPlan; 3] = [
    PricingPlan {
        name: "Essentiel",
        price: "à partir de 900 €",
        features: ["Site une page", "Formulaire de contact", "Hébergement 1 an"],
    },
    PricingPlan {
        name: "Vitrine",
        price: "à partir de 1 800 €",
        features: ["Jusqu'à 6 pages", "Référencement de base", "Hébergement 1 an"],
    },
    PricingPlan {
        name: "Boutique",
        price: "à partir de 3 500 €",
        features: ["Catalogue produits", "Paiement en ligne", "Hébergement 1 an"],
    },
];

/// Label of the tooltip trigger shown on every pricing card
pub const TRIGGER_LABEL: &str = "ⓘ Maintenance incluse";

pub const TOOLTIP_TITLE: &str = "Maintenance incluse";
pub const TOOLTIP_LINES: &[&str] = &[
    "Mises à jour de sécurité mensuelles",
    "Sauvegardes automatiques",
    "Support par email sous 48h",
    "Sans engagement la première année",
];
/// Tooltip width in cells, borders included
pub const TOOLTIP_WIDTH: u16 = 44;

/// Tooltip height in cells: borders, title, blank line and body
pub fn tooltip_height() -> u16 {
    TOOLTIP_LINES.len() as u16 + 4
}

pub const HERO_TITLE: &str = "Roches Web Studio";
pub const HERO_TAGLINE: &str = "Des sites web sur mesure pour les artisans et indépendants";
