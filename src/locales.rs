//! Compiled-in target locales and per-locale override sets.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::{
    Map,
    Value,
    json,
};

/// Locale codes that receive a generated translation file.
///
/// A locale with a compiled-in override set (see [`overrides_for`]) gets the
/// baseline with its translated sections replaced; every other locale gets a
/// verbatim copy of the baseline until real translations land.
pub const TARGET_LOCALES: [&str; 38] = [
    "bn", "ar", "zh", "ja", "ko", "hi", "th", "de", "fr", "es", "it", "pt", "ru", "nl", "sv", "tr",
    "vi", "id", "ms", "tl", "ur", "sw", "am", "ha", "yo", "zu", "af", "pt-BR", "es-MX", "es-AR",
    "fr-CA", "en-AU", "en-NZ", "no", "da", "fi", "pl", "el",
];

/// Override sets keyed by locale code.
static LOCALE_OVERRIDES: LazyLock<HashMap<&'static str, Map<String, Value>>> =
    LazyLock::new(|| {
        let mut overrides = HashMap::new();
        overrides.insert("fr", french_overrides());
        overrides.insert("de", german_overrides());
        overrides
    });

/// Look up the override set for a locale, if one is compiled in.
///
/// Each override value replaces the matching top-level baseline key in its
/// entirety.
#[must_use]
pub fn overrides_for(locale: &str) -> Option<&'static Map<String, Value>> {
    LOCALE_OVERRIDES.get(locale)
}

/// Translated sections for French.
fn french_overrides() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "header".to_string(),
        json!({
            "login": "Connexion",
            "get_started": "Commencer"
        }),
    );
    map.insert(
        "nav".to_string(),
        json!({
            "home": "Accueil",
            "about": "À propos",
            "pricing": "Tarifs",
            "contact": "Contact",
            "login": "Connexion"
        }),
    );
    map.insert(
        "services".to_string(),
        json!({
            "title": "Nos Services",
            "subtitle": "Solutions complètes de gestion immobilière",
            "property_tracking_title": "Suivi des Propriétés",
            "property_tracking_desc": "Suivez toutes vos propriétés en un seul endroit",
            "rent_collection_title": "Collecte de Loyer",
            "rent_collection_desc": "Collecte automatique de loyer et rappels",
            "tenant_management_title": "Gestion des Locataires",
            "tenant_management_desc": "Gérez les locataires et les contrats de bail"
        }),
    );
    map.insert(
        "install_app".to_string(),
        json!({
            "title": "Installer Notre App",
            "subtitle": "Obtenez l'expérience mobile native"
        }),
    );
    map
}

/// Translated sections for German.
fn german_overrides() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "header".to_string(),
        json!({
            "login": "Anmelden",
            "get_started": "Loslegen"
        }),
    );
    map.insert(
        "nav".to_string(),
        json!({
            "home": "Startseite",
            "about": "Über uns",
            "pricing": "Preise",
            "contact": "Kontakt",
            "login": "Anmelden"
        }),
    );
    map.insert(
        "services".to_string(),
        json!({
            "title": "Unsere Dienste",
            "subtitle": "Umfassende Immobilienverwaltungslösungen",
            "property_tracking_title": "Immobilien-Tracking",
            "property_tracking_desc": "Verfolgen Sie alle Ihre Immobilien an einem Ort",
            "rent_collection_title": "Mieteinzug",
            "rent_collection_desc": "Automatischer Mieteinzug und Erinnerungen",
            "tenant_management_title": "Mieterverwaltung",
            "tenant_management_desc": "Verwalten Sie Mieter und Mietverträge"
        }),
    );
    map.insert(
        "install_app".to_string(),
        json!({
            "title": "Unsere App Installieren",
            "subtitle": "Native mobile Erfahrung erhalten"
        }),
    );
    map
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_overrides_for_known_locales() {
        expect_that!(overrides_for("fr"), some(anything()));
        expect_that!(overrides_for("de"), some(anything()));
    }

    #[googletest::test]
    fn test_overrides_for_unknown_locale() {
        expect_that!(overrides_for("ja"), none());
        expect_that!(overrides_for("en"), none());
    }

    #[googletest::test]
    fn test_french_overrides_keep_non_ascii_literals() {
        let overrides = overrides_for("fr").unwrap();

        let nav = overrides.get("nav").and_then(Value::as_object).unwrap();
        expect_that!(nav.get("about").and_then(Value::as_str), some(eq("À propos")));
    }

    #[rstest]
    #[case("fr")]
    #[case("de")]
    fn test_override_locales_are_targets(#[case] locale: &str) {
        assert!(TARGET_LOCALES.contains(&locale));
    }

    #[rstest]
    #[case("fr")]
    #[case("de")]
    fn test_override_sections(#[case] locale: &str) {
        let overrides = overrides_for(locale).unwrap();

        let mut sections: Vec<&str> = overrides.keys().map(String::as_str).collect();
        sections.sort_unstable();
        assert_eq!(sections, ["header", "install_app", "nav", "services"]);
    }

    #[googletest::test]
    fn test_baseline_language_is_not_a_target() {
        expect_that!(TARGET_LOCALES.contains(&"en"), eq(false));
    }
}
