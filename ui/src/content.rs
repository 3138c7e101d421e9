use anyhow::{Context, Result};
use leptos::leptos_dom::logging::console_error;
use serde::Deserialize;

use crate::config::{FooterOverrides, HeroOverrides, NavigationOverrides};

const PAGE_JSON: &str = include_str!("../content/page.json");

/// Editor-maintained overrides for every section of the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub navigation: NavigationOverrides,
    pub hero: HeroOverrides,
    pub footer: FooterOverrides,
}

impl PageContent {
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).context("page content does not match the landing sections")
    }

    /// Bundled content; falls back to all defaults if it does not parse.
    pub fn load() -> Self {
        match Self::from_json(PAGE_JSON) {
            Ok(content) => content,
            Err(err) => {
                console_error(&format!("{err:#}"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, FooterConfig, HeroConfig, NavigationConfig};

    #[test]
    fn bundled_content_parses() {
        let content = PageContent::from_json(PAGE_JSON).unwrap();
        let footer: FooterConfig = resolve(content.footer);
        assert_eq!(footer.brand_name, "TechFlow");
        assert_eq!(footer.email, "hello@testsite.com");
    }

    #[test]
    fn missing_sections_and_unknown_keys_fall_back() {
        let content = PageContent::from_json(
            r#"{ "hero": { "badge": null, "showTrustedLogos": false, "theme": "dark" }, "pricing": {} }"#,
        )
        .unwrap();
        let hero: HeroConfig = resolve(content.hero);
        assert_eq!(hero.badge, "Streamlined for everyone");
        assert!(!hero.show_trusted_logos);
        let nav: NavigationConfig = resolve(content.navigation);
        assert_eq!(nav, NavigationConfig::default());
    }

    #[test]
    fn wrong_types_are_reported() {
        let err = PageContent::from_json(r#"{ "navigation": { "isTransparent": "yes" } }"#)
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("page content does not match"));
    }

    #[test]
    fn empty_document_is_all_defaults() {
        assert_eq!(PageContent::from_json("{}").unwrap(), PageContent::default());
    }

    #[test]
    fn nav_item_without_editor_ids_keeps_the_rest_of_the_page() {
        let content = PageContent::from_json(
            r##"{
                "navigation": { "navigationItems": [{ "name": "Blog", "href": "/blog" }] },
                "hero": { "title": "Ship faster" },
                "footer": { "brandName": "Acme" }
            }"##,
        )
        .unwrap();
        let nav: NavigationConfig = resolve(content.navigation);
        assert_eq!(nav.navigation_items[0].text_editable_id, None);
        let hero: HeroConfig = resolve(content.hero);
        assert_eq!(hero.title, "Ship faster");
        let footer: FooterConfig = resolve(content.footer);
        assert_eq!(footer.brand_name, "Acme");
    }
}
