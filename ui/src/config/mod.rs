//! Section configuration: built-in defaults, shallow override merge, and the
//! editor bindings each section exposes.

pub mod editable;
pub mod footer;
pub mod hero;
pub mod navigation;

use serde::Deserialize;

pub use editable::{BindingKind, BindingList, EditPath, EditableBinding, LinkBinding};
pub use footer::{FooterBindings, FooterConfig, FooterOverrides};
pub use hero::{HeroBindings, HeroConfig, HeroOverrides};
pub use navigation::{NavItem, NavigationBindings, NavigationConfig, NavigationOverrides};

/// A section's bindings grouped the way its component lays them out.
pub trait EditableSet {
    /// Flattened in render order.
    fn flatten(&self) -> Vec<EditableBinding>;
}

/// Resolved content of one landing section.
///
/// `Default` is the section's baseline. Every field of `Overrides` is
/// optional; a present field replaces the default wholesale, lists included.
pub trait SectionConfig: Default + Clone {
    type Overrides: Default;
    type Editable: EditableSet;

    /// DOM id of the rendered section.
    const SECTION_ID: &'static str;

    fn merge(self, overrides: Self::Overrides) -> Self;

    /// What the component renders: every text and href node with its path.
    /// Hidden sub-trees are absent.
    fn editable(&self) -> Self::Editable;

    /// Every editable node the section renders, in render order.
    fn bindings(&self) -> Vec<EditableBinding> {
        self.editable().flatten()
    }
}

pub fn resolve<C: SectionConfig>(overrides: C::Overrides) -> C {
    C::default().merge(overrides)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(title: &str, href: &str) -> Self {
        Self { title: title.to_owned(), href: href.to_owned() }
    }
}

/// Bindings for a positional list such as `quickLinks`.
pub(crate) fn item_links(list: &str, links: &[LinkItem]) -> Vec<LinkBinding> {
    links
        .iter()
        .enumerate()
        .map(|(idx, link)| LinkBinding::item(list, idx, &link.href, &link.title))
        .collect()
}

#[cfg(test)]
pub(crate) fn assert_unique_paths(bindings: &[EditableBinding]) {
    let mut seen = std::collections::HashSet::new();
    for b in bindings {
        assert!(seen.insert(b.path.clone()), "duplicate binding path {}", b.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_links_pair_href_and_title_per_item() {
        let links = vec![LinkItem::new("About", "/about"), LinkItem::new("Blog", "/blog")];
        let bound = item_links("quickLinks", &links);
        let paths: Vec<String> = BindingList::default()
            .links(&bound)
            .finish()
            .into_iter()
            .map(|b| b.path.to_string())
            .collect();
        assert_eq!(
            paths,
            [
                "quickLinks[0].href",
                "quickLinks[0].title",
                "quickLinks[1].href",
                "quickLinks[1].title",
            ]
        );
    }

    #[test]
    fn resolve_with_no_overrides_is_the_default() {
        let footer: FooterConfig = resolve(FooterOverrides::default());
        assert_eq!(footer, FooterConfig::default());
    }

    #[test]
    fn link_items_deserialize_from_editor_json() {
        let link: LinkItem =
            serde_json::from_str(r#"{ "title": "Docs", "href": "https://docs.rs" }"#).unwrap();
        assert_eq!(link, LinkItem::new("Docs", "https://docs.rs"));
    }
}
