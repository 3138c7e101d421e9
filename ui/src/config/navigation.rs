use serde::Deserialize;

use super::{BindingList, EditPath, EditableBinding, EditableSet, LinkBinding, SectionConfig};

/// A top-bar link. Unlike footer links it names its own editor ids; an item
/// without them falls back to its position, `navigationItems[i].name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub text_editable_id: Option<String>,
    #[serde(default)]
    pub href_editable_id: Option<String>,
}

impl NavItem {
    fn binding(&self, index: usize) -> LinkBinding {
        let path = |id: &Option<String>, field: &str| match id {
            Some(id) => EditPath::custom(id),
            None => EditPath::item("navigationItems", index, field),
        };
        LinkBinding::new(
            path(&self.href_editable_id, "href"),
            &self.href,
            path(&self.text_editable_id, "name"),
            &self.name,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub is_transparent: bool,
    pub light_text: bool,
    pub logo_text: String,
    pub sign_in_button: String,
    pub sign_in_href: String,
    pub get_started_button: String,
    pub get_started_href: String,
    pub navigation_items: Vec<NavItem>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            is_transparent: true,
            light_text: true,
            logo_text: "TechFlow".into(),
            sign_in_button: "Sign In".into(),
            sign_in_href: "/signin".into(),
            get_started_button: "Get Started".into(),
            get_started_href: "/signup".into(),
            navigation_items: vec![NavItem {
                name: "Home".into(),
                href: "#hero".into(),
                text_editable_id: Some("text-nav-home".into()),
                href_editable_id: Some("link-nav-home".into()),
            }],
        }
    }
}

impl NavigationConfig {
    /// A transparent bar watches the window scroll; a solid one never does.
    pub fn tracks_scroll(&self) -> bool {
        self.is_transparent
    }

    /// Character shown in the square logo mark.
    pub fn logo_initial(&self) -> String {
        self.logo_text.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationOverrides {
    pub is_transparent: Option<bool>,
    pub light_text: Option<bool>,
    pub logo_text: Option<String>,
    pub sign_in_button: Option<String>,
    pub sign_in_href: Option<String>,
    pub get_started_button: Option<String>,
    pub get_started_href: Option<String>,
    pub navigation_items: Option<Vec<NavItem>>,
}

/// Navigation nodes as the component lays them out. The items and both
/// buttons render twice (desktop bar and mobile menu) from the same bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationBindings {
    pub logo_text: EditableBinding,
    pub items: Vec<LinkBinding>,
    pub sign_in: LinkBinding,
    pub get_started: LinkBinding,
}

impl EditableSet for NavigationBindings {
    fn flatten(&self) -> Vec<EditableBinding> {
        BindingList::default()
            .text(&self.logo_text)
            .links(&self.items)
            .links([&self.sign_in, &self.get_started])
            .finish()
    }
}

impl SectionConfig for NavigationConfig {
    type Overrides = NavigationOverrides;
    type Editable = NavigationBindings;

    const SECTION_ID: &'static str = "navigation";

    fn merge(self, o: NavigationOverrides) -> Self {
        Self {
            is_transparent: o.is_transparent.unwrap_or(self.is_transparent),
            light_text: o.light_text.unwrap_or(self.light_text),
            logo_text: o.logo_text.unwrap_or(self.logo_text),
            sign_in_button: o.sign_in_button.unwrap_or(self.sign_in_button),
            sign_in_href: o.sign_in_href.unwrap_or(self.sign_in_href),
            get_started_button: o.get_started_button.unwrap_or(self.get_started_button),
            get_started_href: o.get_started_href.unwrap_or(self.get_started_href),
            navigation_items: o.navigation_items.unwrap_or(self.navigation_items),
        }
    }

    fn editable(&self) -> NavigationBindings {
        NavigationBindings {
            logo_text: EditableBinding::text(EditPath::field("logoText"), &self.logo_text),
            items: self
                .navigation_items
                .iter()
                .enumerate()
                .map(|(idx, item)| item.binding(idx))
                .collect(),
            sign_in: LinkBinding::new(
                EditPath::field("signInHref"),
                &self.sign_in_href,
                EditPath::field("signInButton"),
                &self.sign_in_button,
            ),
            get_started: LinkBinding::new(
                EditPath::field("getStartedHref"),
                &self.get_started_href,
                EditPath::field("getStartedButton"),
                &self.get_started_button,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{assert_unique_paths, resolve, BindingKind};

    #[test]
    fn flags_override_independently() {
        let nav: NavigationConfig = resolve(NavigationOverrides {
            light_text: Some(false),
            ..Default::default()
        });
        assert!(nav.is_transparent);
        assert!(!nav.light_text);
        assert_eq!(nav.logo_text, "TechFlow");
    }

    #[test]
    fn navigation_items_use_their_own_editor_ids() {
        let nav = NavigationConfig::default();
        let bindings = nav.bindings();
        assert_unique_paths(&bindings);
        let home_href = bindings
            .iter()
            .find(|b| b.path.as_str() == "link-nav-home")
            .unwrap();
        assert_eq!(home_href.kind, BindingKind::Href);
        assert_eq!(home_href.value, "#hero");
        assert!(bindings.iter().any(|b| b.path.as_str() == "text-nav-home" && b.value == "Home"));
    }

    #[test]
    fn empty_items_override_drops_all_links() {
        let nav: NavigationConfig = resolve(NavigationOverrides {
            navigation_items: Some(Vec::new()),
            ..Default::default()
        });
        assert!(nav.navigation_items.is_empty());
        assert_eq!(nav.bindings().len(), 5);
    }

    #[test]
    fn logo_initial_takes_first_character() {
        assert_eq!(NavigationConfig::default().logo_initial(), "T");
        let nav: NavigationConfig = resolve(NavigationOverrides {
            logo_text: Some("Équipe".into()),
            ..Default::default()
        });
        assert_eq!(nav.logo_initial(), "É");
        let nav: NavigationConfig = resolve(NavigationOverrides {
            logo_text: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(nav.logo_initial(), "");
    }

    #[test]
    fn items_deserialize_with_editor_ids() {
        let o: NavigationOverrides = serde_json::from_str(
            r##"{
                "isTransparent": false,
                "navigationItems": [
                    { "name": "Pricing", "href": "#pricing",
                      "textEditableId": "text-nav-pricing", "hrefEditableId": "link-nav-pricing" }
                ]
            }"##,
        )
        .unwrap();
        assert_eq!(o.is_transparent, Some(false));
        let items = o.navigation_items.unwrap();
        assert_eq!(items[0].href_editable_id.as_deref(), Some("link-nav-pricing"));
    }

    #[test]
    fn items_without_editor_ids_bind_by_position() {
        let o: NavigationOverrides = serde_json::from_str(
            r##"{
                "navigationItems": [
                    { "name": "Home", "href": "#hero", "textEditableId": "text-nav-home" },
                    { "name": "Pricing", "href": "#pricing" }
                ]
            }"##,
        )
        .unwrap();
        let nav: NavigationConfig = resolve(o);
        let items = nav.editable().items;
        assert_eq!(items[0].title.path.as_str(), "text-nav-home");
        assert_eq!(items[0].href.path.as_str(), "navigationItems[0].href");
        assert_eq!(items[1].title.path.as_str(), "navigationItems[1].name");
        assert_eq!(items[1].href.value, "#pricing");
        assert_unique_paths(&nav.bindings());
    }

    #[test]
    fn rendered_paths_follow_layout_order() {
        let paths: Vec<String> = NavigationConfig::default()
            .bindings()
            .into_iter()
            .map(|b| b.path.into())
            .collect();
        assert_eq!(
            paths,
            [
                "logoText",
                "link-nav-home",
                "text-nav-home",
                "signInHref",
                "signInButton",
                "getStartedHref",
                "getStartedButton",
            ]
        );
    }

    #[test]
    fn only_transparent_bars_track_scroll() {
        assert!(NavigationConfig::default().tracks_scroll());
        let solid: NavigationConfig = resolve(NavigationOverrides {
            is_transparent: Some(false),
            ..Default::default()
        });
        assert!(!solid.tracks_scroll());
    }
}
