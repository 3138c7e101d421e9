use serde::Deserialize;

use super::{
    item_links, BindingList, EditPath, EditableBinding, EditableSet, LinkBinding, LinkItem,
    SectionConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterConfig {
    pub brand_name: String,
    pub tagline: String,
    pub copyright: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub quick_links: Vec<LinkItem>,
    pub legal_links: Vec<LinkItem>,
    pub social_links: Vec<LinkItem>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            brand_name: "Test Site".into(),
            tagline: "Streamlined technology solutions that simplify complexity for everyday users."
                .into(),
            copyright: "© 2024 Test Site. All rights reserved.".into(),
            email: "hello@testsite.com".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 Tech Street, Innovation City, IC 12345".into(),
            quick_links: vec![
                LinkItem::new("About", "/about"),
                LinkItem::new("Services", "/services"),
                LinkItem::new("Contact", "/contact"),
            ],
            legal_links: vec![
                LinkItem::new("Privacy Policy", "/privacy"),
                LinkItem::new("Terms of Service", "/terms"),
            ],
            social_links: vec![
                LinkItem::new("GitHub", "https://github.com"),
                LinkItem::new("Twitter", "https://twitter.com"),
                LinkItem::new("LinkedIn", "https://linkedin.com"),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterOverrides {
    pub brand_name: Option<String>,
    pub tagline: Option<String>,
    pub copyright: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub quick_links: Option<Vec<LinkItem>>,
    pub legal_links: Option<Vec<LinkItem>>,
    pub social_links: Option<Vec<LinkItem>>,
}

/// Footer nodes as the component lays them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterBindings {
    pub brand_name: EditableBinding,
    pub tagline: EditableBinding,
    pub email: EditableBinding,
    pub phone: EditableBinding,
    pub address: EditableBinding,
    pub quick_links: Vec<LinkBinding>,
    pub legal_links: Vec<LinkBinding>,
    pub social_links: Vec<LinkBinding>,
    pub copyright: EditableBinding,
}

impl EditableSet for FooterBindings {
    fn flatten(&self) -> Vec<EditableBinding> {
        BindingList::default()
            .text(&self.brand_name)
            .text(&self.tagline)
            .text(&self.email)
            .text(&self.phone)
            .text(&self.address)
            .links(&self.quick_links)
            .links(&self.legal_links)
            .links(&self.social_links)
            .text(&self.copyright)
            .finish()
    }
}

impl SectionConfig for FooterConfig {
    type Overrides = FooterOverrides;
    type Editable = FooterBindings;

    const SECTION_ID: &'static str = "footer";

    fn merge(self, o: FooterOverrides) -> Self {
        Self {
            brand_name: o.brand_name.unwrap_or(self.brand_name),
            tagline: o.tagline.unwrap_or(self.tagline),
            copyright: o.copyright.unwrap_or(self.copyright),
            email: o.email.unwrap_or(self.email),
            phone: o.phone.unwrap_or(self.phone),
            address: o.address.unwrap_or(self.address),
            quick_links: o.quick_links.unwrap_or(self.quick_links),
            legal_links: o.legal_links.unwrap_or(self.legal_links),
            social_links: o.social_links.unwrap_or(self.social_links),
        }
    }

    fn editable(&self) -> FooterBindings {
        FooterBindings {
            brand_name: EditableBinding::text(EditPath::field("brandName"), &self.brand_name),
            tagline: EditableBinding::text(EditPath::field("tagline"), &self.tagline),
            email: EditableBinding::text(EditPath::field("email"), &self.email),
            phone: EditableBinding::text(EditPath::field("phone"), &self.phone),
            address: EditableBinding::text(EditPath::field("address"), &self.address),
            quick_links: item_links("quickLinks", &self.quick_links),
            legal_links: item_links("legalLinks", &self.legal_links),
            social_links: item_links("socialLinks", &self.social_links),
            copyright: EditableBinding::text(EditPath::field("copyright"), &self.copyright),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{assert_unique_paths, resolve};

    #[test]
    fn default_copyright_is_rendered_verbatim() {
        let footer: FooterConfig = resolve(FooterOverrides::default());
        let copyright = footer.editable().copyright;
        assert_eq!(copyright.path.as_str(), "copyright");
        assert_eq!(copyright.value, "© 2024 Test Site. All rights reserved.");
    }

    #[test]
    fn copyright_override_leaves_other_fields_at_default() {
        let footer: FooterConfig = resolve(FooterOverrides {
            copyright: Some("© 2025 Acme".into()),
            ..Default::default()
        });
        let rendered = footer.editable();
        assert_eq!(rendered.copyright.value, "© 2025 Acme");
        assert_eq!(rendered.email.value, "hello@testsite.com");
        assert_eq!(footer.quick_links, FooterConfig::default().quick_links);
    }

    #[test]
    fn empty_list_override_replaces_default_list() {
        let footer: FooterConfig = resolve(FooterOverrides {
            legal_links: Some(Vec::new()),
            ..Default::default()
        });
        assert!(footer.legal_links.is_empty());
        let rendered = footer.editable();
        assert!(rendered.legal_links.is_empty());
        assert_eq!(rendered.social_links.len(), 3);
    }

    #[test]
    fn list_override_is_not_merged_by_index() {
        let footer: FooterConfig = resolve(FooterOverrides {
            quick_links: Some(vec![LinkItem::new("Pricing", "/pricing")]),
            ..Default::default()
        });
        assert_eq!(footer.quick_links, vec![LinkItem::new("Pricing", "/pricing")]);
    }

    #[test]
    fn every_visible_string_has_one_binding() {
        let footer = FooterConfig::default();
        let bindings = footer.bindings();
        assert_unique_paths(&bindings);
        // six scalars plus title/href for each of the eight links
        assert_eq!(bindings.len(), 6 + 2 * 8);
        assert!(bindings.iter().any(|b| b.path.as_str() == "socialLinks[1].href"
            && b.value == "https://twitter.com"));
    }

    #[test]
    fn rendered_paths_match_editor_field_names() {
        let paths: Vec<String> = FooterConfig::default()
            .bindings()
            .into_iter()
            .map(|b| b.path.into())
            .collect();
        assert_eq!(
            paths,
            [
                "brandName",
                "tagline",
                "email",
                "phone",
                "address",
                "quickLinks[0].href",
                "quickLinks[0].title",
                "quickLinks[1].href",
                "quickLinks[1].title",
                "quickLinks[2].href",
                "quickLinks[2].title",
                "legalLinks[0].href",
                "legalLinks[0].title",
                "legalLinks[1].href",
                "legalLinks[1].title",
                "socialLinks[0].href",
                "socialLinks[0].title",
                "socialLinks[1].href",
                "socialLinks[1].title",
                "socialLinks[2].href",
                "socialLinks[2].title",
                "copyright",
            ]
        );
    }

    #[test]
    fn link_hrefs_carry_their_literal_value() {
        let rendered = FooterConfig::default().editable();
        assert_eq!(rendered.quick_links[1].href.value, "/services");
        assert_eq!(rendered.social_links[2].href.value, "https://linkedin.com");
        assert_eq!(rendered.social_links[2].title.value, "LinkedIn");
    }

    #[test]
    fn overrides_read_camel_case_keys_and_nulls() {
        let o: FooterOverrides = serde_json::from_str(
            r#"{ "brandName": "Acme", "email": null, "quickLinks": [] }"#,
        )
        .unwrap();
        assert_eq!(o.brand_name.as_deref(), Some("Acme"));
        assert_eq!(o.email, None);
        assert_eq!(o.quick_links, Some(Vec::new()));
    }
}
