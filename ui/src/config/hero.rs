use serde::Deserialize;

use super::{BindingList, EditPath, EditableBinding, EditableSet, LinkBinding, SectionConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroConfig {
    pub badge: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub primary_cta_href: String,
    pub secondary_cta_href: String,
    pub feature1_text: String,
    pub feature2_text: String,
    pub feature3_text: String,
    pub trusted_by_text: String,
    pub show_trusted_logos: bool,
    pub show_animated_badge: bool,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            badge: "Streamlined for everyone".into(),
            title: "Technology that".into(),
            title_highlight: "just works".into(),
            subtitle: "We bridge the gap between complex technology and everyday users with \
                       intuitive, efficient solutions that simplify your digital experience."
                .into(),
            primary_cta: "Get Started".into(),
            secondary_cta: "Learn More".into(),
            primary_cta_href: "/start".into(),
            secondary_cta_href: "/about".into(),
            feature1_text: "Intuitive design".into(),
            feature2_text: "Reliable performance".into(),
            feature3_text: "Accessible to all".into(),
            trusted_by_text: "Trusted by teams who value simplicity".into(),
            show_trusted_logos: true,
            show_animated_badge: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroOverrides {
    pub badge: Option<String>,
    pub title: Option<String>,
    pub title_highlight: Option<String>,
    pub subtitle: Option<String>,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: Option<String>,
    #[serde(rename = "secondaryCTA")]
    pub secondary_cta: Option<String>,
    #[serde(rename = "primaryCTAHref")]
    pub primary_cta_href: Option<String>,
    #[serde(rename = "secondaryCTAHref")]
    pub secondary_cta_href: Option<String>,
    pub feature1_text: Option<String>,
    pub feature2_text: Option<String>,
    pub feature3_text: Option<String>,
    pub trusted_by_text: Option<String>,
    pub show_trusted_logos: Option<bool>,
    pub show_animated_badge: Option<bool>,
}

/// Hero nodes as the component lays them out. `badge` and `trusted_by` are
/// `None` while their sub-tree is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroBindings {
    pub badge: Option<EditableBinding>,
    pub title: EditableBinding,
    pub title_highlight: EditableBinding,
    pub subtitle: EditableBinding,
    pub features: [EditableBinding; 3],
    pub primary: LinkBinding,
    pub secondary: LinkBinding,
    pub trusted_by: Option<EditableBinding>,
}

impl EditableSet for HeroBindings {
    fn flatten(&self) -> Vec<EditableBinding> {
        let mut list = BindingList::default();
        list.maybe(&self.badge)
            .text(&self.title)
            .text(&self.title_highlight)
            .text(&self.subtitle);
        for feature in &self.features {
            list.text(feature);
        }
        list.links([&self.primary, &self.secondary])
            .maybe(&self.trusted_by)
            .finish()
    }
}

impl SectionConfig for HeroConfig {
    type Overrides = HeroOverrides;
    type Editable = HeroBindings;

    const SECTION_ID: &'static str = "hero";

    fn merge(self, o: HeroOverrides) -> Self {
        Self {
            badge: o.badge.unwrap_or(self.badge),
            title: o.title.unwrap_or(self.title),
            title_highlight: o.title_highlight.unwrap_or(self.title_highlight),
            subtitle: o.subtitle.unwrap_or(self.subtitle),
            primary_cta: o.primary_cta.unwrap_or(self.primary_cta),
            secondary_cta: o.secondary_cta.unwrap_or(self.secondary_cta),
            primary_cta_href: o.primary_cta_href.unwrap_or(self.primary_cta_href),
            secondary_cta_href: o.secondary_cta_href.unwrap_or(self.secondary_cta_href),
            feature1_text: o.feature1_text.unwrap_or(self.feature1_text),
            feature2_text: o.feature2_text.unwrap_or(self.feature2_text),
            feature3_text: o.feature3_text.unwrap_or(self.feature3_text),
            trusted_by_text: o.trusted_by_text.unwrap_or(self.trusted_by_text),
            show_trusted_logos: o.show_trusted_logos.unwrap_or(self.show_trusted_logos),
            show_animated_badge: o.show_animated_badge.unwrap_or(self.show_animated_badge),
        }
    }

    fn editable(&self) -> HeroBindings {
        let text = |field: &str, value: &str| EditableBinding::text(EditPath::field(field), value);
        HeroBindings {
            badge: self.show_animated_badge.then(|| text("badge", &self.badge)),
            title: text("title", &self.title),
            title_highlight: text("titleHighlight", &self.title_highlight),
            subtitle: text("subtitle", &self.subtitle),
            features: [
                text("feature1Text", &self.feature1_text),
                text("feature2Text", &self.feature2_text),
                text("feature3Text", &self.feature3_text),
            ],
            primary: LinkBinding::new(
                EditPath::field("primaryCTAHref"),
                &self.primary_cta_href,
                EditPath::field("primaryCTA"),
                &self.primary_cta,
            ),
            secondary: LinkBinding::new(
                EditPath::field("secondaryCTAHref"),
                &self.secondary_cta_href,
                EditPath::field("secondaryCTA"),
                &self.secondary_cta,
            ),
            trusted_by: self
                .show_trusted_logos
                .then(|| text("trustedByText", &self.trusted_by_text)),
        }
    }
}
