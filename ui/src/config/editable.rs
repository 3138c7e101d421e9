use std::fmt;

/// Path the page editor uses to find a rendered node, e.g. `quickLinks[2].title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditPath(String);

impl EditPath {
    pub fn field(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn item(list: &str, index: usize, field: &str) -> Self {
        Self(format!("{list}[{index}].{field}"))
    }

    /// Free-form id supplied by content, used as-is.
    pub fn custom(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EditPath> for String {
    fn from(path: EditPath) -> Self {
        path.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `data-editable`
    Text,
    /// `data-editable-href` plus the literal `data-href`
    Href,
}

impl BindingKind {
    pub fn attribute(self) -> &'static str {
        match self {
            BindingKind::Text => "data-editable",
            BindingKind::Href => "data-editable-href",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableBinding {
    pub path: EditPath,
    pub kind: BindingKind,
    pub value: String,
}

impl EditableBinding {
    pub fn text(path: EditPath, value: &str) -> Self {
        Self { path, kind: BindingKind::Text, value: value.to_owned() }
    }

    pub fn href(path: EditPath, value: &str) -> Self {
        Self { path, kind: BindingKind::Href, value: value.to_owned() }
    }
}

/// A rendered link: its href slot and the title shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBinding {
    pub href: EditableBinding,
    pub title: EditableBinding,
}

impl LinkBinding {
    pub fn new(href_path: EditPath, href: &str, title_path: EditPath, title: &str) -> Self {
        Self {
            href: EditableBinding::href(href_path, href),
            title: EditableBinding::text(title_path, title),
        }
    }

    /// Title/href pair for entry `index` of a positional list like `quickLinks`.
    pub fn item(list: &str, index: usize, href: &str, title: &str) -> Self {
        Self::new(
            EditPath::item(list, index, "href"),
            href,
            EditPath::item(list, index, "title"),
            title,
        )
    }

    fn push_into(self, out: &mut Vec<EditableBinding>) {
        out.push(self.href);
        out.push(self.title);
    }
}

/// Collects a section's bindings in render order.
#[derive(Debug, Default)]
pub struct BindingList(Vec<EditableBinding>);

impl BindingList {
    pub fn text(&mut self, binding: &EditableBinding) -> &mut Self {
        self.0.push(binding.clone());
        self
    }

    pub fn maybe(&mut self, binding: &Option<EditableBinding>) -> &mut Self {
        self.0.extend(binding.iter().cloned());
        self
    }

    pub fn links<'a>(&mut self, links: impl IntoIterator<Item = &'a LinkBinding>) -> &mut Self {
        for link in links {
            link.clone().push_into(&mut self.0);
        }
        self
    }

    pub fn finish(&mut self) -> Vec<EditableBinding> {
        std::mem::take(&mut self.0)
    }
}
