use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::{document, window};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Opened in a fresh, unrelated tab.
    External,
    /// Handed to the in-app navigator untouched.
    Internal,
}

impl LinkTarget {
    pub fn classify(href: &str) -> Self {
        if href.starts_with("http") {
            LinkTarget::External
        } else {
            LinkTarget::Internal
        }
    }
}

pub trait Navigator {
    fn open_external(&self, href: &str);
    fn navigate(&self, href: &str);
}

/// Runs when a link or call-to-action is clicked.
pub fn activate<N: Navigator + ?Sized>(href: &str, navigator: &N) {
    match LinkTarget::classify(href) {
        LinkTarget::External => navigator.open_external(href),
        LinkTarget::Internal => navigator.navigate(href),
    }
}

/// Click handler body for rendered links: dispatch, then `after`.
pub fn follow<N: Navigator + ?Sized>(href: &str, navigator: &N, after: impl FnOnce()) {
    activate(href, navigator);
    after();
}

/// Browser navigator: new tabs for external links, smooth scrolling for
/// in-page anchors, the client router for everything else.
#[derive(Clone)]
pub struct SmartNavigation<F> {
    route: F,
}

pub fn use_smart_navigation() -> SmartNavigation<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    SmartNavigation { route: use_navigate() }
}

impl<F> Navigator for SmartNavigation<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn open_external(&self, href: &str) {
        if let Err(err) =
            window().open_with_url_and_target_and_features(href, "_blank", "noopener,noreferrer")
        {
            console_warn(&format!("could not open {href}: {err:?}"));
        }
    }

    fn navigate(&self, href: &str) {
        if let Some(id) = href.strip_prefix('#') {
            if scroll_to_anchor(id) {
                return;
            }
        }
        (self.route)(href, NavigateOptions::default());
    }
}

fn scroll_to_anchor(id: &str) -> bool {
    let Some(target) = document().get_element_by_id(id) else {
        return false;
    };

    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
