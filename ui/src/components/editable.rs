use leptos::prelude::*;
use leptos::tachys::html::class::IntoClass;

use crate::config::EditableBinding;
use crate::nav::{follow, Navigator};

/// Text node the page editor can rewrite in place.
#[component]
pub fn EditableText(
    binding: EditableBinding,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let EditableBinding { path, value, .. } = binding;
    view! { <span data-editable=String::from(path) class=class>{value}</span> }
}

/// Button that carries an editable href and dispatches it on click.
/// `on_follow` runs after the dispatch.
pub fn link_button<N, C, F, V>(
    navigator: &N,
    href: &EditableBinding,
    class: C,
    aria_label: Option<String>,
    on_follow: F,
    children: V,
) -> impl IntoView + use<N, C, F, V>
where
    N: Navigator + Clone + 'static,
    C: IntoClass + 'static,
    F: Fn() + 'static,
    V: IntoView + 'static,
{
    let navigator = navigator.clone();
    let target = href.value.clone();
    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            data-editable-href=href.path.to_string()
            data-href=href.value.clone()
            on:click=move |_| follow(&target, &navigator, &on_follow)
        >
            {children}
        </button>
    }
}
