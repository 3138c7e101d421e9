use leptos::prelude::*;

use crate::components::editable::{link_button, EditableText};
use crate::components::icon::{Icon, IconKind};
use crate::config::{
    resolve, EditableBinding, LinkBinding, NavigationConfig, NavigationOverrides, SectionConfig,
};
use crate::nav::{
    follow, is_scrolled, use_smart_navigation, watch_window_scroll, MenuState, NavStyle,
    Navigator,
};

const DESKTOP_LINK: &str = "px-3 py-2 text-sm font-medium transition-colors duration-200 rounded-md";
const MOBILE_LINK: &str =
    "block px-3 py-2 text-base font-medium transition-colors duration-200 rounded-md";

/// Anchors for the configured items. `on_follow` runs after dispatch.
fn item_links<N, F>(
    navigator: &N,
    items: &[LinkBinding],
    base: &'static str,
    style: Memo<NavStyle>,
    on_follow: F,
) -> impl IntoView + use<N, F>
where
    N: Navigator + Clone + 'static,
    F: Fn() + Clone + 'static,
{
    items
        .iter()
        .cloned()
        .map(|LinkBinding { href, title }| {
            let navigator = navigator.clone();
            let on_follow = on_follow.clone();
            let EditableBinding { path, value, .. } = href;
            let target = value.clone();
            view! {
                <a
                    href=value.clone()
                    data-editable-href=String::from(path)
                    data-href=value
                    class=move || format!("{base} {}", style.get().link_tone())
                    on:click=move |ev| {
                        ev.prevent_default();
                        follow(&target, &navigator, &on_follow);
                    }
                >
                    <EditableText binding=title/>
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Navigation(#[prop(optional)] overrides: NavigationOverrides) -> impl IntoView {
    let config: NavigationConfig = resolve(overrides);
    let bound = config.editable();
    let navigator = use_smart_navigation();

    let menu = RwSignal::new(MenuState::default());
    let scrolled = RwSignal::new(false);

    let is_transparent = config.is_transparent;
    let light_text = config.light_text;
    if config.tracks_scroll() {
        watch_window_scroll(move |y| scrolled.set(is_scrolled(y)));
    }
    let style = Memo::new(move |_| NavStyle::select(is_transparent, scrolled.get(), light_text));

    let close_menu = move || menu.update(|m| *m = m.closed());

    let sign_in = |base: &'static str, close: bool| {
        link_button(
            &navigator,
            &bound.sign_in.href,
            move || format!("{base} {}", style.get().ghost_button_class()),
            None,
            move || if close { close_menu() },
            view! { <EditableText binding=bound.sign_in.title.clone()/> },
        )
    };
    let get_started = |class: &'static str, close: bool| {
        link_button(
            &navigator,
            &bound.get_started.href,
            class,
            None,
            move || if close { close_menu() },
            view! {
                <EditableText binding=bound.get_started.title.clone()/>
                <Icon kind=IconKind::ArrowRight class="ml-2 size-4 transition-transform group-hover:translate-x-1"/>
            },
        )
    };

    let desktop_links = item_links(&navigator, &bound.items, DESKTOP_LINK, style, || ());
    let mobile_links = item_links(&navigator, &bound.items, MOBILE_LINK, style, close_menu);
    let desktop_sign_in =
        sign_in("inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium", false);
    let desktop_get_started = get_started(
        "group inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium \
         text-primary-foreground bg-primary/90 hover:bg-primary backdrop-blur-sm",
        false,
    );
    let mobile_sign_in =
        sign_in("inline-flex w-full items-center justify-start rounded-md px-4 py-2", true);
    let mobile_get_started = get_started(
        "group inline-flex w-full items-center justify-start rounded-md px-4 py-2 \
         text-primary-foreground bg-primary/90 hover:bg-primary",
        true,
    );

    view! {
        <nav id={NavigationConfig::SECTION_ID} class=move || style.get().container_class()>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="relative flex h-16 items-center justify-center">
                    <div class="flex-shrink-0">
                        <a href="/" class="flex items-center space-x-2">
                            <div class="size-8 rounded-lg bg-gradient-to-br from-primary to-primary/60 flex items-center justify-center">
                                <span class="text-primary-foreground font-bold text-sm">
                                    {config.logo_initial()}
                                </span>
                            </div>
                            <span class=move || style.get().logo_class()>
                                <EditableText binding=bound.logo_text/>
                            </span>
                        </a>
                    </div>

                    <div class="hidden lg:block absolute left-1/2 transform -translate-x-1/2">
                        <div class="flex items-center space-x-8">{desktop_links}</div>
                    </div>

                    <div class="hidden md:flex items-center space-x-4 absolute right-4">
                        {desktop_sign_in}
                        {desktop_get_started}
                    </div>

                    <div class="md:hidden absolute right-4">
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            class=move || format!(
                                "inline-flex items-center rounded-md p-2 {}",
                                style.get().ghost_button_class()
                            )
                            on:click=move |_| menu.update(|m| *m = m.toggled())
                        >
                            {move || {
                                let kind = if menu.get().is_open() { IconKind::Close } else { IconKind::Menu };
                                view! { <Icon kind class="size-5"/> }
                            }}
                        </button>
                    </div>
                </div>

                <div class=move || {
                    if menu.get().is_open() {
                        "md:hidden transition-all duration-300 ease-in-out overflow-hidden max-h-96 pb-4"
                    } else {
                        "md:hidden transition-all duration-300 ease-in-out overflow-hidden max-h-0"
                    }
                }>
                    <div class=move || format!("px-2 pt-2 pb-3 space-y-1 border-t {}", style.get().divider_class())>
                        {mobile_links}
                        <div class="pt-4 flex flex-col space-y-2">
                            {mobile_sign_in}
                            {mobile_get_started}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
