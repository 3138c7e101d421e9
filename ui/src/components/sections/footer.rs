use leptos::prelude::*;

use crate::components::editable::{link_button, EditableText};
use crate::components::icon::{Icon, IconKind};
use crate::config::{resolve, FooterConfig, FooterOverrides, LinkBinding, SectionConfig};
use crate::nav::{use_smart_navigation, Navigator};

const TEXT_LINK_CLASS: &str =
    "h-auto p-0 text-sm text-muted-foreground hover:text-foreground justify-start text-left";
const SOCIAL_LINK_CLASS: &str = "h-9 w-9 p-0 inline-flex items-center justify-center rounded-md \
     text-muted-foreground hover:text-foreground hover:bg-accent";

fn text_links<N>(navigator: &N, links: Vec<LinkBinding>) -> impl IntoView + use<N>
where
    N: Navigator + Clone + 'static,
{
    links
        .into_iter()
        .map(|link| {
            link_button(
                navigator,
                &link.href,
                TEXT_LINK_CLASS,
                None,
                || (),
                view! { <EditableText binding=link.title/> },
            )
        })
        .collect_view()
}

fn social_links<N>(navigator: &N, links: Vec<LinkBinding>) -> impl IntoView + use<N>
where
    N: Navigator + Clone + 'static,
{
    links
        .into_iter()
        .enumerate()
        .map(|(idx, link)| {
            let icon = IconKind::social(idx).map(|kind| view! { <Icon kind class="h-4 w-4"/> });
            link_button(
                navigator,
                &link.href,
                SOCIAL_LINK_CLASS,
                Some(link.title.value.clone()),
                || (),
                view! {
                    {icon}
                    <EditableText binding=link.title class="sr-only"/>
                },
            )
        })
        .collect_view()
}

#[component]
pub fn Footer(#[prop(optional)] overrides: FooterOverrides) -> impl IntoView {
    let bound = resolve::<FooterConfig>(overrides).editable();
    let navigator = use_smart_navigation();

    view! {
        <footer id={FooterConfig::SECTION_ID} class="bg-muted/30 border-t border-border">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="py-12 lg:py-16">
                    <div class="grid gap-8 lg:grid-cols-4 md:grid-cols-2">
                        <div class="lg:col-span-2">
                            <div class="mb-4">
                                <h3 class="text-xl font-bold text-foreground">
                                    <EditableText binding=bound.brand_name/>
                                </h3>
                            </div>
                            <p class="text-muted-foreground mb-6 max-w-md leading-relaxed">
                                <EditableText binding=bound.tagline/>
                            </p>

                            <div class="space-y-3">
                                <div class="flex items-center gap-3 text-sm text-muted-foreground">
                                    <Icon kind=IconKind::Mail class="h-4 w-4 text-primary"/>
                                    <EditableText binding=bound.email/>
                                </div>
                                <div class="flex items-center gap-3 text-sm text-muted-foreground">
                                    <Icon kind=IconKind::Phone class="h-4 w-4 text-primary"/>
                                    <EditableText binding=bound.phone/>
                                </div>
                                <div class="flex items-start gap-3 text-sm text-muted-foreground">
                                    <Icon kind=IconKind::MapPin class="h-4 w-4 text-primary mt-0.5"/>
                                    <EditableText binding=bound.address/>
                                </div>
                            </div>
                        </div>

                        <div>
                            <h4 class="font-semibold text-foreground mb-4">"Quick Links"</h4>
                            <nav class="flex flex-col items-start space-y-3">
                                {text_links(&navigator, bound.quick_links)}
                            </nav>
                        </div>

                        <div>
                            <h4 class="font-semibold text-foreground mb-4">"Legal"</h4>
                            <nav class="flex flex-col items-start space-y-3 mb-6">
                                {text_links(&navigator, bound.legal_links)}
                            </nav>

                            <div>
                                <h5 class="font-medium text-foreground mb-3 text-sm">"Follow Us"</h5>
                                <div class="flex gap-2">
                                    {social_links(&navigator, bound.social_links)}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <hr class="border-border"/>

                <div class="py-6">
                    <div class="flex flex-col sm:flex-row justify-between items-center gap-4">
                        <p class="text-sm text-muted-foreground">
                            <EditableText binding=bound.copyright/>
                        </p>
                        <p class="text-xs text-muted-foreground">
                            "Built with care for intuitive user experiences"
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
