use leptos::prelude::*;

use crate::components::editable::{link_button, EditableText};
use crate::components::icon::{Icon, IconKind};
use crate::config::{
    resolve, EditableBinding, HeroBindings, HeroConfig, HeroOverrides, SectionConfig,
};
use crate::nav::use_smart_navigation;

const TRUSTED_LOGO_SLOTS: usize = 5;

const FADE_IN_CSS: &str = r#"
@keyframes fade-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}
.animate-fade-in { animation: fade-in 0.6s ease-out forwards; opacity: 0; }
.animation-delay-100 { animation-delay: 0.1s; }
.animation-delay-200 { animation-delay: 0.2s; }
.animation-delay-300 { animation-delay: 0.3s; }
.animation-delay-400 { animation-delay: 0.4s; }
.animation-delay-500 { animation-delay: 0.5s; }
"#;

#[component]
fn FeaturePill(icon: IconKind, binding: EditableBinding) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 rounded-full border border-border bg-background/50 px-4 py-2 text-sm">
            <Icon kind=icon class="h-4 w-4 text-primary"/>
            <EditableText binding class="text-muted-foreground"/>
        </div>
    }
}

#[component]
pub fn Hero(#[prop(optional)] overrides: HeroOverrides) -> impl IntoView {
    let HeroBindings {
        badge,
        title,
        title_highlight,
        subtitle,
        features,
        primary,
        secondary,
        trusted_by,
    } = resolve::<HeroConfig>(overrides).editable();
    let navigator = use_smart_navigation();

    let badge = badge.map(|binding| {
        view! {
            <div class="mb-8 inline-flex animate-fade-in">
                <div class="flex items-center gap-2 rounded-full border border-border bg-background/50 backdrop-blur-sm px-4 py-2 text-sm">
                    <Icon kind=IconKind::Sparkles class="h-4 w-4 text-primary animate-pulse"/>
                    <EditableText binding class="text-muted-foreground"/>
                </div>
            </div>
        }
    });

    let trusted = trusted_by.map(|binding| {
        view! {
            <div class="mt-20 w-full max-w-4xl animate-fade-in animation-delay-500">
                <p class="mb-6 text-sm text-muted-foreground">
                    <EditableText binding/>
                </p>
                <div class="flex flex-wrap items-center justify-center gap-8 opacity-50 grayscale">
                    {(0..TRUSTED_LOGO_SLOTS)
                        .map(|_| view! { <div class="h-8 w-24 rounded bg-muted-foreground/10"></div> })
                        .collect_view()}
                </div>
            </div>
        }
    });

    let pills = features
        .into_iter()
        .zip([IconKind::Zap, IconKind::Shield, IconKind::Globe])
        .map(|(binding, icon)| view! { <FeaturePill icon binding/> })
        .collect_view();

    let primary_cta = link_button(
        &navigator,
        &primary.href,
        "group inline-flex items-center rounded-md bg-primary px-8 py-3 text-base font-medium \
         text-primary-foreground shadow-lg shadow-primary/20 hover:shadow-xl hover:shadow-primary/30 transition-all",
        None,
        || (),
        view! {
            <EditableText binding=primary.title/>
            <Icon kind=IconKind::ArrowRight class="ml-2 h-5 w-5 transition-transform group-hover:translate-x-1"/>
        },
    );
    let secondary_cta = link_button(
        &navigator,
        &secondary.href,
        "inline-flex items-center rounded-md border border-border/50 px-8 py-3 backdrop-blur-sm \
         text-base font-medium hover:bg-background/50 transition-all",
        None,
        || (),
        view! { <EditableText binding=secondary.title/> },
    );

    view! {
        <section id={HeroConfig::SECTION_ID} class="relative min-h-[90vh] overflow-hidden bg-background">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,var(--primary)_0.5px,transparent_0.5px)] [background-size:16px_16px] opacity-[0.03]"></div>
            <div class="absolute left-1/4 top-1/4 h-96 w-96 rounded-full bg-primary/[0.03] blur-3xl"></div>
            <div class="absolute right-1/4 bottom-1/4 h-96 w-96 rounded-full bg-accent/[0.03] blur-3xl"></div>

            <div class="container relative mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex min-h-[90vh] flex-col items-center justify-center py-20 text-center">
                    {badge}

                    <h1 class="max-w-4xl text-5xl font-bold tracking-tight sm:text-6xl lg:text-7xl animate-fade-in animation-delay-100">
                        <EditableText binding=title class="text-foreground"/>
                        <span class="relative ml-3">
                            <EditableText
                                binding=title_highlight
                                class="bg-gradient-to-r from-primary via-primary/80 to-accent bg-clip-text text-transparent"
                            />
                            <svg
                                class="absolute -right-2 -top-2 h-6 w-6 text-primary/60"
                                fill="currentColor"
                                viewBox="0 0 24 24"
                                aria-hidden="true"
                            >
                                <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/>
                            </svg>
                        </span>
                    </h1>

                    <p class="mt-6 max-w-2xl text-lg leading-relaxed text-muted-foreground sm:text-xl animate-fade-in animation-delay-200">
                        <EditableText binding=subtitle/>
                    </p>

                    <div class="mt-8 flex flex-wrap items-center justify-center gap-4 animate-fade-in animation-delay-300">
                        {pills}
                    </div>

                    <div class="mt-10 flex flex-col gap-4 sm:flex-row animate-fade-in animation-delay-400">
                        {primary_cta}
                        {secondary_cta}
                    </div>

                    {trusted}
                </div>
            </div>

            <style>{FADE_IN_CSS}</style>
        </section>
    }
}
