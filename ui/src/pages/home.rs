use leptos::component;
use leptos::IntoView;
use leptos::view;
use leptos_meta::Title;

use crate::components::sections::{Footer, Hero, Navigation};
use crate::content::PageContent;

#[component]
pub fn Home() -> impl IntoView {
    let PageContent { navigation, hero, footer } = PageContent::load();

    view! {
      <Title text="Home"/>
      <Navigation overrides=navigation/>
      <Hero overrides=hero/>
      <Footer overrides=footer/>
    }
}
