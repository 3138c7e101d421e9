use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Title text="Not found"/>
      <section class="flex min-h-screen flex-col items-center justify-center gap-4 text-center">
        <h1 class="text-3xl font-bold">"404 – not found"</h1>
        <a href="/" class="text-primary underline-offset-4 hover:underline">"Back to the home page"</a>
      </section>
    }
}
