use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;

use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title formatter=|page: String| format!("{page} | TechFlow")/>
      <Router>
        <main class="min-h-screen bg-background text-foreground">
          <RoutesMenu/>
        </main>
      </Router>
    }
}
