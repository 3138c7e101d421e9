#[cfg(feature = "web")]
use leptos::mount::mount_to_body;
#[cfg(feature = "web")]
use leptos::view;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod nav;
pub mod pages;
pub mod routes;

pub use crate::app::App;
