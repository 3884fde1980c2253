#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod gallery;
pub mod profile;
pub mod seo;
#[cfg(feature = "ssr")]
pub mod server;
pub mod socials;
pub mod stagger;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();
    log::debug!("hydrating home page");
    leptos::mount::hydrate_body(App);
}
