// DMI Landing Page - Leptos 0.8 CSR
// Developed by The DMI Team (c)2025

mod browser;
mod home;

use leptos::prelude::*;

use home::Home;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = browser::load_config();
    leptos::mount::mount_to_body(move || view! { <Home config=config /> });
}
