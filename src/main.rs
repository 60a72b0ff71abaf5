use leptos::prelude::*;
use project_finder_ui::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing for logging
    tracing_wasm::set_as_global_default();

    mount_to_body(App);
}
