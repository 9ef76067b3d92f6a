use deqcode_ui::App;
use leptos::prelude::*;

fn main() {
    // Panics show up in the browser console
    console_error_panic_hook::set_once();

    // tracing -> console.log
    tracing_wasm::set_as_global_default();

    mount_to_body(App);
}
