// Hydrates the server rendered page, data comes along with the HTML so the
// browser never calls the content endpoints itself.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    let _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
