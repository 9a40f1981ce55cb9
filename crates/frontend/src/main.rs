mod admin;
mod app;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    if !civic_id_frontend_common::logging::init_logging() {
        tracing::warn!("A tracing subscriber was already installed");
    }
    yew::Renderer::<App>::new().render();
}
