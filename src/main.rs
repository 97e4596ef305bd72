use aquacortex_site::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    yew::Renderer::<App>::new().render();
}
