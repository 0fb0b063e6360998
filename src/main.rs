//! Browser entry point. Build with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        let config = bookshelf::config::ClientConfig::from_build_env();
        let level = config.log_level.parse().unwrap_or(log::Level::Info);
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(level);
        log::info!("bookshelf starting, api at {}", config.api_base_url);
        leptos::mount::mount_to_body(bookshelf::app::App);
    }
}
