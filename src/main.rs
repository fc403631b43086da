use tocbox::app;
use tocbox::config::Config;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = Config::create_default() {
        log::warn!("Could not create default config: {e}");
    }
    let config = Config::load();

    app::run(config)
}
