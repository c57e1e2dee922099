use log::{error, info};
use logmine::configuration::config::Config;
use logmine::controller::Controller;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default level
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    info!("Importing configuration");

    let config = Config::from_args().unwrap_or_else(|e| {
        error!("Unable to import configuration: {}", e);
        std::process::exit(1);
    });

    info!("Configuration imported successfully");

    let controller = Controller::new(config);
    if let Err(e) = controller.run().await {
        error!("Run failed: {}, exiting...", e);
        std::process::exit(1);
    }

    info!("All features written");
}
