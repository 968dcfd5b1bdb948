use cityscape::CityscapeConfig;
use cityscape_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = cityscape::run(CityscapeConfig::default()) {
        log::error!("cityscape runtime error: {e:#}");
        std::process::exit(1);
    }
}
