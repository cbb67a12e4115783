use ehub::domain::config::AppConfig;
use ehub::kernel::config::load_config;
use ehub_logger::Logger;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    let config: AppConfig = load_config(None::<&str>).unwrap_or_else(|err| {
        warn!(%err, "Falling back to the default configuration");
        AppConfig::default()
    });

    let session = ehub::init(&config);

    info!(
        room = %config.room.title,
        features = ?ehub::features::ENABLED,
        messages = session.chat().read().len(),
        "EduHub shell ready"
    );

    Ok(())
}
