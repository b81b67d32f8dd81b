use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{Config, General};
use crate::errors::InitError;
use crate::manager_ntfy::Ntfy;
use crate::manager_openmeteo::OpenMeteo;
use crate::store;
use crate::store::SettingsStore;

/// Manager structs used by the worker
pub struct Mgr {
    pub weather: OpenMeteo,
    pub ntfy: Ntfy,
    pub store: Box<dyn SettingsStore>,
}

/// Initializes logging and returns the manager structs built from config
///
/// # Arguments
///
/// * 'config' - the loaded configuration
pub fn init(config: &Config) -> Result<Mgr, InitError> {
    init_logging(&config.general)?;

    // Print version
    println!("teewatch version: {}", env!("CARGO_PKG_VERSION"));

    // Instantiate structs
    let weather = OpenMeteo::new(config.geo_ref.lat, config.geo_ref.long, &config.course.timezone);
    let ntfy = Ntfy::new(&config.notify.topic);
    let store = store::from_config(config.store.as_ref());

    Ok(Mgr { weather, ntfy, store })
}

/// Sets up log4rs with a console and/or file appender according to config
///
/// # Arguments
///
/// * 'general' - the general section of the configuration
fn init_logging(general: &General) -> Result<(), InitError> {
    let pattern = "{d(%Y-%m-%d %H:%M:%S)} {l} {m}{n}";

    let mut builder = LogConfig::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let console = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build();

        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    if !general.log_path.is_empty() {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build(format!("{}teewatch.log", general.log_path))
            .map_err(|e| InitError(e.to_string()))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(general.log_level))
        .map_err(|e| InitError(e.to_string()))?;

    log4rs::init_config(log_config).map_err(|e| InitError(e.to_string()))?;

    Ok(())
}
