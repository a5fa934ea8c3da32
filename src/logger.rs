use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::codec::BitsPerChannel;
use crate::payload;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    let config = match create_fallback_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid fallback logging configuration: {}", e);
            return;
        }
    };
    if let Err(e) = log4rs::init_config(config) {
        eprintln!("Unable to initialize logging: {}", e);
    }
}

fn create_fallback_config() -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
}

pub fn log_capacity(channel_count: usize, bits_per_channel: BitsPerChannel) {
    log::info!(
        "{} channels can hold {} payload bytes with {} bits per channel",
        channel_count,
        payload::capacity(channel_count, bits_per_channel),
        bits_per_channel.bits()
    );
}

#[cfg(test)]
mod test {
    use log::LevelFilter;

    use super::create_fallback_config;

    #[test]
    fn fallback_config_logs_warnings_to_stderr() {
        let config = create_fallback_config().expect("Fallback configuration must be valid");
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.root().appenders(), &["stderr".to_owned()]);
        assert_eq!(config.appenders().len(), 1);
    }
}
