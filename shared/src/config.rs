use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub file_path: PathBuf,
    pub save_interval: Duration,
}

impl Config {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 3333;
    const DEFAULT_FILE_PATH: &'static str = "tmp/data.json";
    const DEFAULT_SAVE_SECS: u64 = 60;

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("DEFAULT_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match lookup("DEFAULT_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("DEFAULT_PORT '{}' is not a valid port, using {}", raw, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }),
            None => Self::DEFAULT_PORT,
        };

        let file_path = lookup("DEFAULT_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE_PATH));

        let save_secs = match lookup("DEFAULT_SAVING_FREQUENCY") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "DEFAULT_SAVING_FREQUENCY '{}' is not a positive number of seconds, using {}",
                        raw,
                        Self::DEFAULT_SAVE_SECS
                    );
                    Self::DEFAULT_SAVE_SECS
                }
            },
            None => Self::DEFAULT_SAVE_SECS,
        };

        Self {
            host,
            port,
            file_path,
            save_interval: Duration::from_secs(save_secs),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
