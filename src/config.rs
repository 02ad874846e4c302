use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Serialize)]
pub struct Config {
    pub serial_port: String,
    pub baud_rate: u32,
    pub timeout_secs: f64,
    pub query: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            serial_port: "/dev/ttyUSB0".to_string(),
            baud_rate: 9600,
            timeout_secs: 0.5,
            query: "?".to_string(),
        }
    }
}

impl Config {
    /// # Panics
    ///
    /// Panics if something unexpected happens.
    #[must_use]
    pub fn new() -> Config {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(Config::file_path()))
            .extract()
            .expect("Failed to construct Config")
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }

    /// # Panics
    ///
    /// Panics if something unexpected happens.
    pub fn save(&self) {
        let toml = toml::to_string(&self).expect("Failed to serialize config");
        let config_file_path = Config::file_path();
        std::fs::create_dir_all(
            config_file_path
                .parent()
                .expect("Failed to create config directory"),
        )
        .expect("Failed to create config directory");
        let mut f = File::create(config_file_path).expect("Failed to create config file");
        f.write_all(toml.as_bytes())
            .expect("Failed to write config");
    }

    /// # Panics
    ///
    /// Panics if something unexpected happens.
    fn file_path() -> PathBuf {
        dirs::config_dir()
            .expect("Failed to get config dir")
            .join("serial-probe")
            .join("config.toml")
    }
}
