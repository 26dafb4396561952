use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use serde::Deserialize;

const ENV_PREFIX: &str = "DNSQUERY";

pub fn get_config<'de, T: Deserialize<'de>>(config_path: PathBuf) -> Result<T, config::ConfigError> {
    log::debug!("loading configuration from {}", config_path.display());

    let f = config::File::from(config_path).required(false);
    let env = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__");
    let config = config::Config::builder()
        .add_source(f)
        .add_source(env)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QueryConfiguration {
    pub dns: DnsConfiguration,
    pub query: QuerySettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DnsConfiguration {
    pub server_address: SocketAddr,
    timeout_secs: u64,
}

impl DnsConfiguration {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn set_timeout_secs(&mut self, timeout_secs: u64) {
        self.timeout_secs = timeout_secs;
    }
}

impl Default for DnsConfiguration {
    fn default() -> Self {
        Self {
            server_address: SocketAddr::from(([8, 8, 8, 8], 53)),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    pub domain: String,
    pub id: u16,
    pub recursion_desired: bool,
    pub qtype: String,
    pub qclass: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            domain: String::from("example.com"),
            id: 0xAAAA,
            recursion_desired: true,
            qtype: String::from("A"),
            qclass: String::from("IN"),
        }
    }
}
