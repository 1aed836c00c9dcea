use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    /// JSON array of postings; the built-in samples are served when unset.
    pub catalog_path: Option<String>,
    pub featured_limit: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "towngig")?
            .set_default("listen_port", "3000")?
            .set_default("featured_limit", 3)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.catalog_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            s.catalog_path = None;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
