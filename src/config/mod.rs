use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "drivehire.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct Config {
    pub geocoding: Geocoding,
    pub display: Display,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.geocoding.apply_api_keys(
            env::var(ENV_NAME_GOOGLE_MAPS_API_KEY).ok(),
            env::var(ENV_NAME_OPENCAGE_API_KEY).ok(),
        );
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub request_timeout: Duration,
}

impl Geocoding {
    /// API keys from the environment take precedence over the
    /// configuration file and select a gateway if none is configured.
    fn apply_api_keys(&mut self, google_maps: Option<String>, opencage: Option<String>) {
        let google_maps = google_maps.filter(|key| !key.is_empty());
        let opencage = opencage.filter(|key| !key.is_empty());
        match &mut self.gateway {
            Some(GeocodingGateway::GoogleMaps { api_key, .. }) => {
                if let Some(key) = google_maps {
                    *api_key = key;
                }
            }
            Some(GeocodingGateway::OpenCage { api_key }) => {
                if let Some(key) = opencage {
                    *api_key = key;
                }
            }
            None => {
                if let Some(api_key) = google_maps {
                    log::info!("Found {ENV_NAME_GOOGLE_MAPS_API_KEY} => use Google Maps gateway");
                    self.gateway = Some(GeocodingGateway::GoogleMaps {
                        api_key,
                        api_base_url: None,
                    });
                } else if let Some(api_key) = opencage {
                    log::info!("Found {ENV_NAME_OPENCAGE_API_KEY} => use OpenCage gateway");
                    self.gateway = Some(GeocodingGateway::OpenCage { api_key });
                }
            }
        }
    }
}

#[derive(Clone)]
pub enum GeocodingGateway {
    GoogleMaps {
        api_key: String,
        api_base_url: Option<String>,
    },
    OpenCage {
        api_key: String,
    },
}

pub struct Display {
    pub append_city: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            display,
            gateway,
        } = from;

        let raw::Geocoding {
            gateway: gw_name,
            request_timeout,
        } = geocoding.unwrap_or_default();

        let geo_gateway = match gw_name {
            Some(gw_name) => {
                let toml_name = gw_name.name();
                let gateway = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;
                let gw = match gw_name {
                    raw::GeocodingGateway::GoogleMaps => {
                        let raw::GoogleMaps {
                            api_key,
                            api_base_url,
                        } = gateway.google_maps.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        GeocodingGateway::GoogleMaps {
                            api_key,
                            api_base_url,
                        }
                    }
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key } = gateway.opencage.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        GeocodingGateway::OpenCage { api_key }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            request_timeout: request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        };

        let raw::Display { append_city } = display.unwrap_or_default();
        let display = Display { append_city };

        Ok(Self { geocoding, display })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_config_disables_geocoding() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert!(cfg.geocoding.gateway.is_none());
        assert_eq!(Duration::from_secs(15), cfg.geocoding.request_timeout);
        assert!(cfg.display.append_city);
    }

    #[test]
    fn select_google_maps_gateway() {
        let cfg = parse(
            r#"
            [geocoding]
            gateway = "google-maps"
            request-timeout = "3s"
            [gateway.google-maps]
            api-key = "secret"
            "#,
        )
        .unwrap();
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::GoogleMaps { ref api_key, api_base_url: None }) if api_key == "secret"
        ));
        assert_eq!(Duration::from_secs(3), cfg.geocoding.request_timeout);
    }

    #[test]
    fn missing_gateway_configuration() {
        let err = parse(
            r#"
            [geocoding]
            gateway = "opencage"
            [gateway.google-maps]
            api-key = "secret"
            "#,
        )
        .err()
        .unwrap();
        assert_eq!("Missing 'opencage' gateway configuration", err.to_string());

        assert!(parse("[geocoding]\ngateway = \"opencage\"").is_err());
    }

    #[test]
    fn api_keys_from_env_select_a_gateway() {
        let mut geocoding = Geocoding {
            gateway: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        };
        geocoding.apply_api_keys(Some(String::new()), Some("oc".into()));
        assert!(matches!(
            geocoding.gateway,
            Some(GeocodingGateway::OpenCage { ref api_key }) if api_key == "oc"
        ));

        let mut geocoding = Geocoding {
            gateway: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        };
        geocoding.apply_api_keys(Some("gm".into()), Some("oc".into()));
        assert!(matches!(
            geocoding.gateway,
            Some(GeocodingGateway::GoogleMaps { ref api_key, .. }) if api_key == "gm"
        ));
    }

    #[test]
    fn api_keys_from_env_override_configured_keys() {
        let mut geocoding = Geocoding {
            gateway: Some(GeocodingGateway::OpenCage {
                api_key: "file".into(),
            }),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        };
        geocoding.apply_api_keys(Some("gm".into()), Some("env".into()));
        assert!(matches!(
            geocoding.gateway,
            Some(GeocodingGateway::OpenCage { ref api_key }) if api_key == "env"
        ));
    }
}
