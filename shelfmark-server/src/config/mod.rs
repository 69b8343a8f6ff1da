//! Parse Config from config file

use std::{fs::read_to_string, path::Path, str::FromStr};

use leptos::config::LeptosOptions;
use serde::Deserialize;
use shelfmark_shared::{
    filter::{SearchFilter, GENRES_KEY, SORT_KEY},
    PageConfig,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::LevelParseError;

/// Where the config file is read from
pub const CONFIG_PATH: &str = "/etc/shelfmark/config.toml";

#[derive(Debug)]
pub enum ConfigError {
    TomlParse(toml::de::Error),
    ConfigFileRead(std::io::Error),
    LogLevel(LevelParseError),
    SiteAddrParse(std::net::AddrParseError),
    /// The backend address must be a http(s) base url, not e.g. `mailto:`
    BackendAddrNotBase(String),
    HttpClient(reqwest::Error),
}
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::TomlParse(e) => {
                write!(f, "Unable to parse config file as toml: {e}")
            }
            Self::ConfigFileRead(e) => {
                write!(f, "Unable to read config file: {e}")
            }
            Self::LogLevel(e) => {
                write!(f, "Unable to parse log_level: {e}")
            }
            Self::SiteAddrParse(e) => {
                write!(f, "Unable to interpret web.site_addr as socket address: {e}")
            }
            Self::BackendAddrNotBase(addr) => {
                write!(f, "backend.addr must be a http or https base url, got: {addr}")
            }
            Self::HttpClient(e) => {
                write!(f, "Unable to create the http client for the backend: {e}")
            }
        }
    }
}
impl From<LevelParseError> for ConfigError {
    fn from(value: LevelParseError) -> Self {
        Self::LogLevel(value)
    }
}
impl std::error::Error for ConfigError {}

#[derive(Deserialize)]
struct WebConfigData {
    /// The address to host the website on (e.g. 127.0.0.1:8080)
    site_addr: String,
}

#[derive(Deserialize)]
struct BackendConfigData {
    /// Base url of the catalog backend (e.g. http://127.0.0.1:8000)
    addr: String,
}

/// What the pages need to know about the catalog
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// All genres, in the order they are shown in the navbar and the genre filter
    #[serde(default)]
    pub genres: Vec<String>,
    /// How book searches are sorted unless the user picks something else
    #[serde(default = "default_sort")]
    pub default_sort: String,
}
fn default_sort() -> String {
    "popularity".to_string()
}
impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            default_sort: default_sort(),
        }
    }
}

/// The config data as it is present in (a well-formed) toml config file
#[derive(Deserialize)]
struct ConfigData {
    web: WebConfigData,
    backend: BackendConfigData,
    log_level: Option<String>,
    #[serde(default)]
    catalog: CatalogConfig,
}

/// The main config object that will be available across the Serverside application
#[derive(Debug)]
pub struct Config {
    pub leptos_options: LeptosOptions,
    pub log_level: LevelFilter,
    /// Base url of the catalog backend, always ending in a /
    pub backend_addr: reqwest::Url,
    /// client used for all requests to the backend
    pub http_client: reqwest::Client,
    pub catalog: CatalogConfig,
}
impl Config {
    fn try_from_config_data(value: ConfigData) -> Result<Self, ConfigError> {
        let addr = std::net::SocketAddr::from_str(&value.web.site_addr)
            .map_err(ConfigError::SiteAddrParse)?;

        let leptos_options = LeptosOptions::builder()
            .output_name("shelfmark")
            .site_root("target/site")
            .site_pkg_dir("pkg")
            .site_addr(addr)
            .build();
        let log_level = tracing_subscriber::filter::LevelFilter::from_str(
            &value.log_level.unwrap_or("INFO".to_string()),
        )?;

        // a base url without trailing slash would lose its last segment when joining paths
        let mut raw_backend = value.backend.addr.trim().to_string();
        if !raw_backend.ends_with('/') {
            raw_backend.push('/');
        }
        let backend_addr = reqwest::Url::parse(&raw_backend)
            .map_err(|_| ConfigError::BackendAddrNotBase(value.backend.addr.clone()))?;
        if !matches!(backend_addr.scheme(), "http" | "https") || backend_addr.cannot_be_a_base() {
            return Err(ConfigError::BackendAddrNotBase(value.backend.addr));
        }

        let http_client = reqwest::Client::builder()
            // redirects are answers for the browser, not for us
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            leptos_options,
            log_level,
            backend_addr,
            http_client,
            catalog: value.catalog,
        })
    }

    /// Parse the config from the content of a config file
    pub fn try_from_toml(content: &str) -> Result<Self, ConfigError> {
        let config_data: ConfigData = toml::from_str(content).map_err(ConfigError::TomlParse)?;
        Self::try_from_config_data(config_data)
    }

    pub fn try_create_from(path: &Path) -> Result<Self, ConfigError> {
        let content = read_to_string(path).map_err(ConfigError::ConfigFileRead)?;
        Self::try_from_toml(&content)
    }

    pub fn try_create() -> Result<Self, ConfigError> {
        Self::try_create_from(Path::new(CONFIG_PATH))
    }

    /// The configuration every page gets on the client
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            genres: self.catalog.genres.clone(),
            default_filter: SearchFilter::new()
                .with_single(SORT_KEY, &self.catalog.default_sort)
                .with_multi(GENRES_KEY, Vec::<String>::new()),
        }
    }
}

#[cfg(test)]
mod test;
