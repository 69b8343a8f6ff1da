use shelfmark_shared::filter::FilterValue;
use tracing::level_filters::LevelFilter;

use super::*;

const FULL: &str = r#"
log_level = "DEBUG"

[web]
site_addr = "127.0.0.1:3000"

[backend]
addr = "http://127.0.0.1:8000/catalog"

[catalog]
genres = ["Fantasy", "Poetry"]
default_sort = "latest"
"#;

#[test]
fn full_config() {
    let config = Config::try_from_toml(FULL).expect("full config is valid");
    assert_eq!(config.log_level, LevelFilter::DEBUG);
    assert_eq!(config.backend_addr.as_str(), "http://127.0.0.1:8000/catalog/");
    assert_eq!(
        config.leptos_options.site_addr,
        "127.0.0.1:3000".parse::<std::net::SocketAddr>().expect("valid addr")
    );

    let page = config.page_config();
    assert_eq!(page.genres, vec!["Fantasy".to_string(), "Poetry".to_string()]);
    assert_eq!(
        page.default_filter.get("sort"),
        Some(&FilterValue::Single("latest".to_string()))
    );
}

#[test]
fn defaults() {
    let config = Config::try_from_toml(
        r#"
        [web]
        site_addr = "0.0.0.0:8080"
        [backend]
        addr = "https://catalog.example.org"
        "#,
    )
    .expect("minimal config is valid");
    assert_eq!(config.log_level, LevelFilter::INFO);
    assert_eq!(config.catalog, CatalogConfig::default());
    assert_eq!(config.catalog.default_sort, "popularity");
}

#[test]
fn rejects_bad_values() {
    let bad_addr = FULL.replace("127.0.0.1:3000", "localhost");
    assert!(matches!(
        Config::try_from_toml(&bad_addr),
        Err(ConfigError::SiteAddrParse(_))
    ));

    let bad_backend = FULL.replace("http://127.0.0.1:8000/catalog", "mailto:admin@example.org");
    assert!(matches!(
        Config::try_from_toml(&bad_backend),
        Err(ConfigError::BackendAddrNotBase(_))
    ));

    let bad_level = FULL.replace("DEBUG", "LOUD");
    assert!(matches!(
        Config::try_from_toml(&bad_level),
        Err(ConfigError::LogLevel(_))
    ));

    assert!(matches!(
        Config::try_from_toml("[web]\nsite_addr = 1"),
        Err(ConfigError::TomlParse(_))
    ));
}
