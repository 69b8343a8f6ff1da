//! Shared Types and functions accross the app

use leptos::prelude::*;
use leptos_router::params::Params;
use shelfmark_shared::PageConfig;

#[derive(Params, Clone, PartialEq)]
pub struct IsbnParams {
    pub isbn: Option<String>,
}

#[derive(Params, Clone, PartialEq)]
pub struct GenreParams {
    pub name: Option<String>,
}

/// Genres and search defaults for the current deployment
// `/api` belongs to the backend
#[server(prefix = "/srv")]
pub async fn get_page_config() -> Result<PageConfig, ServerFnError> {
    let config = use_context::<std::sync::Arc<shelfmark_server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    Ok(config.page_config())
}

pub type PageConfigResource = Resource<Result<PageConfig, ServerFnError>>;

/// The page config, loaded once by the App
pub fn use_page_config() -> PageConfigResource {
    use_context::<PageConfigResource>().unwrap_or_else(|| Resource::new(|| (), |_| get_page_config()))
}
