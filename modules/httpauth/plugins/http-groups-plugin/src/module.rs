//! HTTP group resolver plugin registration.

use std::collections::HashMap;
use std::sync::Arc;

use httpauth_sdk::{ConfigError, GroupResolverClient, GroupResolverFactory, properties};
use tracing::info;

use crate::config::HttpGroupsPluginConfig;
use crate::domain::Service;

/// Name the host engine selects this plugin by; also the property prefix,
/// so the endpoint is read from `http-groupprovider.endpoint`.
pub const PLUGIN_NAME: &str = "http-groupprovider";

/// HTTP group resolver plugin.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpGroupsPlugin;

impl GroupResolverFactory for HttpGroupsPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn create(
        &self,
        properties: &HashMap<String, String>,
    ) -> Result<Arc<dyn GroupResolverClient>, ConfigError> {
        let cfg: HttpGroupsPluginConfig = properties::extract(properties, PLUGIN_NAME)?;
        info!(
            endpoint = %cfg.endpoint,
            connect_timeout = ?cfg.connect_timeout,
            request_timeout = ?cfg.request_timeout,
            "Initializing http_groups_plugin"
        );

        let api: Arc<dyn GroupResolverClient> = Arc::new(Service::from_config(&cfg)?);
        Ok(api)
    }
}
