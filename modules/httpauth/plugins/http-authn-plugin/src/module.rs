//! HTTP credential validator plugin registration.

use std::collections::HashMap;
use std::sync::Arc;

use httpauth_sdk::{
    ConfigError, CredentialValidatorClient, CredentialValidatorFactory, properties,
};
use tracing::info;

use crate::config::HttpAuthNPluginConfig;
use crate::domain::Service;

/// Name the host engine selects this plugin by; also the property prefix.
pub const PLUGIN_NAME: &str = "http-authenticator";

/// HTTP credential validator plugin.
///
/// Builds one [`Service`] per `create` call from the
/// `http-authenticator.*` properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpAuthNPlugin;

impl CredentialValidatorFactory for HttpAuthNPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn create(
        &self,
        properties: &HashMap<String, String>,
    ) -> Result<Arc<dyn CredentialValidatorClient>, ConfigError> {
        let cfg: HttpAuthNPluginConfig = properties::extract(properties, PLUGIN_NAME)?;
        info!(
            endpoint = %cfg.endpoint,
            connect_timeout = ?cfg.connect_timeout,
            request_timeout = ?cfg.request_timeout,
            "Initializing http_authn_plugin"
        );

        let api: Arc<dyn CredentialValidatorClient> = Arc::new(Service::from_config(&cfg)?);
        Ok(api)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn creates_from_prefixed_properties() {
        let plugin = HttpAuthNPlugin;
        assert_eq!(plugin.name(), "http-authenticator");

        let created = plugin.create(&props(&[
            ("http-authenticator.endpoint", "http://127.0.0.1:9/auth"),
            ("http-authenticator.request-timeout", "3s"),
            ("http-groupprovider.endpoint", "http://127.0.0.1:9/groups"),
        ]));
        assert!(created.is_ok());
    }

    #[test]
    fn missing_endpoint_fails_at_construction() {
        let err = HttpAuthNPlugin.create(&HashMap::new()).err().unwrap();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn bad_timeout_fails_at_construction() {
        let err = HttpAuthNPlugin
            .create(&props(&[
                ("http-authenticator.endpoint", "http://127.0.0.1:9/auth"),
                ("http-authenticator.connect-timeout", "eventually"),
            ]))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
