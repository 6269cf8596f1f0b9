//! TLS client configuration.

use std::sync::Arc;

use rustls::crypto::ring::default_provider;
use rustls::{ClientConfig, RootCertStore};

/// Builds a rustls client configuration trusting the Mozilla root set from
/// `webpki-roots`.
///
/// The ring provider is passed explicitly so the result does not depend on a
/// process-wide default having been installed.
///
/// # Errors
///
/// Returns a `rustls::Error` if the provider rejects the default protocol versions.
pub fn init_tls_config() -> Result<Arc<ClientConfig>, rustls::Error> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(default_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_config_builds() {
        let config = init_tls_config().expect("ring supports the default versions");
        assert!(config.alpn_protocols.is_empty());
    }
}
