pub mod client;
pub mod config;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod server;
pub mod sms;

/// Install the rustls ring provider (required for rustls 0.23+).
/// Safe to call more than once.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
