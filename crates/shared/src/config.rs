//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Ledger configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Ledger configuration: the functional currency and the codes of the
/// system accounts the posting engine resolves at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// The single currency all ledger balances are ultimately expressed in.
    #[serde(default = "default_functional_currency")]
    pub functional_currency: String,
    /// Chart-of-accounts code of the Accounts Receivable control account.
    #[serde(default = "default_receivable_account")]
    pub receivable_account: String,
    /// Chart-of-accounts code of the Accounts Payable control account.
    #[serde(default = "default_payable_account")]
    pub payable_account: String,
    /// Chart-of-accounts code of the exchange gain account.
    #[serde(default = "default_fx_gain_account")]
    pub fx_gain_account: String,
    /// Chart-of-accounts code of the exchange loss account.
    #[serde(default = "default_fx_loss_account")]
    pub fx_loss_account: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            functional_currency: default_functional_currency(),
            receivable_account: default_receivable_account(),
            payable_account: default_payable_account(),
            fx_gain_account: default_fx_gain_account(),
            fx_loss_account: default_fx_loss_account(),
        }
    }
}

fn default_functional_currency() -> String {
    "INR".to_string()
}

fn default_receivable_account() -> String {
    "1.2".to_string()
}

fn default_payable_account() -> String {
    "2.1".to_string()
}

fn default_fx_gain_account() -> String {
    "4.9".to_string()
}

fn default_fx_loss_account() -> String {
    "5.9".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GLINT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LedgerConfig::default();
        assert_eq!(cfg.functional_currency, "INR");
        assert_eq!(cfg.receivable_account, "1.2");
        assert_eq!(cfg.payable_account, "2.1");
        assert_eq!(cfg.fx_gain_account, "4.9");
        assert_eq!(cfg.fx_loss_account, "5.9");

        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }
}
