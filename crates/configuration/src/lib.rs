use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Cards, Config, Dashboard, Display};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, and returns it. A missing file is not an error: the dashboard
/// must run with zero setup, so every setting has a default.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("VANTAGE"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    if !(config.cards.metrics || config.cards.monthly || config.cards.regions || config.cards.trends)
    {
        return Err(ConfigError::ValidationError(
            "at least one dashboard card must be enabled".to_string(),
        ));
    }

    Ok(config)
}
