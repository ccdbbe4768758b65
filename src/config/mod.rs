//! # Configuration Module
//!
//! Application configuration loading. Sources, lowest priority first:
//! - built-in defaults
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - Environment variables (prefixed with APP__), plus `SERVER_HOST`,
//!   `SERVER_PORT`, `DATABASE_URL` and `DATABASE_BACKEND`
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biztime::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
