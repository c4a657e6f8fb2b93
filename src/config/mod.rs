//! Static application configuration.
//!
//! Destinations, menu entries, routes and drawer animation settings are read
//! once at startup from a TOML file and never mutated afterwards.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AuthConfig, Config, Destination, Glyph, MenuEntry, RouteConfig, ShellConfig};
