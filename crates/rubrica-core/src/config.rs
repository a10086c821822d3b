//! Configuration types for the rubrica directory
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main rubrica configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RubricaConfig {
    /// Directory behaviour
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl RubricaConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.directory.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

/// Directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// First name stored when a contact is created without one
    #[serde(default = "default_first_name")]
    pub default_first_name: String,
}

impl DirectoryConfig {
    /// Create a directory configuration with the given default first name
    pub fn new(default_first_name: impl Into<String>) -> Self {
        Self {
            default_first_name: default_first_name.into(),
        }
    }

    /// Validate the directory configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.default_first_name.trim().is_empty() {
            return Err(crate::Error::config("Default first name cannot be empty"));
        }
        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(default_first_name())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Time allowed for in-flight requests to finish after a shutdown signal
    /// (in seconds)
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Validate the server configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.socket_addr()?;

        if !(1..=300).contains(&self.shutdown_timeout_secs) {
            return Err(crate::Error::config(format!(
                "Shutdown timeout must be between 1 and 300 seconds, got {}",
                self.shutdown_timeout_secs
            )));
        }

        Ok(())
    }

    /// Parse the bind address
    pub fn socket_addr(&self) -> Result<SocketAddr, crate::Error> {
        self.bind_addr.parse().map_err(|e| {
            crate::Error::config(format!("Invalid bind address '{}': {}", self.bind_addr, e))
        })
    }

    /// Set the bind address
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }

    /// Set the shutdown timeout
    pub fn with_shutdown_timeout_secs(mut self, secs: u64) -> Self {
        self.shutdown_timeout_secs = secs;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

fn default_first_name() -> String {
    "Sconosciuto".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout_secs() -> u64 {
    30
}
