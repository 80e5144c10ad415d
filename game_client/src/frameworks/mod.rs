// Frameworks layer: process bootstrap and configuration.

pub mod config;
pub mod runtime;
