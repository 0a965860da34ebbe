//! Server Module
//!
//! This module contains the code that initializes and runs the Axum HTTP
//! server.
//!
//! # Architecture
//!
//! - **`state`** - Application state and `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - App creation and the serve loop
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (PORT, .env)
//! └── init.rs         - App creation and serving
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use smsrelay::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config);
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::load_config;
pub use init::{create_app, run};
pub use state::AppState;
