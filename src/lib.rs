//! savey - scraper for the Savey.co personal finance site
//!
//! This library logs in to Savey.co with an ordinary browser-style session
//! and reads accounts, categories and transactions back out of the site's
//! HTML pages. The site has no API; every fact is recovered from markup and
//! every navigation is checked by where its redirects end.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `parse`: Primitive text parsers (identifiers, dates, whitespace)
//! - `session`: Cookie-backed session client and the site's navigation protocol
//! - `extract`: Page extractors for accounts, categories and transactions
//! - `services`: Fetch-then-extract orchestration
//! - `models`: Core data models
//! - `export`: JSON, YAML and CSV writers for a scraped snapshot
//! - `display`: Terminal table formatting
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use savey::config::{SaveyPaths, Settings};
//! use savey::services::AccountService;
//! use savey::session::Client;
//!
//! let settings = Settings::load_or_create(&SaveyPaths::new()?)?;
//! let mut client = Client::new(&settings)?;
//! client.login("user@example.com", "secret")?;
//! let accounts = AccountService::new(&client).list()?;
//! client.logout()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod parse;
pub mod services;
pub mod session;

pub use error::{SaveyError, SaveyResult};
