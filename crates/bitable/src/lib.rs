//! Lark Bitable API client.
//!
//! This crate talks to the Lark Suite (Feishu) Bitable open API:
//! it exchanges an app id/secret pair for a tenant access token and
//! searches table records with a structured filter, following the
//! pagination cursor until the server reports no more pages.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bitable::{BitableClient, BitableConfig, SearchFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitableClient::new(BitableConfig::from_env()?)?;
//!     let filter = SearchFilter::field_contains("Phone", "0912345678");
//!     let records = client.search("tblXXXX", Some(&filter)).await?;
//!     println!("{} matching records", records.len());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod filter;
mod record;
mod token;

pub use client::BitableClient;
pub use config::BitableConfig;
pub use error::BitableError;
pub use filter::{Condition, Conjunction, Operator, SearchFilter};
pub use record::{FieldValue, RawRecord, Segment};
