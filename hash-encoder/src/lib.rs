//! Text and file hashing for the devtools collection.
//!
//! Supports MD5, SHA-1, SHA-256, SHA-384, SHA-512 and the HMAC variant of
//! each. MD5 and HMAC-MD5 come from [`devtools_md5`]; the SHA family is
//! provided by the RustCrypto crates.
//!
//! ```rust
//! use hash_encoder::{Algorithm, Request, Source};
//!
//! let request = Request::new(Algorithm::HmacMd5, Source::Text("The quick brown fox jumps over the lazy dog".into()))
//!     .with_key("key");
//! assert_eq!(request.execute().unwrap(), "80070713463e7749b90c2dc24911e275");
//! ```

#![warn(rust_2018_idioms)]

mod algorithm;
pub mod engine;
mod error;
mod request;

pub use crate::{
    algorithm::Algorithm,
    engine::{hash, hmac_md5_hex, md5_hex},
    error::{Error, Result},
    request::{Limits, Request, Source, DEFAULT_MAX_FILE_SIZE},
};
