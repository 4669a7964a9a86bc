//! # cmdprefix - Bot Prefix and Command Detection
//!
//! cmdprefix finds which entries of a small dictionary relate to a chat
//! message: which known bot prefixes the message starts with, and which
//! known command names end one of its words. It is built both as a Rust
//! library and as a `cdylib` that host languages load over a C ABI.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`matching`] - Sorting, binary search, prefix and suffix detection
//! - [`result`] - Owned, append-only match results
//! - [`ffi`] - C ABI (`find_commands`, `multi_find_prefix`, `find_prefix`, `free_result`)
//! - [`dictionary`] - Loading dictionary files
//! - [`utils`] - Phrase normalization and configuration
//! - [`output`] - Result formatting for the command-line tool
//!
//! ## Quick Start
//!
//! ```
//! use cmdprefix::matching::{find_commands, find_first_prefix};
//! use cmdprefix::utils::{normalize_phrase, PhraseOptions};
//!
//! let prefixes = ["!", "pls ", "?"];
//! assert_eq!(find_first_prefix(&prefixes, "pls help").unwrap(), "pls ");
//!
//! let commands = ["help", "ping"];
//! let phrase = normalize_phrase("!!PING everyone\nsecond line", &PhraseOptions::default());
//! assert_eq!(&*find_commands(&commands, &phrase).unwrap(), &["ping"]);
//! ```
//!
//! ## Cost Model
//!
//! Each call sorts its own copy of the dictionary (insertion sort, O(n²))
//! and then runs O(m log n) searches per word of length m. Dictionaries are
//! command lists, so no index is kept between calls.

pub mod dictionary;
pub mod error;
pub mod ffi;
pub mod matching;
#[cfg(feature = "cli")]
pub mod output;
pub mod result;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::{MatchError, MatchResult};
pub use result::ResultCollection;
