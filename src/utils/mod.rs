//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file management
//! - [`tokenizer`] - Whitespace tokens and phrase normalization
//!
//! ## Key Functions
//!
//! ```
//! use cmdprefix::utils::{normalize_phrase, split_tokens, PhraseOptions};
//!
//! let phrase = normalize_phrase("  !PING   me\nignored", &PhraseOptions::default());
//! assert_eq!(phrase, "!ping me");
//! assert_eq!(split_tokens(&phrase).count(), 2);
//! ```

pub mod app_data;
pub mod tokenizer;

pub use app_data::*;
pub use tokenizer::*;
