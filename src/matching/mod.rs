//! Dictionary matching module
//!
//! Finds which entries of a small dictionary (bot prefixes, command names)
//! relate to an input string. Every call sorts a fresh copy of the
//! dictionary; there is no index kept between calls.
//!
//! ## Architecture
//!
//! - `types`: Sorted key image and permutation types
//! - `sorter`: Stable index-preserving sort (forward or reversed keys)
//! - `search`: Exact-match binary search
//! - `prefix`: Progressive truncation of content (`find_first_prefix`, `find_all_prefixes`)
//! - `suffix`: Suffix detection over phrase tokens (`find_commands`)
//!
//! ## Example
//!
//! ```
//! use cmdprefix::matching::{find_all_prefixes, find_commands, find_first_prefix};
//!
//! assert_eq!(find_first_prefix(&["car", "cat", "dog"], "category").unwrap(), "cat");
//! assert_eq!(&*find_all_prefixes(&["ca", "cat"], "cats").unwrap(), &["cat", "ca"]);
//! assert_eq!(&*find_commands(&["run", "build"], "prun build").unwrap(), &["run", "build"]);
//! ```

pub mod prefix;
pub mod search;
pub mod sorter;
pub mod suffix;
pub mod types;

// Re-exports for convenience
pub use prefix::{find_all_prefixes, find_first_prefix};
pub use search::search;
pub use sorter::{insertion_sort, sort_dictionary};
pub use suffix::find_commands;
pub use types::{KeyOrder, OriginalIndex, SortedDictionary, SortedEntry, SortedPosition};
