#![forbid(unsafe_code)]

//! Width: terminal column widths for Unicode text.
//!
//! # Role in FrankenTUI
//! `ftui-width` answers how many cells a code point, grapheme cluster, or
//! string occupies in a fixed-width terminal grid (0, 1, or 2 per code
//! point), and provides the width-aware string operations built on that
//! answer.
//!
//! # Primary responsibilities
//! - **Tables**: static, sorted code-point interval tables per width category.
//! - **WidthClassifier**: the classification policy under a [`WidthConfig`]
//!   (East Asian ambiguous-as-wide, strict emoji), with an optional packed
//!   lookup table for O(1) queries.
//! - **Text operations**: `truncate`, `truncate_left`, `wrap`, `fill_left`.
//! - **Default instance**: a process-wide classifier configured from the
//!   locale, behind free functions and the [`RuneWidthExt`] trait.
//!
//! # Example
//! ```
//! use ftui_width::{WidthClassifier, WidthConfig};
//!
//! let narrow = WidthClassifier::with_lookup_table(WidthConfig::new(false, false));
//! assert_eq!(narrow.display_width("スター☆"), 7);
//!
//! let east_asian = WidthClassifier::new(WidthConfig::new(true, false));
//! assert_eq!(east_asian.display_width("スター☆"), 8);
//! ```

pub mod classifier;
pub mod config;
pub mod global;
pub mod interval;
pub mod lookup;
pub mod tables;
mod text;

pub use classifier::WidthClassifier;
pub use config::WidthConfig;
pub use global::{
    RuneWidthExt, RuneWidthStrExt, char_width, default_classifier, display_width, fill_left,
    grapheme_width, rune_width, truncate, truncate_left, wrap,
};
pub use interval::{Interval, IntervalTable, TableError};
pub use lookup::LookupTable;
pub use tables::Category;
