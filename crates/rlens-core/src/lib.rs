//! # rlens-core - Core Domain Types
//!
//! Foundation crate for Reddit Lens. Provides panel identities, the panel
//! descriptor registry, typed result records, schema normalizers, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** and performs no I/O apart
//! from creating the log directory.
//!
//! ## Public API
//!
//! ### Panels (`panel`, `descriptor`)
//! - [`PanelId`] - The ten analysis panels in tab order
//! - [`DisplayMode`] - Light/Dark, the only value shared with rendering
//! - [`PanelDescriptor`] - Label, endpoint, inputs and normalizer of a panel
//!
//! ### Results (`results`, `normalize`)
//! - [`PanelResult`] - Typed reply of any panel
//! - [`ValidationError`] - Required reply field missing or mistyped
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use rlens_core::prelude::*;
//! ```

pub mod descriptor;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod panel;
pub mod results;

/// Prelude for common imports used throughout all Reddit Lens crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use descriptor::{InputField, Normalizer, PanelDescriptor, DESCRIPTORS};
pub use error::{Error, Result, ResultExt};
pub use normalize::ValidationError;
pub use panel::{DisplayMode, PanelId};
pub use results::{PanelResult, TextBlock};
