//! `ketbook-display` — rich notebook output for ketbook.
//!
//! Turns binary assets into display bundles: maps from MIME type to an
//! encoded payload that a notebook host merges into its rich output.
//! Currently the only asset type is an inline PNG image, encoded as
//! standard padded base64.
//!
//! # Quick start
//!
//! ```rust
//! use ketbook_display::{IMAGE_PNG, ImageAsset, to_display_bundle};
//!
//! // PNG magic prefix
//! let asset = ImageAsset::from_bytes([0x89u8, 0x50, 0x4E, 0x47]);
//! let bundle = to_display_bundle(&asset);
//! assert_eq!(bundle.get(IMAGE_PNG), Some("iVBORw=="));
//! assert_eq!(bundle.to_json_string(false), r#"{"image/png":"iVBORw=="}"#);
//! ```
//!
//! Loading from disk goes through [`ImageAsset::open`], which reads the whole
//! file once and fails with [`DisplayError::Io`] if it cannot.

pub mod bundle;
pub mod error;
pub mod image;

pub use bundle::{DisplayBundle, IMAGE_PNG, MimeBundleRepr};
pub use error::{DisplayError, DisplayResult};
pub use image::{ImageAsset, to_display_bundle};
