//! On-disk text format for layout documents
//!
//! A layout document is persisted as a hybrid pretty/compact text form: the
//! root object and each component are human-readable multi-line objects with
//! 2-space indentation, while `position` and `style` collapse onto a single
//! line each.
//!
//! ```text
//! {
//!   "templateName": "Default Morning",
//!   "components": [
//!     {
//!       "api": "clock",
//!       "enabled": true,
//!       "position": { "right": "20px", "top": "20px" },
//!       "style": { "fontSize": "4rem", "fontWeight": "bold" },
//!       "color": "cyan"
//!     }
//!   ]
//! }
//! ```
//!
//! Format rules:
//! - coordinate map values that parse as a JSON number are emitted unquoted
//!   (`"maxWidth": 400`); the field stays a string in the model and the
//!   exact spelling survives a round trip (`4.50` does not become `4.5`)
//! - strings escape exactly `\\`, `\"`, `\n`, `\r`, `\t` and nothing else
//! - the writer's output is a strict-JSON subset; the reader accepts any
//!   conformant JSON rendering of a document, not just the writer's layout
//! - decode failures are a [`FormatError`], never a silently substituted
//!   default

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod reader;
mod writer;

pub use error::FormatError;
pub use reader::decode;
pub use writer::encode;
