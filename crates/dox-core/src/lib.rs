//! # dox-core
//!
//! Core types shared across the dox crates.
//!
//! - Declaration model produced by the recognizer (`Declaration`,
//!   `DeclarationKind`, `ParameterPair`, `TemplateParams`)
//! - Documentation tag vocabulary (`TagSigil`, `TagKind`)
//! - The host-editor buffer interface (`TextBuffer`) with an in-memory
//!   implementation over a string (`SourceText`)

pub mod buffer;
pub mod declaration;
pub mod enums;

pub use buffer::{BufferLine, SourceText, TextBuffer};
pub use declaration::{Declaration, ParameterPair, TemplateParams};
pub use enums::{DeclarationKind, TagKind, TagSigil};
