#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Platform-specific code isolated from the rest of the workspace.
//!
//! Every `unsafe` block in willog lives in this crate, inside modules that
//! opt out of the crate-wide `unsafe_code` denial. Callers see safe
//! functions whose behavior on platforms without the underlying facility is a
//! documented no-op.

pub mod console;

pub use console::ConsoleError;
