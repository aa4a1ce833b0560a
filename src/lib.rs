//! toolshed - a tool reservation library catalog
//!
//! Models a lending library of tools: each tool has a total quantity and a
//! list of reservations, and the library renders text summaries of the
//! catalog and of per-tool availability.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod format;

pub use domain::{Reservation, Tool, ToolLibrary};
pub use error::{Result, ToolshedError};
