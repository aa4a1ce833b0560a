//! Domain types for toolshed
//!
//! - Reservation: a single booking (who, until when)
//! - Tool: one catalog entry plus its reservations
//! - ToolLibrary: the ordered catalog of tools
//!
//! Ownership is strictly top-down: the library owns its tools and each tool
//! owns its reservations.

pub mod library;
pub mod reservation;
pub mod tool;

pub use library::ToolLibrary;
pub use reservation::Reservation;
pub use tool::Tool;
