//! CLI library components for the Stores Issue Desk.

pub mod catalog_io;
pub mod logging;
pub mod script;
