//! CLI command implementations

pub mod config;
pub mod launchd;
pub mod list;
pub mod status;
pub mod tag;

pub use config::execute as config;
pub use launchd::execute as launchd;
pub use list::execute as list;
pub use status::execute as status;
pub use tag::execute as tag;
