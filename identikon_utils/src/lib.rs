pub mod digest;
pub mod files;
pub mod identicons;
