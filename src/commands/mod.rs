pub mod events;
pub mod import;
