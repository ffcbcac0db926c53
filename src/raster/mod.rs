pub mod buffer;
pub mod store;
