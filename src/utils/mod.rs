pub mod helper;

mod cache;
pub use cache::Cached;
