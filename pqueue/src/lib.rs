pub mod error;
pub mod heap;
pub mod source;

pub use error::EmptyContainer;
pub use heap::{Order, PriorityQueue};
