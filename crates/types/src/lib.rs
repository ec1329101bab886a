pub mod ids;

pub use ids::{AnchorId, PageRef, SubIndexRef};
