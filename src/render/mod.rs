//! Post rendering and the timeline.

pub mod carousel;
pub mod post_model;
pub mod timeline;

pub use carousel::{carousel_index_for, indicators};
pub use post_model::PostRenderModel;
pub use timeline::Timeline;
