pub mod build;
pub mod chunk;
pub mod error;
pub mod place;
pub mod types;

pub use build::build_timeline;
pub use chunk::chunk_segment;
pub use error::Error;
pub use place::place_segments;
pub use types::{CadencePolicy, CaptionChunk, Segment, SegmentRole, TimedSegment};
