pub mod dto;
pub mod error;
pub mod pipeline;

pub use dto::{Resolution, TalkRequest, TalkResponse};
pub use error::PipelineError;
pub use pipeline::{PollPolicy, TalkPipeline};
