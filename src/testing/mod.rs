mod writers;

pub use writers::{FailingWriter, RecordingWriter};
