/// Filesystem adapters for reading sessions and writing reports
mod file_writer;
mod session_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use session_reader::JsonSessionReader;
