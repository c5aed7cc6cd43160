pub mod file_appender;
mod process_environment;
mod static_environment;

pub use file_appender::append_to_file;
pub use process_environment::ProcessEnvironment;
pub use static_environment::StaticEnvironment;
