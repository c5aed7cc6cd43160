pub mod emit;
pub mod output;
pub mod run_url;
pub mod summary;
