pub mod apply;
mod command_result;
pub mod init;
pub mod merge;

pub use command_result::*;
