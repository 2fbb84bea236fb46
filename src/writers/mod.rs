//! Writer implementations

pub mod console;
pub mod debug;
pub mod file;
pub mod path_template;
pub mod socket;
mod stream;

pub use console::ConsoleWriter;
pub use debug::DebugWriter;
pub use file::{FileWriter, DEFAULT_PATH_FORMAT};
pub use path_template::PathTemplate;
pub use socket::SocketWriter;

pub use crate::core::{Writer, WriterGuard};
