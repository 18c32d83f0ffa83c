//! actkit-core: client side of the CI runner command protocol
//!
//! This crate provides:
//! - Workflow command encoding (`::name key=value::message`) and escaping
//! - File commands: key-value blocks appended to runner channel files
//! - A job summary buffer that renders HTML fragments
//! - Input, state and run-context accessors over an injectable environment

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod delimiter;
pub mod env;
pub mod escape;
pub mod value;

pub mod channel;
pub mod command;
pub mod context;
pub mod file_command;
pub mod input;
pub mod path;
pub mod summary;
pub mod toolkit;

// Re-exports
pub use channel::{ChannelConfig, FileChannel, DEFAULT_PREFIX};
pub use command::{
    issue_command, AnnotationProperties, Command, CommandError, LogCommand, PropertyKey,
};
pub use context::{Context, ContextError, Issue, Repo};
pub use delimiter::{DelimiterSource, SequentialDelimiters, UuidDelimiters};
pub use env::{Environment, FakeEnvironment, SystemEnvironment};
pub use escape::{escape_data, escape_property};
pub use file_command::{issue_file_command, key_value_block, FileCommandError, FileCommandWriter};
pub use input::{InputError, InputOptions, Inputs};
pub use path::{to_platform_path, to_posix_path, to_win32_path};
pub use summary::{ImageOptions, Summary, SummaryError, TableCell};
pub use toolkit::{Toolkit, ToolkitError};
pub use value::{decode_command_value, to_command_value, CommandValue};
