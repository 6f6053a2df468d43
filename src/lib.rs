#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

pub mod command_stack;
pub mod config;
pub mod document;
pub mod edit_command;
pub mod editor;
pub mod error;
pub mod fn_command;
pub mod shared_editor;
pub mod traits;

pub mod prelude {
	pub use crate::command_stack::CommandStack;
	pub use crate::config::EditorConfig;
	pub use crate::document::{Document, ElementId, Placement, Position, Slide, TextElement, TextStyle};
	pub use crate::edit_command::{Change, EditCommand};
	pub use crate::editor::Editor;
	pub use crate::error::{ConfigError, EditError};
	pub use crate::fn_command::FnCommand;
	pub use crate::shared_editor::SharedEditor;
	pub use crate::traits::command::Command;
	pub use crate::traits::command_history::CommandHistory;
}
