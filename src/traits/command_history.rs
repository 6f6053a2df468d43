use std::num::NonZeroUsize;

use super::command::Command;

pub trait CommandHistory<C: Command> {
    /// Applies `command` and records it. Discards everything that could be redone.
    ///
    /// # Errors
    ///
    /// Returns the command's error if applying fails; nothing is recorded then.
    fn execute_command(&mut self, command: C, ctx: &mut C::Context) -> Result<(), C::Error>;

    /// Inverts the most recent command. Returns `Ok(false)` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns the command's error if inverting fails; the command stays undoable.
    fn undo(&mut self, ctx: &mut C::Context) -> Result<bool, C::Error>;

    /// Re-applies the most recently undone command. Returns `Ok(false)` when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Returns the command's error if re-applying fails; the command stays redoable.
    fn redo(&mut self, ctx: &mut C::Context) -> Result<bool, C::Error>;

    /// `None` removes the bound.
    fn set_history_limit(&mut self, limit: Option<NonZeroUsize>);

    /// Executes `commands` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error; commands before it stay recorded.
    fn batch_execute(&mut self, commands: Vec<C>, ctx: &mut C::Context) -> Result<(), C::Error> {
        for command in commands {
            self.execute_command(command, ctx)?;
        }
        Ok(())
    }
}
