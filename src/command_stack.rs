use std::{collections::VecDeque, num::NonZeroUsize};

use crate::traits::{command::Command, command_history::CommandHistory};

/// Linear two-stack undo/redo log.
///
/// Both sequences keep their most recent entry at the back. A command lives in
/// at most one of them: `history` while applied, `redo` while reverted.
#[derive(Debug)]
pub struct CommandStack<C: Command> {
    history: VecDeque<C>,
    redo: VecDeque<C>,
    history_limit: Option<NonZeroUsize>,
}

impl<C: Command> Default for CommandStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> CommandStack<C> {
    /// An unbounded stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: VecDeque::new(),
            redo: VecDeque::new(),
            history_limit: None,
        }
    }

    #[must_use]
    pub fn with_limit(history_limit: Option<NonZeroUsize>) -> Self {
        let capacity = history_limit.map_or(0, NonZeroUsize::get);
        Self {
            history: VecDeque::with_capacity(capacity),
            redo: VecDeque::with_capacity(capacity),
            history_limit,
        }
    }

    #[must_use]
    pub fn history_limit(&self) -> Option<NonZeroUsize> {
        self.history_limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// True when neither history holds a command.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.redo.is_empty()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Applied commands, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &C> + ExactSizeIterator {
        self.history.iter()
    }

    /// Reverted commands, oldest undo first. The last one is what `redo` replays next.
    pub fn redo_history(&self) -> impl DoubleEndedIterator<Item = &C> + ExactSizeIterator {
        self.redo.iter()
    }

    /// The command the next `undo` would invert.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&C> {
        self.history.back()
    }

    /// The command the next `redo` would re-apply.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&C> {
        self.redo.back()
    }

    pub fn clear(&mut self) {
        log::trace!(
            "clearing {} applied and {} reverted commands",
            self.history.len(),
            self.redo.len()
        );
        self.history.clear();
        self.redo.clear();
    }

    fn push_history(&mut self, command: C) {
        if let Some(limit) = self.history_limit {
            while self.history.len() >= limit.get() {
                if let Some(dropped) = self.history.pop_front() {
                    log::trace!("history full, dropping \"{}\"", dropped.description());
                }
            }
        }

        log::trace!("push history: \"{}\"", command.description());
        self.history.push_back(command);
    }

    fn push_redo(&mut self, command: C) {
        if let Some(limit) = self.history_limit {
            while self.redo.len() >= limit.get() {
                if let Some(dropped) = self.redo.pop_front() {
                    log::trace!("redo full, dropping \"{}\"", dropped.description());
                }
            }
        }

        log::trace!("push redo: \"{}\"", command.description());
        self.redo.push_back(command);
    }

    fn trim(&mut self) {
        let Some(limit) = self.history_limit.map(NonZeroUsize::get) else {
            return;
        };

        let history_excess = self.history.len().saturating_sub(limit);
        let redo_excess = self.redo.len().saturating_sub(limit);
        if history_excess + redo_excess > 0 {
            log::trace!(
                "trimming {history_excess} applied and {redo_excess} reverted commands to limit {limit}"
            );
        }

        self.history.drain(..history_excess);
        self.redo.drain(..redo_excess);
    }
}

impl<C: Command> CommandHistory<C> for CommandStack<C> {
    fn execute_command(&mut self, command: C, ctx: &mut C::Context) -> Result<(), C::Error> {
        if let Err(err) = command.apply(ctx) {
            log::warn!("\"{}\" failed to apply", command.description());
            return Err(err);
        }

        self.push_history(command);
        self.redo.clear();
        Ok(())
    }

    fn undo(&mut self, ctx: &mut C::Context) -> Result<bool, C::Error> {
        let Some(command) = self.history.pop_back() else {
            return Ok(false);
        };
        log::trace!("pop history: \"{}\"", command.description());

        match command.invert(ctx) {
            Ok(()) => {
                self.push_redo(command);
                Ok(true)
            }
            Err(err) => {
                log::warn!("\"{}\" failed to invert", command.description());
                self.history.push_back(command);
                Err(err)
            }
        }
    }

    fn redo(&mut self, ctx: &mut C::Context) -> Result<bool, C::Error> {
        let Some(command) = self.redo.pop_back() else {
            return Ok(false);
        };
        log::trace!("pop redo: \"{}\"", command.description());

        match command.reapply(ctx) {
            Ok(()) => {
                self.push_history(command);
                Ok(true)
            }
            Err(err) => {
                log::warn!("\"{}\" failed to re-apply", command.description());
                self.redo.push_back(command);
                Err(err)
            }
        }
    }

    fn set_history_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.history_limit = limit;
        self.trim();
    }
}
