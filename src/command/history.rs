use super::{Command, CommandError, CommandResult};
use crate::document::Document;
use crate::stroke::StrokeRef;

/// Manages the history of executed commands for undo/redo functionality
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Rebuild a history from already applied and already undone commands.
    ///
    /// `undone` is ordered bottom to top: the last element is redone first.
    pub fn from_stacks(applied: Vec<Command>, undone: Vec<Command>) -> Self {
        Self {
            undo_stack: applied,
            redo_stack: undone,
        }
    }

    /// Execute a command and add it to the history if successful
    pub fn execute(&mut self, command: Command, document: &mut Document) -> CommandResult {
        command.execute(document)?;

        self.undo_stack.push(command);
        // A new action discards everything that was undone
        self.redo_stack.clear();

        Ok(())
    }

    /// Undo the last executed command
    pub fn undo(&mut self, document: &mut Document) -> CommandResult {
        let command = self.undo_stack.pop().ok_or(CommandError::EmptyHistory)?;
        if let Err(err) = command.undo(document) {
            self.undo_stack.push(command);
            return Err(err);
        }
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, document: &mut Document) -> CommandResult {
        let command = self.redo_stack.pop().ok_or(CommandError::EmptyHistory)?;
        if let Err(err) = command.execute(document) {
            self.redo_stack.push(command);
            return Err(err);
        }
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Strokes that were undone, most recently undone last
    pub fn undone_strokes(&self) -> Vec<StrokeRef> {
        self.redo_stack.iter().map(|c| c.stroke().clone()).collect()
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
