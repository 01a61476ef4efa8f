use std::sync::Arc;

use super::{CommandError, CommandResult};
use crate::document::Document;
use crate::stroke::StrokeRef;

/// Actions on the document that can be undone and redone
#[derive(Clone, Debug)]
pub enum Command {
    /// Append a sealed stroke to the end of the stroke list
    AddStroke(StrokeRef),
}

impl Command {
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddStroke(stroke) => {
                document.add_stroke(Arc::clone(stroke));
                Ok(())
            }
        }
    }

    pub fn undo(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddStroke(stroke) => {
                // Only the stroke this command added may be removed
                match document.last_stroke() {
                    Some(last) if Arc::ptr_eq(last, stroke) => {
                        document.remove_last_stroke();
                        Ok(())
                    }
                    _ => Err(CommandError::InvalidState(
                        "last stroke was not added by this command".to_owned(),
                    )),
                }
            }
        }
    }

    pub fn stroke(&self) -> &StrokeRef {
        match self {
            Command::AddStroke(stroke) => stroke,
        }
    }
}
