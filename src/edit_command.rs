use std::borrow::Cow;

use crate::{
    document::{Document, ElementId, Placement, Position},
    error::EditError,
    traits::command::Command,
};

/// A before/after pair. Applying writes `to`, inverting writes `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    pub from: T,
    pub to: T,
}

impl<T> Change<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }
}

impl<T: PartialEq> Change<T> {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Every reversible edit the editor records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// A new element. Inverting removes it again.
    Insert(Placement),
    /// A deleted element, with the slide and index it goes back to.
    Remove(Placement),
    FontFamily {
        element: ElementId,
        change: Change<String>,
    },
    FontSize {
        element: ElementId,
        change: Change<u32>,
    },
    Color {
        element: ElementId,
        change: Change<String>,
    },
    Move {
        element: ElementId,
        change: Change<Position>,
    },
    Text {
        element: ElementId,
        change: Change<String>,
    },
}

impl EditCommand {
    /// The element this command writes to.
    #[must_use]
    pub fn target(&self) -> ElementId {
        match self {
            Self::Insert(placement) | Self::Remove(placement) => placement.element.id,
            Self::FontFamily { element, .. }
            | Self::FontSize { element, .. }
            | Self::Color { element, .. }
            | Self::Move { element, .. }
            | Self::Text { element, .. } => *element,
        }
    }

    fn write(&self, doc: &mut Document, forward: bool) -> Result<(), EditError> {
        fn pick<T: Clone>(change: &Change<T>, forward: bool) -> T {
            if forward {
                change.to.clone()
            } else {
                change.from.clone()
            }
        }

        match self {
            Self::Insert(placement) if forward => doc.insert(placement.clone()),
            Self::Remove(placement) if !forward => doc.insert(placement.clone()),
            Self::Insert(placement) | Self::Remove(placement) => {
                doc.remove(placement.element.id).map(drop)
            }
            Self::FontFamily { element, change } => {
                doc.element_mut(*element)?.style.font_family = pick(change, forward);
                Ok(())
            }
            Self::FontSize { element, change } => {
                doc.element_mut(*element)?.style.font_size = pick(change, forward);
                Ok(())
            }
            Self::Color { element, change } => {
                doc.element_mut(*element)?.style.color = pick(change, forward);
                Ok(())
            }
            Self::Move { element, change } => {
                doc.element_mut(*element)?.position = pick(change, forward);
                Ok(())
            }
            Self::Text { element, change } => {
                doc.element_mut(*element)?.text = pick(change, forward);
                Ok(())
            }
        }
    }
}

impl Command for EditCommand {
    type Context = Document;
    type Error = EditError;

    fn apply(&self, ctx: &mut Document) -> Result<(), EditError> {
        self.write(ctx, true)
    }

    fn invert(&self, ctx: &mut Document) -> Result<(), EditError> {
        self.write(ctx, false)
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            Self::Insert(_) => "Add text",
            Self::Remove(_) => "Delete text",
            Self::FontFamily { .. } => "Change font",
            Self::FontSize { .. } => "Change font size",
            Self::Color { .. } => "Change color",
            Self::Move { .. } => "Move text",
            Self::Text { .. } => "Edit text",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command_stack::CommandStack,
        document::{Slide, TextElement, TextStyle},
        traits::command_history::CommandHistory,
    };

    fn doc_with_element() -> (Document, ElementId) {
        let mut doc = Document::new(vec![Slide::new("one.png"), Slide::new("two.png")]);
        let id = doc.next_id();
        doc.insert(Placement {
            slide: 1,
            index: 0,
            element: TextElement {
                id,
                text: "hello".to_owned(),
                style: TextStyle::default(),
                position: Position::new(5, 5),
            },
        })
        .unwrap();
        (doc, id)
    }

    #[test]
    fn test_style_commands_invert_exactly() {
        let (mut doc, id) = doc_with_element();
        let before = doc.element(id).unwrap().clone();

        let commands = [
            EditCommand::FontFamily {
                element: id,
                change: Change::new("Arial".to_owned(), "Georgia".to_owned()),
            },
            EditCommand::FontSize {
                element: id,
                change: Change::new(16, 32),
            },
            EditCommand::Color {
                element: id,
                change: Change::new("#000000".to_owned(), "red".to_owned()),
            },
            EditCommand::Text {
                element: id,
                change: Change::new("hello".to_owned(), "hello world".to_owned()),
            },
            EditCommand::Move {
                element: id,
                change: Change::new(Position::new(5, 5), Position::new(40, 2)),
            },
        ];

        for command in &commands {
            command.apply(&mut doc).unwrap();
            assert_ne!(doc.element(id).unwrap(), &before, "{}", command.description());
            command.invert(&mut doc).unwrap();
            assert_eq!(doc.element(id).unwrap(), &before, "{}", command.description());
        }
    }

    #[test]
    fn test_remove_restores_at_original_place() {
        let (mut doc, id) = doc_with_element();
        let other = doc.next_id();
        doc.insert(Placement {
            slide: 1,
            index: 1,
            element: TextElement {
                id: other,
                text: String::new(),
                style: TextStyle::default(),
                position: Position::default(),
            },
        })
        .unwrap();

        let placement = Placement {
            slide: 1,
            index: 0,
            element: doc.element(id).unwrap().clone(),
        };
        let command = EditCommand::Remove(placement);

        command.apply(&mut doc).unwrap();
        assert!(!doc.contains(id));
        assert_eq!(doc.locate(other), Some((1, 0)));

        command.invert(&mut doc).unwrap();
        assert_eq!(doc.locate(id), Some((1, 0)));
        assert_eq!(doc.locate(other), Some((1, 1)));
    }

    #[test]
    fn test_stale_target() {
        let (mut doc, id) = doc_with_element();
        let mut stack = CommandStack::new();

        stack
            .execute_command(
                EditCommand::Move {
                    element: id,
                    change: Change::new(Position::new(5, 5), Position::new(9, 9)),
                },
                &mut doc,
            )
            .unwrap();
        doc.remove(id).unwrap();

        assert_eq!(stack.undo(&mut doc), Err(EditError::StaleTarget(id)));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.redo_len(), 0);
    }

    #[test]
    fn test_target_and_description() {
        let (doc, id) = doc_with_element();
        let insert = EditCommand::Insert(Placement {
            slide: 1,
            index: 0,
            element: doc.element(id).unwrap().clone(),
        });

        assert_eq!(insert.target(), id);
        assert_eq!(insert.description(), "Add text");
        assert!(Change::new(3, 3).is_noop());
        assert!(!Change::new(3, 4).is_noop());
    }
}
