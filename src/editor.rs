//! The editing session.
//!
//! [`Editor`] turns user actions on the slide widget into [`EditCommand`]s and
//! runs them through a single [`CommandStack`]. The host forwards its events
//! here; every undoable change to the [`Document`] goes through the stack.

use std::borrow::Cow;

use crate::{
    command_stack::CommandStack,
    config::EditorConfig,
    document::{Document, ElementId, Placement, Position, Slide, TextElement, TextStyle},
    edit_command::{Change, EditCommand},
    error::EditError,
    traits::{command::Command, command_history::CommandHistory},
};

#[derive(Debug, Clone, Copy)]
struct Drag {
    element: ElementId,
    start: Position,
    /// Pointer minus element position at pointer-down.
    offset: Position,
}

#[derive(Debug, Clone)]
struct PendingEdit {
    element: ElementId,
    old_text: String,
}

#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    document: Document,
    stack: CommandStack<EditCommand>,
    current_slide: usize,
    toolbar: TextStyle,
    selected: Option<ElementId>,
    drag: Option<Drag>,
    pending_edit: Option<PendingEdit>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default(), vec![Slide::default()])
    }
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig, slides: Vec<Slide>) -> Self {
        Self {
            stack: CommandStack::with_limit(config.history_limit),
            toolbar: config.text.style.clone(),
            document: Document::new(slides),
            current_slide: 0,
            selected: None,
            drag: None,
            pending_edit: None,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access to the document, bypassing the history.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn history(&self) -> &CommandStack<EditCommand> {
        &self.stack
    }

    /// The style new elements get, and what the style controls show.
    #[must_use]
    pub fn toolbar(&self) -> &TextStyle {
        &self.toolbar
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// # Errors
    ///
    /// [`EditError::UnknownSlide`] if `index` is out of range.
    pub fn set_current_slide(&mut self, index: usize) -> Result<(), EditError> {
        self.document.slide(index)?;
        self.current_slide = index;
        self.deselect();
        Ok(())
    }

    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the element isn't in the document.
    pub fn select(&mut self, element: ElementId) -> Result<(), EditError> {
        if !self.document.contains(element) {
            return Err(EditError::StaleTarget(element));
        }
        if self.selected != Some(element) {
            self.pending_edit = None;
        }
        self.selected = Some(element);
        Ok(())
    }

    /// Clears the selection. A drag in progress snaps back.
    pub fn deselect(&mut self) {
        self.interrupt();
        self.selected = None;
    }

    fn execute(&mut self, command: EditCommand) -> Result<(), EditError> {
        self.stack.execute_command(command, &mut self.document)
    }

    /// Adds a text element to the current slide and selects it.
    ///
    /// # Errors
    ///
    /// [`EditError::UnknownSlide`] if the current slide no longer exists.
    pub fn add_text(&mut self) -> Result<ElementId, EditError> {
        let slide = self.current_slide;
        let index = self.document.slide(slide)?.elements.len();
        let element = TextElement {
            id: self.document.next_id(),
            text: self.config.text.content.clone(),
            style: self.toolbar.clone(),
            position: self.config.text.position,
        };
        let id = element.id;

        self.execute(EditCommand::Insert(Placement {
            slide,
            index,
            element,
        }))?;
        self.select(id)?;
        Ok(id)
    }

    /// Updates the toolbar, and the selected element if there is one.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the selected element has gone; the toolbar is left as it was.
    pub fn set_font_family(&mut self, font_family: impl Into<String>) -> Result<(), EditError> {
        let font_family = font_family.into();
        self.restyle(font_family.clone(), |style| &style.font_family, |element, change| {
            EditCommand::FontFamily { element, change }
        })?;
        self.toolbar.font_family = font_family;
        Ok(())
    }

    /// Updates the toolbar, and the selected element if there is one.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the selected element has gone; the toolbar is left as it was.
    pub fn set_font_size(&mut self, font_size: u32) -> Result<(), EditError> {
        self.restyle(font_size, |style| &style.font_size, |element, change| {
            EditCommand::FontSize { element, change }
        })?;
        self.toolbar.font_size = font_size;
        Ok(())
    }

    /// Updates the toolbar, and the selected element if there is one.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the selected element has gone; the toolbar is left as it was.
    pub fn set_color(&mut self, color: impl Into<String>) -> Result<(), EditError> {
        let color = color.into();
        self.restyle(color.clone(), |style| &style.color, |element, change| {
            EditCommand::Color { element, change }
        })?;
        self.toolbar.color = color;
        Ok(())
    }

    fn restyle<T, R, B>(&mut self, to: T, read: R, build: B) -> Result<(), EditError>
    where
        T: Clone + PartialEq,
        R: Fn(&TextStyle) -> &T,
        B: Fn(ElementId, Change<T>) -> EditCommand,
    {
        let Some(element) = self.selected else {
            log::debug!("style change with nothing selected; toolbar only");
            return Ok(());
        };

        let from = read(&self.document.element(element)?.style).clone();
        let change = Change::new(from, to);
        if change.is_noop() {
            log::debug!("style of {element} already matches; nothing recorded");
            return Ok(());
        }

        self.execute(build(element, change))
    }

    /// Starts dragging `element` with the pointer at `pointer`. Selects the element.
    /// An unfinished earlier drag snaps back first.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the element isn't in the document.
    pub fn pointer_down(&mut self, element: ElementId, pointer: Position) -> Result<(), EditError> {
        self.select(element)?;
        self.abandon_drag();
        let start = self.document.element(element)?.position;
        self.drag = Some(Drag {
            element,
            start,
            offset: Position::new(
                pointer.x.saturating_sub(start.x),
                pointer.y.saturating_sub(start.y),
            ),
        });
        Ok(())
    }

    /// Follows the pointer during a drag. Nothing is recorded until [`Editor::pointer_up`].
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the dragged element has gone; the drag is dropped.
    pub fn pointer_move(&mut self, pointer: Position) -> Result<(), EditError> {
        let Some(drag) = self.drag else {
            return Ok(());
        };

        let target = self.config.canvas.clamp(Position::new(
            pointer.x.saturating_sub(drag.offset.x),
            pointer.y.saturating_sub(drag.offset.y),
        ));
        match self.document.element_mut(drag.element) {
            Ok(element) => {
                element.position = target;
                Ok(())
            }
            Err(err) => {
                self.drag = None;
                Err(err)
            }
        }
    }

    /// Ends a drag, recording the whole move as one command.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the dragged element has gone.
    pub fn pointer_up(&mut self) -> Result<(), EditError> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };

        let to = self.document.element(drag.element)?.position;
        let change = Change::new(drag.start, to);
        if change.is_noop() {
            log::debug!("{} released where it started; nothing recorded", drag.element);
            return Ok(());
        }

        self.execute(EditCommand::Move {
            element: drag.element,
            change,
        })
    }

    /// Captures the selected element's text before a keystroke changes it.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the selected element has gone.
    pub fn key_down(&mut self) -> Result<(), EditError> {
        let Some(element) = self.selected else {
            return Ok(());
        };

        let old_text = self.document.element(element)?.text.clone();
        self.pending_edit = Some(PendingEdit { element, old_text });
        Ok(())
    }

    /// Records the selected element's text changing to `text`.
    ///
    /// The old value is whatever the last [`Editor::key_down`] captured, or
    /// the element's current text if nothing was captured.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the selected element has gone.
    pub fn text_input(&mut self, text: impl Into<String>) -> Result<(), EditError> {
        let Some(element) = self.selected else {
            log::debug!("text input with nothing selected");
            return Ok(());
        };

        let from = match self.pending_edit.take() {
            Some(pending) if pending.element == element => pending.old_text,
            _ => self.document.element(element)?.text.clone(),
        };
        let change = Change::new(from, text.into());
        if change.is_noop() {
            return Ok(());
        }

        self.execute(EditCommand::Text { element, change })
    }

    /// Deletes the selected element. Returns `false` if nothing was selected.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the selected element has gone.
    pub fn delete_selected(&mut self) -> Result<bool, EditError> {
        let Some(element) = self.selected else {
            return Ok(false);
        };

        let (slide, index) = self
            .document
            .locate(element)
            .ok_or(EditError::StaleTarget(element))?;
        let element = self.document.element(element)?.clone();

        self.execute(EditCommand::Remove(Placement {
            slide,
            index,
            element,
        }))?;
        self.deselect();
        Ok(true)
    }

    /// Returns `false` if there was nothing to undo.
    ///
    /// # Errors
    ///
    /// Whatever the command reports; see [`CommandStack`].
    pub fn undo(&mut self) -> Result<bool, EditError> {
        self.interrupt();
        let result = self.stack.undo(&mut self.document);
        self.release_stale_selection();
        result
    }

    /// Returns `false` if there was nothing to redo.
    ///
    /// # Errors
    ///
    /// Whatever the command reports; see [`CommandStack`].
    pub fn redo(&mut self) -> Result<bool, EditError> {
        self.interrupt();
        let result = self.stack.redo(&mut self.document);
        self.release_stale_selection();
        result
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    #[must_use]
    pub fn undo_description(&self) -> Option<Cow<'_, str>> {
        self.stack.peek_undo().map(Command::description)
    }

    #[must_use]
    pub fn redo_description(&self) -> Option<Cow<'_, str>> {
        self.stack.peek_redo().map(Command::description)
    }

    /// Drops any half-finished drag or text edit. A drag in progress snaps back.
    fn interrupt(&mut self) {
        self.pending_edit = None;
        self.abandon_drag();
    }

    fn abandon_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::debug!("drag of {} abandoned; snapping back", drag.element);
            if let Ok(element) = self.document.element_mut(drag.element) {
                element.position = drag.start;
            }
        }
    }

    fn release_stale_selection(&mut self) {
        if let Some(element) = self.selected {
            if !self.document.contains(element) {
                log::trace!("{element} no longer present; releasing selection");
                self.deselect();
            }
        }
    }
}
