//! The element tree that edit commands act on.
//!
//! A [`Document`] is a list of image slides, each carrying an ordered list of
//! text overlays. Element order within a slide is paint order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element #{}", self.0)
    }
}

/// Top-left corner of an element, in pixels from the slide origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_family: String,
    /// Pixels.
    pub font_size: u32,
    /// Any CSS color string.
    pub color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_owned(),
            font_size: 16,
            color: "#000000".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub id: ElementId,
    pub text: String,
    pub style: TextStyle,
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub elements: Vec<TextElement>,
}

impl Slide {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            elements: Vec::new(),
        }
    }
}

/// An element together with where it sits: its slide and its index on that slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub slide: usize,
    pub index: usize,
    pub element: TextElement,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    slides: Vec<Slide>,
    next_id: u64,
}

impl Document {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        let next_id = slides
            .iter()
            .flat_map(|slide| &slide.elements)
            .map(|element| element.id.0 + 1)
            .max()
            .unwrap_or(0);

        Self { slides, next_id }
    }

    /// Allocates an id that no element of this document has used.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// # Errors
    ///
    /// [`EditError::UnknownSlide`] if `index` is out of range.
    pub fn slide(&self, index: usize) -> Result<&Slide, EditError> {
        self.slides.get(index).ok_or(EditError::UnknownSlide(index))
    }

    #[must_use]
    pub fn locate(&self, id: ElementId) -> Option<(usize, usize)> {
        self.slides.iter().enumerate().find_map(|(slide, s)| {
            s.elements
                .iter()
                .position(|element| element.id == id)
                .map(|index| (slide, index))
        })
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.locate(id).is_some()
    }

    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the element isn't in the document.
    pub fn element(&self, id: ElementId) -> Result<&TextElement, EditError> {
        let (slide, index) = self.locate(id).ok_or(EditError::StaleTarget(id))?;
        Ok(&self.slides[slide].elements[index])
    }

    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the element isn't in the document.
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut TextElement, EditError> {
        let (slide, index) = self.locate(id).ok_or(EditError::StaleTarget(id))?;
        Ok(&mut self.slides[slide].elements[index])
    }

    /// Inserts the placed element. The index is clamped to the slide's length.
    ///
    /// # Errors
    ///
    /// [`EditError::UnknownSlide`] for a missing slide, [`EditError::DuplicateElement`]
    /// if the element's id is already in the document.
    pub fn insert(&mut self, placement: Placement) -> Result<(), EditError> {
        let Placement {
            slide,
            index,
            element,
        } = placement;

        if self.contains(element.id) {
            return Err(EditError::DuplicateElement(element.id));
        }

        let elements = &mut self
            .slides
            .get_mut(slide)
            .ok_or(EditError::UnknownSlide(slide))?
            .elements;
        let index = index.min(elements.len());

        self.next_id = self.next_id.max(element.id.0 + 1);
        elements.insert(index, element);
        Ok(())
    }

    /// Removes the element, returning it with the place it was taken from.
    ///
    /// # Errors
    ///
    /// [`EditError::StaleTarget`] if the element isn't in the document.
    pub fn remove(&mut self, id: ElementId) -> Result<Placement, EditError> {
        let (slide, index) = self.locate(id).ok_or(EditError::StaleTarget(id))?;
        let element = self.slides[slide].elements.remove(index);

        Ok(Placement {
            slide,
            index,
            element,
        })
    }
}
