use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::editor::Editor;

/// A cloneable handle to one [`Editor`].
///
/// Each event callback the host registers gets its own clone; they all lock
/// the same editor. Holding the lock for a whole action keeps `execute`,
/// `undo` and `redo` from interleaving.
///
/// # Examples
///
/// ```
/// use slide_editor::shared_editor::SharedEditor;
///
/// let editor = SharedEditor::default();
/// let on_click = editor.clone();
///
/// let id = on_click.modify(|editor| editor.add_text()).unwrap();
/// editor.modify(|editor| editor.set_color("red")).unwrap();
///
/// assert_eq!(editor.lock().document().element(id).unwrap().style.color, "red");
/// assert!(on_click.lock().can_undo());
/// ```
#[derive(Default)]
pub struct SharedEditor {
    inner: Arc<Mutex<Editor>>,
}

impl SharedEditor {
    pub fn new(editor: Editor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(editor)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Editor> {
        self.inner.lock()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn try_lock(&self) -> Option<MutexGuard<'_, Editor>> {
        self.inner.try_lock()
    }

    /// Runs `f` with the editor locked.
    pub fn modify<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Editor) -> R,
    {
        let mut editor = self.lock();
        f(&mut editor)
    }

    /// Takes the editor back out, if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged while other clones exist.
    pub fn into_inner(self) -> Result<Editor, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl Clone for SharedEditor {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for SharedEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(editor) => f
                .debug_struct("SharedEditor")
                .field("selected", &editor.selected())
                .field("undo", &editor.history().len())
                .field("redo", &editor.history().redo_len())
                .finish(),
            None => write!(f, "SharedEditor(<locked>)"),
        }
    }
}

impl From<Arc<Mutex<Editor>>> for SharedEditor {
    fn from(inner: Arc<Mutex<Editor>>) -> Self {
        Self { inner }
    }
}

impl From<Editor> for SharedEditor {
    fn from(editor: Editor) -> Self {
        Self::new(editor)
    }
}
