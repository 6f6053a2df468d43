use std::{borrow::Cow, convert::Infallible, fmt};

use crate::traits::command::Command;

type Action<T, V, E> = Box<dyn Fn(&mut T, &V) -> Result<(), E> + Send + Sync>;

/// A command built from a pair of closures and the value they share.
///
/// `value` is captured once, when the command is built, and handed to both
/// closures every time. It is never inspected by the history.
pub struct FnCommand<T, V, E = Infallible> {
    apply: Action<T, V, E>,
    invert: Action<T, V, E>,
    value: V,
    description: Cow<'static, str>,
}

impl<T, V, E> FnCommand<T, V, E> {
    pub fn new<A, I>(value: V, apply: A, invert: I) -> Self
    where
        A: Fn(&mut T, &V) -> Result<(), E> + Send + Sync + 'static,
        I: Fn(&mut T, &V) -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
            invert: Box::new(invert),
            value,
            description: Cow::Borrowed("Unknown command"),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<T, V> FnCommand<T, V, Infallible> {
    /// Builds a command from closures that can't fail.
    pub fn infallible<A, I>(value: V, apply: A, invert: I) -> Self
    where
        A: Fn(&mut T, &V) + Send + Sync + 'static,
        I: Fn(&mut T, &V) + Send + Sync + 'static,
    {
        Self::new(
            value,
            move |ctx, value| {
                apply(ctx, value);
                Ok(())
            },
            move |ctx, value| {
                invert(ctx, value);
                Ok(())
            },
        )
    }
}

impl<T, V, E> Command for FnCommand<T, V, E> {
    type Context = T;
    type Error = E;

    fn apply(&self, ctx: &mut T) -> Result<(), E> {
        (self.apply)(ctx, &self.value)
    }

    fn invert(&self, ctx: &mut T) -> Result<(), E> {
        (self.invert)(ctx, &self.value)
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.description)
    }
}

impl<T, V: fmt::Debug, E> fmt::Debug for FnCommand<T, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("description", &self.description)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
