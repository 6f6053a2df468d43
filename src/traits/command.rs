use std::borrow::Cow;

/// A reversible action on some external target.
///
/// A command pairs a forward mutation (`apply`) with its exact inverse
/// (`invert`). Whatever values both need are captured when the command is
/// built, so applying and then inverting restores the target exactly. The
/// history that stores commands never checks this; building commands with the
/// right before/after values is up to the caller.
///
/// # Associated Types
///
/// * `Context`: The target the command mutates.
/// * `Error`: What `apply` or `invert` report when the target can't take the change.
///
/// # Required Methods
///
/// * `apply(&self, ctx: &mut Self::Context)`: Performs the mutation.
/// * `invert(&self, ctx: &mut Self::Context)`: Reverses the mutation.
///
/// # Provided Methods
///
/// * `reapply(&self, ctx: &mut Self::Context)`: Performs the mutation again after an undo. Calls `apply` by default.
/// * `description(&self) -> Cow<str>`: Returns a description of the command. The default implementation returns "Unknown command".
///
/// # Example
///
/// ```
/// use slide_editor::prelude::Command;
/// use std::borrow::Cow;
/// use std::convert::Infallible;
///
/// struct Recolor {
///     from: &'static str,
///     to: &'static str,
/// }
///
/// impl Command for Recolor {
///     type Context = String;
///     type Error = Infallible;
///
///     fn apply(&self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
///         *ctx = self.to.to_owned();
///         Ok(())
///     }
///
///     fn invert(&self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
///         *ctx = self.from.to_owned();
///         Ok(())
///     }
///
///     fn description(&self) -> Cow<'_, str> {
///         Cow::Borrowed("Change color")
///     }
/// }
///
/// let mut color = String::from("black");
/// let cmd = Recolor { from: "black", to: "red" };
/// cmd.apply(&mut color).unwrap();
/// assert_eq!(color, "red");
/// cmd.invert(&mut color).unwrap();
/// assert_eq!(color, "black");
/// ```
pub trait Command {
    type Context;
    type Error;

    /// Performs the mutation on the given target.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the target can't accept the change. The target
    /// should be left unchanged in that case.
    fn apply(&self, ctx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Reverses a previous `apply` on the given target.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the target can't accept the change. The target
    /// should be left unchanged in that case.
    fn invert(&self, ctx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Performs the mutation again after it was inverted. Calls `apply` by default.
    ///
    /// # Errors
    ///
    /// Same as [`Command::apply`].
    fn reapply(&self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
        self.apply(ctx)
    }

    /// Returns a description of the command. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}
