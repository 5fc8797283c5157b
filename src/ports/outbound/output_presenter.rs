use crate::shared::Result;

/// OutputPresenter port for presenting a rendered artifact
///
/// This port abstracts the output destination (a file under the output
/// directory, stdout, etc.).
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination directory cannot be created
    /// - Writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
