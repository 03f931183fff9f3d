//! Managed-block construction and application.

use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::span::find_span;

/// Applies one labeled block to one target file.
///
/// The rendered block is delimited by `<prefix> BEGIN:<label>` and
/// `<prefix> END:<label>` marker lines, the comment prefix keeping the
/// markers inert in the target file's own syntax. The default prefix is
/// `#`.
///
/// Labels are taken as opaque; a label that itself contains a marker
/// token is the caller's mistake and is not validated here.
///
/// # Example
/// ```
/// use shed_blocks::BlockManager;
///
/// let block = BlockManager::new("API_KEY", "export API_KEY=secret");
/// assert_eq!(
///     block.format(),
///     "# BEGIN:API_KEY\nexport API_KEY=secret\n# END:API_KEY\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BlockManager {
    label: String,
    content: String,
    comment_prefix: String,
}

impl BlockManager {
    /// Create a manager for `label` carrying `content`, with the `#`
    /// comment prefix.
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            comment_prefix: "#".into(),
        }
    }

    /// Override the comment prefix (e.g. `;` for ini files, `"` for
    /// vimrc).
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// The exact BEGIN marker line for this block.
    pub fn begin_marker(&self) -> String {
        format!("{} BEGIN:{}", self.comment_prefix, self.label)
    }

    /// The exact END marker line for this block.
    pub fn end_marker(&self) -> String {
        format!("{} END:{}", self.comment_prefix, self.label)
    }

    /// Render the full block span: BEGIN marker, content normalized to
    /// exactly one trailing newline, END marker, trailing newline.
    ///
    /// Pure; same inputs always yield the same bytes.
    pub fn format(&self) -> String {
        let mut content = self.content.clone();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        format!(
            "{}\n{}{}\n",
            self.begin_marker(),
            content,
            self.end_marker()
        )
    }

    /// Apply the block to in-memory file content, returning the new
    /// content.
    ///
    /// Replaces the first existing span for this label in place, or
    /// appends the block after normalizing the tail of `source` to end
    /// in a blank line (one newline added when the last line is
    /// unterminated, one more when no blank line separates it from the
    /// block). Bytes outside the affected span are preserved exactly.
    ///
    /// When manual edits have left multiple spans with this label, only
    /// the first is rewritten; the rest are accepted drift.
    pub fn apply(&self, source: &str) -> String {
        let formatted = self.format();

        match find_span(source, &self.begin_marker(), &self.end_marker()) {
            Some(span) => {
                let mut result = String::with_capacity(source.len() + formatted.len());
                result.push_str(&source[..span.start]);
                result.push_str(&formatted);
                result.push_str(&source[span.end..]);
                result
            }
            None => {
                let mut result = String::with_capacity(source.len() + formatted.len() + 2);
                result.push_str(source);
                if !result.ends_with('\n') {
                    result.push('\n');
                }
                if !result.ends_with("\n\n") {
                    result.push('\n');
                }
                result.push_str(&formatted);
                result
            }
        }
    }

    /// Apply the block to the file at `path`.
    ///
    /// A missing file is created holding exactly the formatted block.
    /// Otherwise the whole file is read, patched via [`Self::apply`],
    /// and written back atomically. Any read or write failure other than
    /// "file does not exist" surfaces as [`crate::Error::FileAccess`];
    /// the previous content stays intact when the write never completes.
    pub fn update_file(&self, path: &Path) -> Result<()> {
        match shed_fs::read_text_if_exists(path)? {
            None => {
                debug!(path = %path.display(), label = %self.label, "creating file for block");
                shed_fs::write_atomic(path, self.format().as_bytes())?;
            }
            Some(existing) => {
                let updated = self.apply(&existing);
                shed_fs::write_atomic(path, updated.as_bytes())?;
            }
        }
        Ok(())
    }
}
