/// Multi-line text assembled from `text`/`next`-style fragments.
///
/// Fragments are joined with a single space. Blank fragments are dropped.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    fragments: Vec<String>,
    open: bool,
}

impl TextBuffer {
    /// Start a new block, discarding anything not yet taken.
    pub fn begin(&mut self, first: &str) {
        self.fragments.clear();
        self.open = true;
        self.push(first);
    }

    /// Append a continuation fragment. Ignored while closed.
    pub fn push(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if self.open && !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
    }

    /// Stop collecting; the text stays available to [`TextBuffer::take`].
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close and return the assembled text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.open = false;
        let text = self.fragments.join(" ");
        self.fragments.clear();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_single_space() {
        let mut buffer = TextBuffer::default();
        buffer.begin("foo");
        buffer.push("  bar ");
        buffer.push("");
        assert_eq!(buffer.take(), "foo bar");
        buffer.push("after");
        assert_eq!(buffer.take(), "");
    }

    #[test]
    fn test_push_while_closed_is_ignored() {
        let mut buffer = TextBuffer::default();
        buffer.push("stray");
        buffer.begin("a");
        buffer.close();
        buffer.push("b");
        assert_eq!(buffer.take(), "a");
    }

    #[test]
    fn test_begin_discards_previous() {
        let mut buffer = TextBuffer::default();
        buffer.begin("old");
        buffer.begin("new");
        assert_eq!(buffer.take(), "new");
    }
}
