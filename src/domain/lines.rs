//! Line-level view of a text file.

/// File contents as an ordered list of lines, each keeping its own terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLines {
    lines: Vec<String>,
}

impl FileLines {
    /// Split text into lines. `\n`, `\r\n`, a lone `\r` and the ASCII separators
    /// VT, FF, FS, GS and RS all end a line; the terminator stays attached.
    /// A trailing unterminated line is kept as is.
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0usize;
        let bytes = text.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' | 0x0B | 0x0C | 0x1C | 0x1D | 0x1E => {
                    lines.push(text[start..=i].to_string());
                    start = i + 1;
                }
                b'\r' => {
                    let end = if bytes.get(i + 1) == Some(&b'\n') {
                        i + 1
                    } else {
                        i
                    };
                    lines.push(text[start..=end].to_string());
                    start = end + 1;
                    i = end;
                }
                _ => {}
            }
            i += 1;
        }

        if start < text.len() {
            lines.push(text[start..].to_string());
        }

        FileLines { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Insert `block` so its first line lands at `index`.
    ///
    /// An index past the end appends. Returns the index actually used.
    pub fn insert_block<S: AsRef<str>>(&mut self, index: usize, block: &[S]) -> usize {
        let at = index.min(self.lines.len());
        self.lines.splice(
            at..at,
            block.iter().map(|line| line.as_ref().to_string()),
        );
        at
    }

    /// Whether the lines starting at `index` are exactly `block`.
    pub fn block_at<S: AsRef<str>>(&self, index: usize, block: &[S]) -> bool {
        if block.is_empty() {
            return false;
        }
        let Some(window) = self.lines.get(index..index.saturating_add(block.len())) else {
            return false;
        };
        window
            .iter()
            .zip(block)
            .all(|(existing, wanted)| existing == wanted.as_ref())
    }

    /// Join the lines back into a single string.
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}
