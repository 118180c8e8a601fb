//! Line-oriented text sink for generated sources.
//!
//! Lines are joined with `\n`; finished text never ends with a newline.

pub trait Emitter {
    /// Emit `text` on its own line after `indent` spaces. The indentation is
    /// written even when `text` is empty.
    fn emit_line(&mut self, indent: usize, text: &str);

    fn emit_blank(&mut self) {
        self.emit_line(0, "");
    }
}

/// Collects lines into a `String`.
#[derive(Default)]
pub struct StringEmitter {
    text: String,
    lines: usize,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        StringEmitter {
            text: String::with_capacity(capacity),
            lines: 0,
        }
    }

    pub fn finish(self) -> String {
        self.text
    }
}

impl Emitter for StringEmitter {
    fn emit_line(&mut self, indent: usize, text: &str) {
        if self.lines > 0 {
            self.text.push('\n');
        }
        self.text.push_str(&" ".repeat(indent));
        self.text.push_str(text);
        self.lines += 1;
    }
}
