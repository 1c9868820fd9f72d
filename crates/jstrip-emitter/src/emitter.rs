//! Emitter
//!
//! Walks the scanner's classification stream once and appends every
//! surviving character to the output buffer. The buffer is never rewound:
//! the decision for each character is final when it is pushed.

use jstrip_scanner::{CharClass, Classified};
use serde::{Deserialize, Serialize};

/// Options that change what the emitter keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitOptions {
    /// Keep the line terminators found inside block comments, so every line
    /// of the output sits at the same line number as in the input.
    pub preserve_line_breaks: bool,
}

pub struct Emitter {
    options: EmitOptions,
    out: String,
    dropped_chars: usize,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self::with_capacity(options, 0)
    }

    pub fn with_capacity(options: EmitOptions, capacity: usize) -> Self {
        Emitter {
            options,
            out: String::with_capacity(capacity),
            dropped_chars: 0,
        }
    }

    #[inline]
    pub fn should_emit(&self, class: CharClass) -> bool {
        class.is_emitted(self.options.preserve_line_breaks)
    }

    #[inline]
    pub fn push(&mut self, item: &Classified) {
        if self.should_emit(item.class) {
            self.out.push(item.ch);
        } else {
            self.dropped_chars += 1;
        }
    }

    pub fn emit_all(&mut self, items: impl IntoIterator<Item = Classified>) {
        for item in items {
            self.push(&item);
        }
    }

    /// Number of characters omitted so far.
    pub fn dropped_chars(&self) -> usize {
        self.dropped_chars
    }

    pub fn finish(self) -> String {
        self.out
    }
}
