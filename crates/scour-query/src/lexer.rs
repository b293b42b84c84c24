//! Whitespace chunk cursor.
//!
//! Splits a raw query into whitespace-delimited chunks and hands them out
//! one at a time. Quoted phrases and the `OR` keyword consume a variable
//! number of chunks, so the parser pulls from this cursor instead of
//! iterating over a fixed split.

/// A stateful cursor over the whitespace-delimited chunks of a query string.
pub struct Chunks<'a> {
    /// The pre-split chunks of the raw input.
    chunks: Vec<&'a str>,
    /// Index of the next chunk to hand out.
    position: usize,
}

impl<'a> Chunks<'a> {
    /// Creates a cursor over the chunks of `input`.
    ///
    /// Splitting is plain ASCII whitespace; runs of whitespace collapse and
    /// never produce empty chunks.
    pub fn new(input: &'a str) -> Self {
        Self {
            chunks: input.split_ascii_whitespace().collect(),
            position: 0,
        }
    }

    /// Returns the next chunk, or `None` once the input is exhausted.
    pub fn next_chunk(&mut self) -> Option<&'a str> {
        let chunk = self.chunks.get(self.position).copied();
        if chunk.is_some() {
            self.position += 1;
        }
        chunk
    }
}
