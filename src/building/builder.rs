//! Streaming outline builder
//!
//! Drives one parse pass: every line is scanned, turned into a node, resolved
//! and attached before the next line is looked at. Only the current line is
//! buffered; the forest grows in the arena.

use super::arena::Arena;
use super::errors::{DecodeError, ReadError};
use super::resolver::{resolver_for, Resolver};
use crate::ast::{Node, Outline};
use crate::config::ParseConfig;
use crate::lexing::{scan_line, split_lines, ScannedLine};
use log::{debug, warn};
use std::io::BufRead;

pub struct OutlineBuilder {
    config: ParseConfig,
    resolver: Box<dyn Resolver>,
    arena: Arena,
    lines_fed: usize,
}

impl OutlineBuilder {
    pub fn new(config: ParseConfig) -> Self {
        OutlineBuilder {
            config,
            resolver: resolver_for(config.mode),
            arena: Arena::new(),
            lines_fed: 0,
        }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Nodes attached so far
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Physical lines seen since the last reset
    pub fn lines_fed(&self) -> usize {
        self.lines_fed
    }

    /// Process a chunk of text holding one or more lines.
    ///
    /// Returns the number of nodes the chunk added.
    pub fn feed(&mut self, chunk: &str) -> usize {
        let before = self.arena.len();
        for line in split_lines(chunk) {
            self.feed_line(line);
        }
        self.arena.len() - before
    }

    fn feed_line(&mut self, line: &str) {
        self.lines_fed += 1;
        if let Some(scanned) = scan_line(line) {
            self.attach(scanned);
        }
    }

    fn attach(&mut self, scanned: ScannedLine) {
        let level = self.config.indent.level(&scanned.indent);
        let kind = scanned.kind;
        let node = Node::new(kind, scanned.canonical_indent(), scanned.text, scanned.tags);

        let id = self.arena.alloc(node);
        let parent = self.resolver.resolve(&level, kind, id);
        self.arena.attach(id, parent);
    }

    /// Stream every line of `reader` into the builder.
    ///
    /// Stops at the first line that is not UTF-8; the error carries the
    /// forest built up to that point, and the builder keeps it as well.
    /// Complete lines ahead of the bad bytes in the same buffer are still fed,
    /// which matters for `\r`-terminated input.
    pub fn read<R: BufRead>(&mut self, mut reader: R) -> Result<(), ReadError> {
        let mut buf = Vec::new();
        let start = self.lines_fed;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            match std::str::from_utf8(&buf) {
                Ok(text) => {
                    self.feed(text);
                }
                Err(source) => {
                    let valid =
                        std::str::from_utf8(&buf[..source.valid_up_to()]).unwrap_or_default();
                    self.feed(complete_lines(valid));

                    let line = self.lines_fed - start + 1;
                    warn!("stopping read at line {line}: {source}");
                    return Err(DecodeError {
                        line,
                        source,
                        partial: self.snapshot(),
                    }
                    .into());
                }
            }
        }

        debug!(
            "{} resolver read {} lines into {} nodes ({} roots)",
            self.resolver.name(),
            self.lines_fed - start,
            self.arena.len(),
            self.arena.roots().len()
        );
        Ok(())
    }

    /// The forest as it stands, without ending the pass.
    pub fn snapshot(&self) -> Outline {
        self.arena.to_outline()
    }

    /// End the pass and hand over the forest.
    pub fn finish(self) -> Outline {
        self.arena.into_outline()
    }

    /// Drop the forest and all resolver state so the builder can be reused.
    pub fn reset(&mut self) {
        self.resolver.reset();
        self.arena = Arena::new();
        self.lines_fed = 0;
    }
}

/// Text up to and including the last line terminator.
fn complete_lines(text: &str) -> &str {
    match text.rfind(['\n', '\r']) {
        Some(end) => &text[..=end],
        None => "",
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new(ParseConfig::default())
    }
}
