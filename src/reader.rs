//! CoNLL file reading
//!
//! Parses the 10-column CoNLL dependency format into [`Tree`] values, one
//! tree per blank-line-delimited block:
//!
//! ```text
//! ID  FORM  LEMMA  CPOSTAG  POSTAG  FEATS  HEAD  DEPREL  _  _
//! ```
//!
//! Lines starting with `#` are comments. Trees are yielded lazily; the
//! input is never buffered beyond the current line.

use crate::error::{FormatError, ReadError};
use crate::field::{EMPTY, FEATS_SEPARATOR, FIELD_COUNT};
use crate::options::{DecodePolicy, ReadOptions};
use crate::tree::{Node, Tree};
use atoi::FromRadix10SignedChecked;
use bstr::ByteSlice;
use flate2::read::MultiGzDecoder;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Source name used for in-memory input
pub const STRING_SOURCE: &str = "<string>";

/// Nodes of the tree currently being read
#[derive(Debug, Default)]
struct Pending {
    nodes: Vec<Node>,
}

impl Pending {
    /// Id the next data line must carry
    fn next_id(&self) -> usize {
        self.nodes.len() + 1
    }

    /// Finish the current tree, if any, and start a new one
    fn take_tree(&mut self) -> Option<Tree> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.nodes).into_iter().collect())
        }
    }
}

/// CoNLL reader that iterates over trees
///
/// Stops after the first error: a single malformed line fails the whole read.
pub struct ConllReader<R: BufRead> {
    reader: R,
    file: String,
    options: ReadOptions,
    buf: Vec<u8>,
    line_num: usize,
    pending: Pending,
    done: bool,
}

impl ConllReader<Box<dyn BufRead>> {
    /// Open a file; paths ending in `.gz` are decompressed on the fly
    pub fn from_path(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self, ReadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| ReadError::Open {
            path: path.to_path_buf(),
            error,
        })?;

        let gzipped = path.extension().is_some_and(|ext| ext == "gz");
        debug!(path = %path.display(), gzipped, "opened CoNLL file");

        let reader: Box<dyn BufRead> = if gzipped {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self::new(reader, path.display().to_string(), options))
    }
}

impl ConllReader<Cursor<Vec<u8>>> {
    /// Create a reader over in-memory text
    pub fn from_string(text: &str) -> Self {
        Self::new(
            Cursor::new(text.as_bytes().to_vec()),
            STRING_SOURCE,
            ReadOptions::default(),
        )
    }
}

impl<R: BufRead> ConllReader<R> {
    /// Wrap an already-open stream; `file` names it in diagnostics
    pub fn new(reader: R, file: impl Into<String>, options: ReadOptions) -> Self {
        Self {
            reader,
            file: file.into(),
            options,
            buf: Vec::new(),
            line_num: 0,
            pending: Pending::default(),
            done: false,
        }
    }

    /// Name of the source used in error messages
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_num
    }

    /// Handle the line in `self.buf`, returning a tree if it closed one
    fn process_line(&mut self) -> Result<Option<Tree>, FormatError> {
        let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

        let line = match self.options.decode {
            DecodePolicy::Strict => Cow::Borrowed(std::str::from_utf8(bytes)?),
            DecodePolicy::Replace => {
                let line = bytes.to_str_lossy();
                if matches!(line, Cow::Owned(_)) {
                    warn!(file = %self.file, line = self.line_num, "replaced invalid UTF-8");
                }
                line
            }
        };

        // Blank line: tree boundary
        if line.is_empty() {
            return Ok(self.pending.take_tree());
        }

        if line.starts_with('#') {
            return Ok(None);
        }

        let node = parse_line(&line, self.pending.next_id())?;
        self.pending.nodes.push(node);
        Ok(None)
    }

    fn fail(&mut self, error: ReadError) -> Option<Result<Tree, ReadError>> {
        debug!(%error, "CoNLL read failed");
        self.done = true;
        Some(Err(error))
    }
}

impl<R: BufRead> Iterator for ConllReader<R> {
    type Item = Result<Tree, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    // EOF: the last tree needs no trailing blank line
                    self.done = true;
                    let tree = self.pending.take_tree()?;
                    trace!(file = %self.file, nodes = tree.len(), "read final tree");
                    return Some(Ok(tree));
                }
                Ok(_) => self.line_num += 1,
                Err(error) => {
                    let error = ReadError::Io {
                        file: self.file.clone(),
                        line: self.line_num + 1,
                        error,
                    };
                    return self.fail(error);
                }
            }

            match self.process_line() {
                Ok(Some(tree)) => {
                    trace!(file = %self.file, line = self.line_num, nodes = tree.len(), "read tree");
                    return Some(Ok(tree));
                }
                Ok(None) => continue,
                Err(reason) => {
                    let error = ReadError::Format {
                        file: self.file.clone(),
                        line: self.line_num,
                        reason,
                    };
                    return self.fail(error);
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for ConllReader<R> {}

/// Open a CoNLL file and iterate over its trees with default options
pub fn read_trees(path: impl AsRef<Path>) -> Result<ConllReader<Box<dyn BufRead>>, ReadError> {
    ConllReader::from_path(path, ReadOptions::default())
}

/// Open a CoNLL file and iterate over its trees
pub fn read_trees_with(
    path: impl AsRef<Path>,
    options: ReadOptions,
) -> Result<ConllReader<Box<dyn BufRead>>, ReadError> {
    ConllReader::from_path(path, options)
}

/// Parse a single data line into a Node
///
/// Checks run in a fixed order: field count, node id, empty fields, HEAD.
fn parse_line(line: &str, expected_id: usize) -> Result<Node, FormatError> {
    let found = memchr::memchr_iter(b'\t', line.as_bytes()).count() + 1;
    if found != FIELD_COUNT {
        return Err(FormatError::FieldCount {
            found,
            line: line.to_string(),
        });
    }

    let mut fields = [""; FIELD_COUNT];
    for (slot, field) in fields.iter_mut().zip(line.split('\t')) {
        *slot = field;
    }

    let expected = expected_id.to_string();
    if fields[0] != expected {
        return Err(FormatError::NodeId {
            expected,
            found: fields[0].to_string(),
        });
    }

    if let Some(index) = fields.iter().position(|field| field.is_empty()) {
        return Err(FormatError::EmptyField { index });
    }

    let head = parse_head(fields[6])?;

    // Field 2: LEMMA
    let lemma = if fields[2] == EMPTY { "" } else { fields[2] };

    // Field 5: FEATS
    let feats = if fields[5] == EMPTY {
        Vec::new()
    } else {
        fields[5].split(FEATS_SEPARATOR).map(str::to_string).collect()
    };

    // Fields 8 and 9 are unused
    Ok(Node {
        form: fields[1].to_string(),
        lemma: lemma.to_string(),
        cpostag: fields[3].to_string(),
        postag: fields[4].to_string(),
        feats,
        head,
        deprel: fields[7].to_string(),
    })
}

/// Parse HEAD field (decimal integer, optional sign)
fn parse_head(s: &str) -> Result<i64, FormatError> {
    let bytes = s.as_bytes();
    let (value, used) = i64::from_radix_10_signed_checked(bytes);
    match value {
        Some(head) if used == bytes.len() && bytes.last().is_some_and(u8::is_ascii_digit) => {
            Ok(head)
        }
        _ => Err(FormatError::Head {
            value: s.to_string(),
        }),
    }
}
