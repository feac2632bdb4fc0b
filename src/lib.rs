//! conll-trees: streaming reader and validating writer for CoNLL dependency trees
//!
//! Reads the 10-column CoNLL format into [`Tree`] values lazily, and writes
//! trees back out, refusing any field value that would not survive a round
//! trip.
//!
//! ```
//! use conll_trees::{ConllReader, write_tree};
//!
//! let text = "1\tdogs\tdog\tNNS\tNNS\tNumber=Plur\t2\tnsubj\t_\t_\n\
//!             2\tbark\t_\tVBP\tVBP\t_\t0\troot\t_\t_\n\
//!             \n";
//!
//! let trees: Vec<_> = ConllReader::from_string(text)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(trees.len(), 1);
//! assert_eq!(trees[0].lemma(2), "");
//!
//! let mut out = Vec::new();
//! write_tree(&mut out, &trees[0]).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), text);
//! ```

pub mod error; // Error taxonomy for reading and writing
pub mod field; // Field validation shared by the writer
pub mod options; // Reader configuration
pub mod reader; // Lazy CoNLL reader
pub mod tree; // Tree data structures
pub mod writer; // Validating CoNLL writer

// Re-exports for convenience
pub use error::{FormatError, ReadError, TreeError, WriteError};
pub use field::{Field, is_valid};
pub use options::{DecodePolicy, ReadOptions};
pub use reader::{ConllReader, read_trees, read_trees_with};
pub use tree::{Node, NodeId, Tree};
pub use writer::{ConllWriter, write_tree, write_trees};
