//! CoNLL file writing
//!
//! Every field is validated before its node line is written, so whatever
//! reaches the sink reads back unchanged. A failure aborts the tree and may
//! leave the node lines before it in the sink.

use crate::error::WriteError;
use crate::field::{self, EMPTY, FEATS_SEPARATOR, Field};
use crate::tree::Tree;
use std::io::Write;
use tracing::{debug, trace};

/// Write a tree as one block of node lines followed by a blank line
pub fn write_tree<W: Write + ?Sized>(out: &mut W, tree: &Tree) -> Result<(), WriteError> {
    for id in 1..=tree.len() {
        let form = tree.form(id);
        let lemma = tree.lemma(id);
        let cpostag = tree.cpostag(id);
        let postag = tree.postag(id);
        let feats = tree.feats(id);
        let head = tree.head(id);
        let deprel = tree.deprel(id);

        let checked = Field::Form
            .check(form)
            .and_then(|_| Field::Lemma.check(lemma))
            .and_then(|_| Field::CPosTag.check(cpostag))
            .and_then(|_| Field::PosTag.check(postag))
            .and_then(|_| field::check_feats(feats))
            .and_then(|_| Field::DepRel.check(deprel));
        if let Err(error) = checked {
            debug!(node = id, %error, "refusing to write tree");
            return Err(error);
        }

        let lemma = if lemma.is_empty() { EMPTY } else { lemma };

        write!(out, "{}\t{}\t{}\t{}\t{}\t", id, form, lemma, cpostag, postag)?;
        write_feats(out, feats)?;
        writeln!(out, "\t{}\t{}\t{}\t{}", head, deprel, EMPTY, EMPTY)?;
    }

    out.write_all(b"\n")?;
    trace!(nodes = tree.len(), "wrote tree");
    Ok(())
}

/// Write each tree in turn, stopping at the first failure
pub fn write_trees<'a, W, I>(out: &mut W, trees: I) -> Result<usize, WriteError>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Tree>,
{
    let mut count = 0;
    for tree in trees {
        write_tree(out, tree)?;
        count += 1;
    }
    Ok(count)
}

fn write_feats<W: Write + ?Sized>(out: &mut W, feats: &[String]) -> std::io::Result<()> {
    let Some((first, rest)) = feats.split_first() else {
        return out.write_all(EMPTY.as_bytes());
    };

    out.write_all(first.as_bytes())?;
    let mut sep = [0; 4];
    let sep = FEATS_SEPARATOR.encode_utf8(&mut sep).as_bytes();
    for feat in rest {
        out.write_all(sep)?;
        out.write_all(feat.as_bytes())?;
    }
    Ok(())
}

/// Writes trees to an owned sink
///
/// # Examples
///
/// ```
/// use conll_trees::{ConllWriter, Node, Tree};
///
/// let tree: Tree = vec![Node::new("Hi", "", "UH", "UH", &[], 0, "root")]
///     .into_iter()
///     .collect();
///
/// let mut writer = ConllWriter::new(Vec::new());
/// writer.write_tree(&tree).unwrap();
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "1\tHi\t_\tUH\tUH\t_\t0\troot\t_\t_\n\n");
/// ```
#[derive(Debug)]
pub struct ConllWriter<W: Write> {
    out: W,
    trees_written: usize,
}

impl<W: Write> ConllWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            trees_written: 0,
        }
    }

    pub fn write_tree(&mut self, tree: &Tree) -> Result<(), WriteError> {
        write_tree(&mut self.out, tree)?;
        self.trees_written += 1;
        Ok(())
    }

    /// Write each tree in turn, stopping at the first failure
    pub fn write_trees<'a, I>(&mut self, trees: I) -> Result<(), WriteError>
    where
        I: IntoIterator<Item = &'a Tree>,
    {
        for tree in trees {
            self.write_tree(tree)?;
        }
        Ok(())
    }

    /// Number of complete trees written so far
    pub fn trees_written(&self) -> usize {
        self.trees_written
    }

    pub fn flush(&mut self) -> Result<(), WriteError> {
        Ok(self.out.flush()?)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
