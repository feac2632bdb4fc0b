//! Dependency tree data structures
//!
//! A tree is an ordered sequence of nodes numbered 1..N. Node 0 is the
//! implicit root that HEAD values point at; it is never stored.

use crate::error::TreeError;

/// 1-based index of a node within its tree
pub type NodeId = usize;

/// A single token line of a dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub form: String,
    /// Empty string when the lemma is unknown
    pub lemma: String,
    pub cpostag: String,
    pub postag: String,
    pub feats: Vec<String>,
    /// Governor index, 0 for the root
    pub head: i64,
    pub deprel: String,
}

impl Node {
    /// Create a new node with the given attributes
    pub fn new(
        form: &str,
        lemma: &str,
        cpostag: &str,
        postag: &str,
        feats: &[&str],
        head: i64,
        deprel: &str,
    ) -> Self {
        Self {
            form: form.to_string(),
            lemma: lemma.to_string(),
            cpostag: cpostag.to_string(),
            postag: postag.to_string(),
            feats: feats.iter().map(|f| f.to_string()).collect(),
            head,
            deprel: deprel.to_string(),
        }
    }
}

/// A dependency tree (sentence)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build a tree from seven parallel columns, one entry per node.
    ///
    /// All columns must have the same length as `forms`.
    pub fn from_columns(
        forms: Vec<String>,
        lemmas: Vec<String>,
        cpostags: Vec<String>,
        postags: Vec<String>,
        feats: Vec<Vec<String>>,
        heads: Vec<i64>,
        deprels: Vec<String>,
    ) -> Result<Self, TreeError> {
        let expected = forms.len();
        let lengths = [
            ("lemmas", lemmas.len()),
            ("cpostags", cpostags.len()),
            ("postags", postags.len()),
            ("feats", feats.len()),
            ("heads", heads.len()),
            ("deprels", deprels.len()),
        ];
        for (column, found) in lengths {
            if found != expected {
                return Err(TreeError::ColumnLength {
                    column,
                    expected,
                    found,
                });
            }
        }

        let nodes = forms
            .into_iter()
            .zip(lemmas)
            .zip(cpostags)
            .zip(postags)
            .zip(feats)
            .zip(heads)
            .zip(deprels)
            .map(
                |((((((form, lemma), cpostag), postag), feats), head), deprel)| Node {
                    form,
                    lemma,
                    cpostag,
                    postag,
                    feats,
                    head,
                    deprel,
                },
            )
            .collect();

        Ok(Self { nodes })
    }

    /// Append a node; returns its 1-based id
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by its 1-based id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        id.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    // Per-field accessors panic on an out-of-range id, like slice indexing.

    pub fn form(&self, id: NodeId) -> &str {
        &self[id].form
    }

    pub fn lemma(&self, id: NodeId) -> &str {
        &self[id].lemma
    }

    pub fn cpostag(&self, id: NodeId) -> &str {
        &self[id].cpostag
    }

    pub fn postag(&self, id: NodeId) -> &str {
        &self[id].postag
    }

    pub fn feats(&self, id: NodeId) -> &[String] {
        &self[id].feats
    }

    pub fn head(&self, id: NodeId) -> i64 {
        self[id].head
    }

    pub fn deprel(&self, id: NodeId) -> &str {
        &self[id].deprel
    }
}

impl std::ops::Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.node(id) {
            Some(node) => node,
            None => panic!("node id {} out of range 1..={}", id, self.nodes.len()),
        }
    }
}

impl FromIterator<Node> for Tree {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
