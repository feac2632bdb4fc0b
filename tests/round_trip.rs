use conll_trees::{ConllReader, ConllWriter, Node, Tree, WriteError, write_tree};

fn read_back(bytes: &[u8]) -> Vec<Tree> {
    let text = std::str::from_utf8(bytes).unwrap();
    ConllReader::from_string(text)
        .collect::<Result<_, _>>()
        .unwrap()
}

fn sample_tree() -> Tree {
    vec![
        Node::new("Colorless", "colorless", "JJ", "JJ", &["Degree=Pos"], 3, "amod"),
        Node::new("green", "", "JJ", "JJ", &[], 3, "amod"),
        Node::new("ideas", "idea", "NNS", "NNS", &["Number=Plur"], 4, "nsubj"),
        Node::new("sleep", "sleep", "VBP", "VBP", &["Tense=Pres", "Mood=Ind"], 0, "root"),
        Node::new("furiously", "", "RB", "RB", &[], 4, "advmod"),
        Node::new("_", "", "_", "_", &[], 4, "_"),
        Node::new("été", "être", "V", "VPP", &["Ñ=ü"], 4, "dep"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_round_trip() {
    let tree = sample_tree();

    let mut out = Vec::new();
    write_tree(&mut out, &tree).unwrap();
    let trees = read_back(&out);

    assert_eq!(trees, vec![tree]);
}

#[test]
fn test_round_trip_field_by_field() {
    let tree = sample_tree();

    let mut out = Vec::new();
    write_tree(&mut out, &tree).unwrap();
    let back = read_back(&out).remove(0);

    assert_eq!(back.len(), tree.len());
    for id in 1..=tree.len() {
        assert_eq!(back.form(id), tree.form(id));
        assert_eq!(back.lemma(id), tree.lemma(id));
        assert_eq!(back.cpostag(id), tree.cpostag(id));
        assert_eq!(back.postag(id), tree.postag(id));
        assert_eq!(back.feats(id), tree.feats(id));
        assert_eq!(back.head(id), tree.head(id));
        assert_eq!(back.deprel(id), tree.deprel(id));
    }
}

#[test]
fn test_empty_lemma_and_feats_survive() {
    let tree: Tree = vec![Node::new("x", "", "N", "N", &[], 0, "root")]
        .into_iter()
        .collect();

    let mut out = Vec::new();
    write_tree(&mut out, &tree).unwrap();
    assert_eq!(out, b"1\tx\t_\tN\tN\t_\t0\troot\t_\t_\n\n");

    let back = read_back(&out).remove(0);
    assert_eq!(back.lemma(1), "");
    assert!(back.feats(1).is_empty());
}

#[test]
fn test_many_trees_round_trip() {
    let trees: Vec<Tree> = (1..=5)
        .map(|n| {
            (1..=n)
                .map(|i| {
                    let form = format!("w{}", i);
                    Node::new(&form, "", "N", "N", &[], i as i64 - 1, "dep")
                })
                .collect()
        })
        .collect();

    let mut writer = ConllWriter::new(Vec::new());
    writer.write_trees(&trees).unwrap();
    assert_eq!(writer.trees_written(), 5);

    assert_eq!(read_back(&writer.into_inner()), trees);
}

#[test]
fn test_invalid_tree_is_not_completed() {
    let tree: Tree = vec![
        Node::new("fine", "", "N", "N", &[], 0, "root"),
        Node::new("tab\there", "", "N", "N", &[], 1, "dep"),
    ]
    .into_iter()
    .collect();

    let mut out = Vec::new();
    let err = write_tree(&mut out, &tree).unwrap_err();
    assert!(matches!(err, WriteError::InvalidField { .. }));

    // Only the valid first node was written, without the closing blank line
    assert_eq!(out, b"1\tfine\t_\tN\tN\t_\t0\troot\t_\t_\n");
}
