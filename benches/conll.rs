use conll_trees::{ConllReader, Tree, write_tree};
use divan::{Bencher, black_box};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    divan::main();
}

/// Synthetic treebank: `sentences` trees of 20 nodes each
fn treebank(sentences: usize) -> String {
    let mut text = String::new();
    for s in 0..sentences {
        text.push_str(&format!("# sent_id = {}\n", s + 1));
        for i in 1..=20 {
            let lemma = if i % 3 == 0 { "_".to_string() } else { format!("lemma{}", i) };
            let feats = if i % 2 == 0 { "Number=Sing|Case=Nom" } else { "_" };
            text.push_str(&format!(
                "{}\tword{}\t{}\tNN\tNN\t{}\t{}\tdep\t_\t_\n",
                i,
                i,
                lemma,
                feats,
                i - 1
            ));
        }
        text.push('\n');
    }
    text
}

#[divan::bench(args = [100, 1000])]
fn read(bencher: Bencher, sentences: usize) {
    let text = treebank(sentences);
    bencher.bench_local(|| {
        for result in ConllReader::from_string(black_box(&text)) {
            black_box(result.unwrap());
        }
    });
}

#[divan::bench(args = [100, 1000])]
fn write(bencher: Bencher, sentences: usize) {
    let trees: Vec<Tree> = ConllReader::from_string(&treebank(sentences))
        .collect::<Result<_, _>>()
        .unwrap();
    bencher.bench_local(|| {
        let mut out = Vec::new();
        for tree in &trees {
            write_tree(&mut out, black_box(tree)).unwrap();
        }
        black_box(out);
    });
}
