use divan::{black_box, Bencher};
use json_slice::{Decoder, SchemaNode};
use serde_json::Value;

fn main() {
    divan::main();
}

fn chain(depth: usize) -> (Decoder, String) {
    let node = SchemaNode::chain((0..depth).map(|i| format!("key{i}")));
    let text = node.canonical_instance().to_string();
    (Decoder::build(&node), text)
}

fn chain_over_fan(depth: usize) -> (Decoder, String) {
    let fan = SchemaNode::object((0..4).map(|i| (format!("leaf{i}"), SchemaNode::Leaf)));
    let node = (0..depth).fold(fan, |child, i| SchemaNode::object([(format!("key{i}"), child)]));
    let text = node.canonical_instance().to_string();
    (Decoder::build(&node), text)
}

#[divan::bench(args = [1, 4, 16, 64])]
fn sliced_chain(bencher: Bencher, depth: usize) {
    let (decoder, text) = chain(depth);
    bencher.bench(|| decoder.decode(black_box(&text)));
}

#[divan::bench(args = [1, 4, 16, 64])]
fn generic_chain(bencher: Bencher, depth: usize) {
    let (_, text) = chain(depth);
    bencher.bench(|| serde_json::from_str::<Value>(black_box(&text)));
}

#[divan::bench(args = [1, 4, 16])]
fn sliced_chain_over_fan(bencher: Bencher, depth: usize) {
    let (decoder, text) = chain_over_fan(depth);
    bencher.bench(|| decoder.decode(black_box(&text)));
}

#[divan::bench(args = [1, 4, 16])]
fn generic_chain_over_fan(bencher: Bencher, depth: usize) {
    let (_, text) = chain_over_fan(depth);
    bencher.bench(|| serde_json::from_str::<Value>(black_box(&text)));
}
