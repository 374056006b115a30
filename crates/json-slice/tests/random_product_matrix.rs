use json_slice::{
    assert_output_same, calculate_length, compile, infer_schema, json_to_schema, Decoder,
};
use json_slice_random::{seeded_rng, RandomDocument, RandomDocumentOptions};
use serde_json::Value;

fn options_matrix() -> Vec<RandomDocumentOptions> {
    let mut out = Vec::new();
    for ceil in 0..=6 {
        for single_branch in [true, false] {
            out.push(RandomDocumentOptions { ceil, single_branch });
        }
    }
    out
}

#[test]
fn inferred_schema_predicts_product_length_matrix() {
    for (seed, opts) in options_matrix().into_iter().enumerate() {
        let mut rng = seeded_rng(Some(seed as u64));
        let product = RandomDocument::generate(&mut rng, &opts);
        let text = serde_json::to_string(&product).unwrap();
        let schema = json_to_schema(&product).unwrap();
        assert_eq!(calculate_length(&schema).unwrap(), text.len(), "{opts:?}");
    }
}

#[test]
fn compiled_product_decoder_matches_generic_matrix() {
    for (seed, opts) in options_matrix().into_iter().enumerate() {
        let mut rng = seeded_rng(Some(1_000 + seed as u64));
        let product = RandomDocument::generate(&mut rng, &opts);
        let text = serde_json::to_string(&product).unwrap();
        let decoder = compile(&json_to_schema(&product).unwrap()).unwrap();

        let expected: Value = serde_json::from_str(&text).unwrap();
        let actual = decoder.decode(&text).unwrap();
        assert_output_same(&expected, &actual).unwrap();
    }
}

#[test]
fn product_decoder_shape_follows_branching() {
    let mut rng = seeded_rng(Some(5));

    // single-key root over a four-key level
    let single = RandomDocument::generate(&mut rng, &RandomDocumentOptions::default());
    let decoder = Decoder::build(&infer_schema(&single).unwrap());
    assert_eq!(decoder.chain_depth(), 1);

    let multi = RandomDocument::generate(
        &mut rng,
        &RandomDocumentOptions {
            ceil: 5,
            single_branch: false,
        },
    );
    assert_eq!(Decoder::build(&infer_schema(&multi).unwrap()), Decoder::Generic);

    let shallow = RandomDocument::generate(
        &mut rng,
        &RandomDocumentOptions {
            ceil: 1,
            single_branch: true,
        },
    );
    let decoder = Decoder::build(&infer_schema(&shallow).unwrap());
    assert_eq!(decoder.chain_depth(), 1);
    assert!(decoder.is_specialized());
}

#[test]
fn one_decoder_serves_many_instances_of_its_shape() {
    let mut rng = seeded_rng(Some(31));
    let template = RandomDocument::generate(
        &mut rng,
        &RandomDocumentOptions {
            ceil: 2,
            single_branch: true,
        },
    );
    let decoder = compile(&json_to_schema(&template).unwrap()).unwrap();

    // same shape, same keys: every serialization is byte-identical
    for _ in 0..10 {
        let text = serde_json::to_string(&template).unwrap();
        assert_eq!(decoder.decode(&text).unwrap(), template);
    }
}
