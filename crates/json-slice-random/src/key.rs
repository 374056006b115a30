use rand::Rng;

/// Alphabet used for generated keys.
pub const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const SEGMENT_MIN: usize = 10;
const SEGMENT_MAX: usize = 12;

/// Random object key built from two base-36 segments of 10 to 12 digits each.
pub fn random_key<R: Rng>(rng: &mut R) -> String {
    let mut key = String::with_capacity(SEGMENT_MAX * 2);
    push_segment(rng, &mut key);
    push_segment(rng, &mut key);
    key
}

fn push_segment<R: Rng>(rng: &mut R, out: &mut String) {
    let len = rng.gen_range(SEGMENT_MIN..=SEGMENT_MAX);
    for _ in 0..len {
        out.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
}
