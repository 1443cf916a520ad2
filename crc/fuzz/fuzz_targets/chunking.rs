#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mlib_crc::{checksum, init, result, update, Crc32};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    data: Vec<u8>,
    splits: Vec<u16>,
}

fn fuzz(input: FuzzInput) {
    let expected = checksum(&input.data);
    assert_eq!(expected, crc32fast::hash(&input.data));

    // Fold the same bytes in arbitrary chunks
    let mut crc = 0;
    init(&mut crc);
    let mut hasher = Crc32::new();
    let mut rest = &input.data[..];
    for split in input.splits {
        let at = split as usize % (rest.len() + 1);
        let (chunk, tail) = rest.split_at(at);
        update(chunk, &mut crc);
        hasher.update(chunk);
        rest = tail;
    }
    update(rest, &mut crc);
    hasher.update(rest);

    assert_eq!(result(&mut crc), expected);
    assert_eq!(hasher.finalize(), expected);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
