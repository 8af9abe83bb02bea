use bitsieve::{BitmapContext, DigestStore, HashConfig, SessionOptions};
use proptest::prelude::*;

fn options() -> SessionOptions {
    SessionOptions {
        bitmap_min: 2,
        bitmap_max: 10,
        quiet: true,
        ..SessionOptions::default()
    }
}

fn store_of(digests: &[[u32; 4]]) -> DigestStore {
    let mut store = DigestStore::new(4);
    for digest in digests {
        store.push(digest);
    }
    store
}

proptest! {
    #[test]
    fn no_false_negatives(digests in proptest::collection::vec(any::<[u32; 4]>(), 0..200)) {
        let config = HashConfig::new(4, [0, 1, 2, 3]).unwrap();
        let ctx = BitmapContext::build(&options(), &config, &store_of(&digests)).unwrap();
        prop_assert!(ctx.bits() >= 2 && ctx.bits() < 10);
        for digest in &digests {
            prop_assert!(ctx.may_match(*digest));
        }
    }

    #[test]
    fn rebuilds_are_bit_identical(digests in proptest::collection::vec(any::<[u32; 4]>(), 1..100)) {
        let config = HashConfig::new(4, [0, 1, 2, 3]).unwrap();
        let store = store_of(&digests);
        let first = BitmapContext::build(&options(), &config, &store).unwrap();
        let second = BitmapContext::build(&options(), &config, &store).unwrap();
        prop_assert_eq!(first.bits(), second.bits());
        prop_assert_eq!(first.stage1(), second.stage1());
        prop_assert_eq!(first.stage2(), second.stage2());
    }
}
