use bitsieve::{BitmapContext, DigestStore, HashConfig, SessionOptions};

fn options(min: u32, max: u32) -> SessionOptions {
    SessionOptions {
        bitmap_min: min,
        bitmap_max: max,
        quiet: true,
        ..SessionOptions::default()
    }
}

fn four_word_config() -> HashConfig {
    HashConfig::new(4, [0, 1, 2, 3]).unwrap()
}

#[test]
fn two_digest_scenario_populates_expected_slots() {
    let mut store = DigestStore::new(4);
    store.push(&[0x0000_0001; 4]);
    store.push(&[0x0000_0021; 4]);
    let ctx = BitmapContext::build(&options(2, 4), &four_word_config(), &store).unwrap();

    // two digests fit in four slots, so the narrowest width is taken
    assert_eq!(ctx.bits(), 2);
    assert_eq!(ctx.mask(), 3);
    assert_eq!(ctx.size_bytes(), 16);

    // word 1: slot (1 >> 5) & 3 = 0, bit 1 << 1; word 33: slot 1, same bit
    for table in ctx.stage1() {
        assert_eq!(table.as_slice(), &[0b10u32, 0b10, 0, 0]);
    }
    // at shift 13 both words fall into slot 0
    for table in ctx.stage2() {
        assert_eq!(table.as_slice(), &[0b10u32, 0, 0, 0]);
    }
}

#[test]
fn saturating_store_forces_widest_table() {
    // Every digest hits the same (slot, bit) pair in every channel at
    // any width, so no trial width stays under budget.
    let mut store = DigestStore::new(4);
    for _ in 0..16 {
        store.push(&[0u32; 4]);
    }
    let ctx = BitmapContext::build(&options(2, 4), &four_word_config(), &store).unwrap();
    assert_eq!(ctx.bits(), 3);
}

#[test]
fn crowded_narrow_width_is_skipped_for_a_clean_wider_one() {
    // Word k carries bit index k&3 and slot seed k for both shifts. At
    // 2 bits, digests k and k+4 share slot and bit in every channel
    // and the budget blows; at 3 bits all eight slots are distinct.
    let mut store = DigestStore::new(4);
    for k in 0..8u32 {
        let word = (k & 3) | (k << 5) | (k << 13);
        store.push(&[word; 4]);
    }
    let ctx = BitmapContext::build(&options(2, 5), &four_word_config(), &store).unwrap();
    assert_eq!(ctx.bits(), 3);
}
