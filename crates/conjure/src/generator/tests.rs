use crate::mock::{CycleBytes, FixedBytes, FixedTime, StepTime};
use crate::{
    DEFAULT_NUMERIC_ID_LEN, MonotonicClock, NumericIdGenerator, ThreadRandom, Uuid, UuidGenerator,
    sub_millisecond_fraction,
};
use std::collections::HashSet;

const SCENARIO_MILLIS: u64 = 1_739_566_015_817;

fn is_canonical(text: &str) -> bool {
    text.len() == 36
        && text.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_digit() || ('a'..='f').contains(&c),
        })
}

#[test]
fn v4_sets_version_and_variant_over_any_bytes() {
    for byte in [0x00, 0x5A, 0xFF] {
        let generator = UuidGenerator::new(FixedTime { nanos: 0 }, FixedBytes(byte));
        let text = generator.v4().to_string();
        assert!(is_canonical(&text), "{text}");
        assert_eq!(&text[14..15], "4");
        assert!(matches!(&text[19..20], "8" | "9" | "a" | "b"), "{text}");
    }
}

#[test]
fn v4_keeps_every_other_bit_random() {
    let generator = UuidGenerator::new(FixedTime { nanos: 0 }, FixedBytes(0xFF));
    assert_eq!(
        generator.v4().to_string(),
        "ffffffff-ffff-4fff-bfff-ffffffffffff"
    );
    let generator = UuidGenerator::new(FixedTime { nanos: 0 }, FixedBytes(0x00));
    assert_eq!(
        generator.v4().to_string(),
        "00000000-0000-4000-8000-000000000000"
    );
}

#[test]
fn v4_values_are_distinct() {
    let generator = UuidGenerator::new(MonotonicClock::default(), ThreadRandom);
    let seen: HashSet<Uuid> = (0..10_000).map(|_| generator.v4()).collect();
    assert_eq!(seen.len(), 10_000);
}

#[test]
fn v7_packs_the_clock_reading() {
    let time = FixedTime::from_millis(SCENARIO_MILLIS, 500_000);
    let generator = UuidGenerator::new(time, FixedBytes(0));
    let id = generator.v7();
    assert_eq!(id.version(), 7);
    assert_eq!(id.variant(), 0b10);
    assert_eq!(id.timestamp(), SCENARIO_MILLIS);
    assert_eq!(id.fraction(), 2048);
    assert_eq!(id.to_string(), "01950636-e549-7800-8000-000000000000");
}

#[test]
fn v7_random_tail_comes_from_the_entropy_source() {
    let rng = CycleBytes::new([0xAB]);
    let generator = UuidGenerator::new(FixedTime::from_millis(0, 0), &rng);
    let id = generator.v7();
    assert_eq!(rng.consumed(), 8);
    assert_eq!(id.to_string(), "00000000-0000-7000-abab-abababababab");
}

#[test]
fn v7_sorts_within_one_millisecond() {
    let time = StepTime::new(vec![
        u128::from(SCENARIO_MILLIS) * 1_000_000 + 1_000,
        u128::from(SCENARIO_MILLIS) * 1_000_000 + 400_000,
        u128::from(SCENARIO_MILLIS) * 1_000_000 + 999_999,
        u128::from(SCENARIO_MILLIS + 1) * 1_000_000,
    ]);
    // The random tail is maximal so only the prefix can order the ids.
    let generator = UuidGenerator::new(time, FixedBytes(0xFF));
    let ids: Vec<Uuid> = (0..4).map(|_| generator.v7()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:#?}");
    assert!(ids.windows(2).all(|w| w[0].to_string() < w[1].to_string()));
}

#[test]
fn v7_decodes_in_immediate_succession() {
    let generator = UuidGenerator::new(MonotonicClock::default(), ThreadRandom);
    let mut last = generator.v7().datetime().unwrap();
    for _ in 0..1_000 {
        let next = generator.v7().datetime().unwrap();
        assert!(next >= last);
        last = next;
    }
}

#[test]
fn fraction_scales_into_4096_ticks() {
    assert_eq!(sub_millisecond_fraction(0), 0);
    assert_eq!(sub_millisecond_fraction(244), 0);
    assert_eq!(sub_millisecond_fraction(245), 1);
    assert_eq!(sub_millisecond_fraction(500_000), 2048);
    assert_eq!(sub_millisecond_fraction(999_999), 4095);
    assert_eq!(sub_millisecond_fraction(1_000_000), 0);
    assert_eq!(sub_millisecond_fraction(7_000_250_000), 1024);
}

#[test]
fn numeric_id_starts_with_the_timestamp() {
    let generator = NumericIdGenerator::new(FixedTime::from_millis(SCENARIO_MILLIS, 0), FixedBytes(3));
    let id = generator.generate(DEFAULT_NUMERIC_ID_LEN).unwrap();
    assert_eq!(id, "1739566015817333333");
}

#[test]
fn numeric_id_has_exactly_the_requested_length() {
    let generator = NumericIdGenerator::new(MonotonicClock::default(), ThreadRandom);
    for length in [0, 1, 5, 13, 19, 40] {
        let id = generator.generate(length).unwrap();
        assert_eq!(id.len(), length);
        assert!(id.bytes().all(|b| b.is_ascii_digit()), "{id}");
    }
}

#[test]
fn numeric_id_truncates_the_timestamp() {
    let generator = NumericIdGenerator::new(FixedTime::from_millis(SCENARIO_MILLIS, 0), FixedBytes(0));
    assert_eq!(generator.generate(4).unwrap(), "1739");
    assert_eq!(generator.generate(0).unwrap(), "");
}
