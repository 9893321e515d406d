use crate::mock::FixedBytes;
use crate::{
    DIGITS, Error, LOWERCASE, PasswordGenerator, PasswordPolicy, SYMBOLS, ThreadRandom, UPPERCASE,
    check_strength,
};
use std::collections::HashSet;

fn count_in(password: &str, class: &[u8]) -> usize {
    password.bytes().filter(|b| class.contains(b)).count()
}

#[test]
fn meets_every_class_minimum() {
    let generator = PasswordGenerator::new(ThreadRandom);
    let policy = PasswordPolicy::new(12, 2, 2, 2);
    for _ in 0..1_000 {
        let password = generator.generate(&policy).unwrap();
        assert_eq!(password.len(), 12);
        assert!(count_in(&password, UPPERCASE) >= 2, "{password}");
        assert!(count_in(&password, DIGITS) >= 2, "{password}");
        assert!(count_in(&password, SYMBOLS) >= 2, "{password}");
    }
}

#[test]
fn unrequested_classes_are_left_out() {
    let generator = PasswordGenerator::new(ThreadRandom);
    let policy = PasswordPolicy::new(64, 0, 3, 0);
    for _ in 0..200 {
        let password = generator.generate(&policy).unwrap();
        assert_eq!(count_in(&password, UPPERCASE), 0, "{password}");
        assert_eq!(count_in(&password, SYMBOLS), 0, "{password}");
        assert!(count_in(&password, DIGITS) >= 3);
        assert_eq!(
            count_in(&password, LOWERCASE) + count_in(&password, DIGITS),
            64
        );
    }
}

#[test]
fn lowercase_only_when_nothing_is_requested() {
    let generator = PasswordGenerator::new(ThreadRandom);
    let password = generator.generate(&PasswordPolicy::new(32, 0, 0, 0)).unwrap();
    assert_eq!(count_in(&password, LOWERCASE), 32);
}

#[test]
fn minimums_may_fill_the_whole_length() {
    let generator = PasswordGenerator::new(ThreadRandom);
    let password = generator.generate(&PasswordPolicy::new(6, 2, 2, 2)).unwrap();
    assert_eq!(count_in(&password, UPPERCASE), 2);
    assert_eq!(count_in(&password, DIGITS), 2);
    assert_eq!(count_in(&password, SYMBOLS), 2);
}

#[test]
fn zero_length_is_empty() {
    let generator = PasswordGenerator::new(ThreadRandom);
    assert_eq!(generator.generate(&PasswordPolicy::new(0, 0, 0, 0)).unwrap(), "");
}

#[test]
fn minimums_exceeding_length_are_rejected() {
    let generator = PasswordGenerator::new(ThreadRandom);
    assert_eq!(
        generator.generate(&PasswordPolicy::new(5, 2, 2, 2)),
        Err(Error::InvalidConfiguration {
            length: 5,
            required: 6
        })
    );
}

#[test]
fn overflowing_minimums_are_rejected() {
    let generator = PasswordGenerator::new(ThreadRandom);
    assert_eq!(
        generator.generate(&PasswordPolicy::new(usize::MAX, usize::MAX, 1, 0)),
        Err(Error::InvalidConfiguration {
            length: usize::MAX,
            required: usize::MAX
        })
    );
}

#[test]
fn guaranteed_characters_are_not_clustered() {
    let generator = PasswordGenerator::new(ThreadRandom);
    let policy = PasswordPolicy::new(8, 1, 0, 0);
    let positions: HashSet<usize> = (0..500)
        .map(|_| {
            let password = generator.generate(&policy).unwrap();
            password
                .bytes()
                .position(|b| b.is_ascii_uppercase())
                .unwrap()
        })
        .collect();
    assert_eq!(positions.len(), 8, "{positions:?}");
}

#[test]
fn deterministic_source_gives_a_deterministic_password() {
    // Every pick lands on index 0 and the shuffle rotates left by one.
    let generator = PasswordGenerator::new(FixedBytes(0));
    let password = generator.generate(&PasswordPolicy::new(5, 1, 1, 1)).unwrap();
    assert_eq!(password, "0!aaA");
}

#[test]
fn default_policy_matches_documented_values() {
    assert_eq!(PasswordPolicy::default(), PasswordPolicy::new(8, 1, 1, 1));
    assert_eq!(PasswordPolicy::default().alphabet().len(), 26 + 26 + 10 + 11);
}

#[test]
fn strength_of_empty_text_is_very_weak() {
    let strength = check_strength("", &PasswordPolicy::default());
    assert_eq!(strength.score, 0);
    assert_eq!(strength.label, "Very Weak");
}

#[test]
fn strength_reports_the_first_violation() {
    let policy = PasswordPolicy::default();
    let cases = [
        ("Ab1!", "Password must be at least 8 characters long"),
        ("abcdefg1!", "Password must contain 1 uppercase letter"),
        ("Abcdefgh!", "Password must contain 1 number"),
        ("Abcdefgh1", "Password must contain 1 special character"),
    ];
    for (text, label) in cases {
        let strength = check_strength(text, &policy);
        assert_eq!(strength.score, 1, "{text}");
        assert_eq!(strength.label, label);
    }
}

#[test]
fn strength_scores_compliant_passwords() {
    let lenient = PasswordPolicy::new(0, 0, 0, 0);
    let cases = [
        ("Abcdefg1!", 4, "Very Strong"),
        ("Abcdefg12", 3, "Strong"),
        ("abcdefg12", 2, "Medium"),
        ("abcdefgh", 1, "Weak"),
        ("abc", 0, "Very Weak"),
    ];
    for (text, score, label) in cases {
        let strength = check_strength(text, &lenient);
        assert_eq!(strength.score, score, "{text}");
        assert_eq!(strength.label, label);
        assert_eq!(strength.to_string(), format!("{label} ({score}/4)"));
    }
}

#[test]
fn strength_treats_non_ascii_as_special() {
    let strength = check_strength("Pässwort1", &PasswordPolicy::default());
    assert_eq!(strength.score, 4);
}

#[test]
fn generated_passwords_pass_their_own_policy() {
    let generator = PasswordGenerator::new(ThreadRandom);
    let policy = PasswordPolicy::new(16, 3, 3, 3);
    for _ in 0..100 {
        let password = generator.generate(&policy).unwrap();
        assert_eq!(check_strength(&password, &policy).score, 4);
    }
}
