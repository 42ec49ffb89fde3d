use multitool_core::generate::lorem::{generate_lorem, LoremRequest, LoremUnit, LOREM_WORDS};
use multitool_core::generate::password::{generate_password, PasswordOptions};
use multitool_core::generate::quote::{random_quote, QUOTES};
use multitool_core::generate::random_number::{generate_numbers, RandomNumberRequest};
use multitool_core::generate::typing::{TypingSession, REFERENCE_TEXT};
use multitool_core::GenerateError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn digits_only(length: usize) -> PasswordOptions {
    PasswordOptions {
        length,
        uppercase: false,
        lowercase: false,
        digits: true,
        symbols: false,
    }
}

#[test]
fn digits_only_password_has_requested_length() {
    let mut rng = StdRng::seed_from_u64(2024);
    for length in [4, 12, 50] {
        let password = generate_password(&digits_only(length), &mut rng).unwrap();
        assert_eq!(password.len(), length);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn password_without_classes_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let options = PasswordOptions {
        digits: false,
        ..digits_only(12)
    };
    assert_eq!(
        generate_password(&options, &mut rng),
        Err(GenerateError::NoCharacterClass)
    );
}

#[test]
fn seeded_generation_is_reproducible() {
    let options = PasswordOptions::default();
    let first = generate_password(&options, &mut StdRng::seed_from_u64(9)).unwrap();
    let second = generate_password(&options, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(first, second);

    let a = generate_lorem(&LoremRequest::default(), &mut StdRng::seed_from_u64(9));
    let b = generate_lorem(&LoremRequest::default(), &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn lorem_paragraphs_are_separated_by_blank_lines() {
    let mut rng = StdRng::seed_from_u64(77);
    let text = generate_lorem(&LoremRequest::default(), &mut rng);
    let paragraphs: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 3);
    for paragraph in paragraphs {
        let sentences = paragraph.matches('.').count();
        assert!((3..=7).contains(&sentences));
        for word in paragraph.split(' ') {
            let bare = word.trim_end_matches('.').to_lowercase();
            assert!(LOREM_WORDS.contains(&bare.as_str()), "unexpected word {bare}");
        }
    }

    let words = generate_lorem(
        &LoremRequest {
            unit: LoremUnit::Words,
            amount: 5,
        },
        &mut rng,
    );
    assert_eq!(words.split(' ').count(), 5);
}

#[test]
fn random_numbers_respect_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let request = RandomNumberRequest {
        min: -5,
        max: 5,
        count: 40,
    };
    let numbers = generate_numbers(&request, &mut rng).unwrap();
    assert_eq!(numbers.len(), 40);
    assert!(numbers.iter().all(|n| (-5..=5).contains(n)));

    let inverted = RandomNumberRequest {
        min: 10,
        max: 1,
        count: 1,
    };
    assert!(matches!(
        generate_numbers(&inverted, &mut rng),
        Err(GenerateError::InvalidRange { min: 10, max: 1 })
    ));
}

#[test]
fn quote_is_drawn_from_the_static_list() {
    let mut rng = StdRng::seed_from_u64(8);
    let quote = random_quote(&mut rng);
    assert!(QUOTES.contains(&quote));
    assert!(quote.share_text().ends_with(&format!(" - {}", quote.author)));
}

#[test]
fn typing_reference_passage_scores_perfectly() {
    let mut session = TypingSession::default();
    assert_eq!(session.reference(), REFERENCE_TEXT);

    let mut typed = String::new();
    for (index, ch) in REFERENCE_TEXT.chars().enumerate() {
        typed.push(ch);
        session.update(&typed, 1_000 + index as u64 * 100);
    }

    let score = session.score().unwrap();
    assert_eq!(score.accuracy, 100);
    let words = REFERENCE_TEXT.split(' ').count() as f64;
    let minutes = (REFERENCE_TEXT.len() as f64 - 1.0) * 100.0 / 60_000.0;
    assert_eq!(score.wpm, (words / minutes).round() as u32);

    session.update("ignored after finish", 999_999);
    assert_eq!(session.input(), REFERENCE_TEXT);
}
