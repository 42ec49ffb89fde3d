use multitool_core::text::{convert_case, text_stats, TextCase};

#[test]
fn statistics_for_a_short_essay() {
    let essay = "Rust is fast. It is also safe!\n\nOwnership keeps memory in check.";
    let stats = text_stats(essay);

    assert_eq!(stats.characters, essay.chars().count());
    assert_eq!(stats.words, 12);
    assert_eq!(stats.sentences, 3);
    assert_eq!(stats.paragraphs, 2);
    assert_eq!(stats.reading_minutes, 1);
    assert!((stats.average_words_per_sentence() - 4.0).abs() < 1e-9);
}

#[test]
fn empty_input_has_zero_counts() {
    let stats = text_stats("");
    assert_eq!(stats.words, 0);
    assert_eq!(stats.sentences, 0);
    assert_eq!(stats.average_characters_per_word(), 0.0);
}

#[test]
fn every_case_style() {
    let input = "the QUICK brown fox";
    let expected = [
        (TextCase::Upper, "THE QUICK BROWN FOX"),
        (TextCase::Lower, "the quick brown fox"),
        (TextCase::Title, "The Quick Brown Fox"),
        (TextCase::Sentence, "The quick brown fox"),
        (TextCase::Snake, "the_quick_brown_fox"),
        (TextCase::Kebab, "the-quick-brown-fox"),
    ];
    for (case, output) in expected {
        assert_eq!(convert_case(input, case), output, "{}", case.label());
    }
    assert_eq!(convert_case("make it camel", TextCase::Camel), "makeItCamel");
    assert_eq!(convert_case("make it pascal", TextCase::Pascal), "MakeItPascal");
}
