use std::str::FromStr;

use assert_matches::assert_matches;

use super::*;
use crate::daifugo::Kind;

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| Card::from_str(c).unwrap())
        .collect()
}

/// Returns a table with the specified cards on the field, played by seat 0.
fn table_with_field(rules: Rules, revolution: bool, field: &str) -> Table {
    let mut table = Table::new(rules).with_revolution(revolution);
    if !field.is_empty() {
        table.play(&cards(field), Seat::new(0)).unwrap();
    }
    table
}

#[test]
fn test_can_play() {
    struct Case {
        field: &'static str,
        revolution: bool,
        cards: &'static str,
        expect: bool,
    }

    fn case(field: &'static str, cards: &'static str, expect: bool) -> Case {
        Case {
            field,
            revolution: false,
            cards,
            expect,
        }
    }

    let rules = Rules {
        eight_cut: false,
        ..Rules::default()
    };
    let cases = [
        case("", "3S", true),
        case("", "3S 3H", true),
        case("", "3S 4H", false),
        case("", "", false),
        case("5S", "6S", true),
        case("5S", "5H", false),
        case("5S", "4H", false),
        case("5S", "X1", true),
        case("5S", "6S 6H", false),
        case("5S 5H", "6S 6H", true),
        case("5S 5H", "6S X1", true),
        case("5S 5H", "6S 6H 6D", false),
        case("2S", "X1", true),
        case("X1", "X2", false),
        case("3S 4S 5S", "4H 5H 6H", true),
        case("3S 4S 5S", "4H 5H 6H 7H", false),
        case("3S 4S 5S", "3H 4H 5H", false),
        Case {
            revolution: true,
            ..case("5S", "4H", true)
        },
        Case {
            revolution: true,
            ..case("5S", "6S", false)
        },
        Case {
            revolution: true,
            ..case("5S", "X1", false)
        },
    ];
    for case in cases {
        let table = table_with_field(rules, case.revolution, case.field);
        let got = table.can_play(&cards(case.cards));
        assert_eq!(
            got, case.expect,
            "{:?} onto {:?} (revolution: {})",
            case.cards, case.field, case.revolution
        );
    }
}

#[test]
fn test_revolution_antisymmetry() {
    let deck = crate::daifugo::create_deck(false);
    let rules = Rules {
        eight_cut: false,
        ..Rules::default()
    };
    for &a in deck.iter() {
        for &b in deck.iter().filter(|b| b.rank() != a.rank()) {
            let normal = table_with_field(rules, false, &a.to_string());
            let inverted = table_with_field(rules, true, &a.to_string());
            assert_ne!(normal.can_play(&[b]), inverted.can_play(&[b]), "{b} onto {a}");
        }
    }
}

#[test]
fn test_eight_cut() {
    let mut table = table_with_field(Rules::default(), false, "5S");
    let outcome = table.play(&cards("8H"), Seat::new(1)).unwrap();
    assert!(outcome.eight_cut);
    assert_eq!(table.field(), None);
    assert_eq!(table.last_player(), Some(Seat::new(1)));

    let mut table = table_with_field(Rules::default(), false, "");
    let outcome = table.play(&cards("6S 7S 8S"), Seat::new(2)).unwrap();
    assert!(outcome.eight_cut);
    assert_eq!(table.field(), None);

    let rules = Rules {
        eight_cut: false,
        ..Rules::default()
    };
    let mut table = table_with_field(rules, false, "5S");
    let outcome = table.play(&cards("8H"), Seat::new(1)).unwrap();
    assert!(!outcome.eight_cut);
    assert_eq!(table.field().map(|f| f.kind()), Some(Kind::Single));
}

#[test]
fn test_revolution() {
    let mut table = Table::new(Rules::default());
    let outcome = table.play(&cards("5S 5H 5D 5C"), Seat::new(0)).unwrap();
    assert!(outcome.revolution);
    assert!(table.is_revolution());

    // The field is judged under the new ranking.
    assert!(!table.can_play(&cards("6S 6H 6D 6C")));
    assert!(table.can_play(&cards("4S 4H 4D 4C")));
    let outcome = table.play(&cards("4S 4H 4D 4C"), Seat::new(1)).unwrap();
    assert!(outcome.revolution);
    assert!(!table.is_revolution());

    let mut table = Table::new(Rules::default());
    let outcome = table.play(&cards("9S TS JS QS KS"), Seat::new(0)).unwrap();
    assert!(outcome.revolution);
    assert!(table.is_revolution());

    let rules = Rules {
        revolution: false,
        ..Rules::default()
    };
    let mut table = Table::new(rules);
    let outcome = table.play(&cards("5S 5H 5D 5C"), Seat::new(0)).unwrap();
    assert!(!outcome.revolution);
    assert!(!table.is_revolution());
}

#[test]
fn test_spade_three_return() {
    let mut table = table_with_field(Rules::default(), false, "X1");
    assert!(!table.can_play(&cards("3H")));
    let outcome = table.play(&cards("3S"), Seat::new(1)).unwrap();
    assert!(outcome.spade3_return);

    // Only a single joker can be countered.
    let table = table_with_field(Rules::default(), false, "X1 X2");
    assert!(!table.can_play(&cards("3S 3H")));

    // Beating an ordinary single with the spade-3 isn't a counter.
    let mut table = table_with_field(Rules::default(), true, "5S");
    let outcome = table.play(&cards("3S"), Seat::new(1)).unwrap();
    assert!(!outcome.spade3_return);

    // Under revolution the joker is the weakest card, so the spade-3 beats it outright.
    let mut table = table_with_field(Rules::default(), true, "X1");
    let outcome = table.play(&cards("3S"), Seat::new(1)).unwrap();
    assert!(!outcome.spade3_return);
    assert!(table.field().is_some());

    let rules = Rules {
        spade3_return: false,
        ..Rules::default()
    };
    let mut table = table_with_field(rules, false, "X1");
    let err = table.play(&cards("3S"), Seat::new(1)).unwrap_err();
    assert_matches!(err, PlayerError::IllegalPlay(Combination::Single { .. }));
}

#[test]
fn test_rejected_play_leaves_table_unchanged() {
    let mut table = table_with_field(Rules::default(), false, "9S");
    table.pass();

    let err = table.play(&cards("5S"), Seat::new(2)).unwrap_err();
    assert_matches!(err, PlayerError::IllegalPlay(_));
    let err = table.play(&cards("5S 6H"), Seat::new(2)).unwrap_err();
    assert_matches!(err, PlayerError::InvalidCombination);
    let err = table.play(&[], Seat::new(2)).unwrap_err();
    assert_matches!(err, PlayerError::EmptyPlay);

    assert_eq!(table.field().map(|f| f.cards().to_vec()), Some(cards("9S")));
    assert_eq!(table.pass_count(), 1);
    assert_eq!(table.last_player(), Some(Seat::new(0)));
}

#[test]
fn test_pass_and_clear() {
    let mut table = table_with_field(Rules::default(), false, "9S");
    assert!(!table.should_clear_field(4));
    table.pass();
    table.pass();
    assert!(!table.should_clear_field(4));
    assert!(table.should_clear_field(3));
    table.pass();
    assert!(table.should_clear_field(4));

    table.clear_field();
    assert_eq!(table.field(), None);
    assert_eq!(table.pass_count(), 3);
    table.reset_passes();
    assert_eq!(table.pass_count(), 0);

    // A new play resets the pass count.
    table.pass();
    table.play(&cards("3S"), Seat::new(1)).unwrap();
    assert_eq!(table.pass_count(), 0);
}

#[test]
fn test_playable_hands() {
    let hand = cards("3S 4S 5S 5H 5D X1");

    let table = Table::new(Rules::default());
    let playable = table.playable_hands(&hand);
    let count = |kind| playable.iter().filter(|c| c.kind() == kind).count();
    assert_eq!(count(Kind::Single), 6);
    assert_eq!(count(Kind::Pair), 3);
    assert_eq!(count(Kind::Triple), 1);
    assert_eq!(count(Kind::Quad), 0);
    assert_eq!(count(Kind::Sequence), 1);
    assert_eq!(playable.len(), 11);

    let rules = Rules {
        stairs: false,
        ..Rules::default()
    };
    let table = Table::new(rules);
    assert_eq!(table.playable_hands(&hand).len(), 10);

    let table = table_with_field(Rules::default(), false, "5C");
    let playable = table.playable_hands(&hand);
    assert_eq!(playable.len(), 1);
    assert!(playable[0].is_joker_single());

    let table = table_with_field(Rules::default(), false, "4H 4D");
    let playable = table.playable_hands(&hand);
    assert_eq!(playable.len(), 3);
    assert!(playable.iter().all(|c| c.kind() == Kind::Pair));
}

#[test]
fn test_playable_hands_runs() {
    let hand = cards("3H 4H 5H 6H 9H");
    let table = Table::new(Rules::default());
    let runs: Vec<_> = table
        .playable_hands(&hand)
        .into_iter()
        .filter(|c| c.kind() == Kind::Sequence)
        .map(|c| c.cards().to_vec())
        .collect();
    assert_eq!(
        runs,
        vec![cards("3H 4H 5H"), cards("3H 4H 5H 6H"), cards("4H 5H 6H")]
    );
}

#[test]
fn test_titles() {
    let titles = |n| (0..n).map(|i| Title::for_position(i, n)).collect::<Vec<_>>();
    assert_eq!(
        titles(4),
        vec![
            Title::Daifugo,
            Title::Fugo,
            Title::Hinmin,
            Title::Daihinmin
        ]
    );
    assert_eq!(
        titles(3),
        vec![Title::Daifugo, Title::Heimin, Title::Daihinmin]
    );
    assert_eq!(titles(5), vec![Title::Heimin; 5]);
}
