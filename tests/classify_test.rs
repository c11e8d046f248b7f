use dubs_roller::{classify, Die, RollConfig, RollSet, Tier};
use rand::{rngs::StdRng, SeedableRng};

fn dice(pairs: &[(char, u32)]) -> Vec<Die> {
    pairs.iter().map(|&(l, v)| Die::new(l, v)).collect()
}

fn tier(pairs: &[(char, u32)]) -> Tier {
    classify(&dice(pairs)).tier()
}

#[test]
fn test_priority() {
    assert_eq!(tier(&[('Z', 3), ('Y', 3), ('X', 3), ('W', 3)]), Tier::Quads);
    assert_eq!(tier(&[('Z', 3), ('Y', 3), ('X', 3), ('W', 5)]), Tier::Trips);
    assert_eq!(tier(&[('Z', 3), ('Y', 3), ('X', 1), ('W', 5)]), Tier::Dubs);
    assert_eq!(tier(&[('Z', 3), ('Y', 5)]), Tier::None);
}

#[test]
fn test_only_designated_labels_count() {
    let pairs = [
        ('A', 5),
        ('B', 5),
        ('C', 5),
        ('Z', 1),
        ('Y', 2),
        ('X', 3),
        ('W', 4),
    ];
    let res = classify(&dice(&pairs));

    assert_eq!(res.tier(), Tier::None);
    assert!(res.highlighted().is_empty());
}

#[test]
fn test_order_does_not_matter() {
    let mut ordered = dice(&[('Z', 2), ('Y', 2), ('X', 2), ('W', 6), ('V', 2)]);
    let expected = classify(&ordered);
    assert_eq!(expected.tier(), Tier::Trips);

    for _ in 0..ordered.len() {
        ordered.rotate_left(1);
        assert_eq!(classify(&ordered), expected);

        let reversed: Vec<Die> = ordered.iter().rev().copied().collect();
        assert_eq!(classify(&reversed), expected);
    }
}

#[test]
fn test_quads_scenario() {
    // four fair d6 rolled, then forced to 4, 4, 4, 4
    let config = RollConfig::with_sides(6, false).unwrap();
    let rolled = RollSet::roll(4, &config, &mut StdRng::seed_from_u64(1)).unwrap();
    let forced = RollSet::from_dice(rolled.dice().iter().map(|d| Die::new(d.label(), 4))).unwrap();

    let res = forced.classify();

    assert_eq!(res.tier(), Tier::Quads);
    assert_eq!(res.message(), Some("You got Quads!"));
    assert_eq!(res.highlighted(), ['Z', 'Y', 'X', 'W']);
}

#[test]
fn test_roll_set_and_free_function_agree() {
    let config = RollConfig::with_sides(2, true).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let set = RollSet::roll(5, &config, &mut rng).unwrap();
        assert_eq!(set.classify(), classify(&set));
        assert_eq!(classify(&set), classify(&set.sorted()));
    }
}
