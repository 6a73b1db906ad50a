use holdem_rs::cards::{parse_cards, Card, Rank, Suit};
use holdem_rs::deck::Deck;
use holdem_rs::evaluator::{evaluate, Category, EvaluatedHand};
use proptest::prelude::*;
use std::cmp::Ordering;

/// `n` distinct cards taken from a seeded shuffle.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    any::<u64>().prop_map(move |seed| Deck::standard().shuffled_seeded(seed).as_slice()[..n].to_vec())
}

fn rank(v: u8) -> Rank {
    Rank::from_value(v).expect("rank value in 2..=14")
}

fn straight_cards(top: u8) -> [Card; 5] {
    let vals = if top == 5 { [14, 2, 3, 4, 5] } else { [top - 4, top - 3, top - 2, top - 1, top] };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [0, 1, 2, 3, 4].map(|i| Card::new(rank(vals[i]), suits[i]))
}

fn eval(cards: &[Card]) -> EvaluatedHand {
    evaluate(cards).expect("evaluable hand")
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().rev().map(rank).collect())
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric_and_transitive(
        a in distinct_cards(7),
        b in distinct_cards(6),
        c in distinct_cards(5),
    ) {
        let (ea, eb, ec) = (eval(&a), eval(&b), eval(&c));

        if ea >= eb && eb >= ea { prop_assert_eq!(ea.value(), eb.value()); }
        prop_assert_eq!(ea.cmp(&eb), eb.cmp(&ea).reverse());
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn seven_card_best_is_at_least_as_good_as_any_five(cards in distinct_cards(7)) {
        let best7 = eval(&cards);
        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
            prop_assert!(best7 >= eval(&five));
        }}}}}
    }

    #[test]
    fn best_five_is_drawn_from_the_input(cards in distinct_cards(7)) {
        let e = eval(&cards);
        for c in e.best_five {
            prop_assert!(cards.contains(&c));
        }
        prop_assert_eq!(e.value().category_ordinal(), e.category.ordinal());
    }

    #[test]
    fn higher_category_always_wins(a in distinct_cards(7), b in distinct_cards(7)) {
        let (ea, eb) = (eval(&a), eval(&b));
        if ea.category != eb.category {
            prop_assert_eq!(ea.cmp(&eb), ea.category.cmp(&eb.category));
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = eval(&straight_cards(top_hi));
        let e_lo = eval(&straight_cards(top_lo));
        prop_assert_eq!(e_hi.category, Category::Straight);
        prop_assert_eq!(e_lo.category, Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand = |ranks: &[Rank]| -> Vec<Card> { ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect() };
        let (e_a, e_b) = (eval(&hand(&a)), eval(&hand(&b)));
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);

        // both lists are descending, so lexicographic order is kicker order
        match a.cmp(&b) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}

#[test]
fn weakest_of_each_category_beats_strongest_of_the_one_below() {
    // (strongest hand of a category, weakest hand of the next category up)
    let ladder = [
        ("As Kd Qc Jh 9s", "2s 2d 3c 4h 5s"),
        ("As Ad Kc Qh Js", "3s 3d 2c 2h 4s"),
        ("As Ad Kc Kh Qs", "2s 2d 2c 3h 4s"),
        ("As Ad Ac Kh Qs", "As 2d 3c 4h 5s"),
        ("As Kd Qc Jh 10s", "2h 3h 4h 5h 7h"),
        ("Ah Kh Qh Jh 9h", "2s 2d 2c 3h 3s"),
        ("As Ad Ac Kh Ks", "2s 2d 2c 2h 3s"),
        ("As Ad Ac Ah Ks", "Ah 2h 3h 4h 5h"),
        ("Ks Qs Js 10s 9s", "As Ks Qs Js 10s"),
    ];
    for (lower, higher) in ladder {
        let lo = eval(&parse_cards(lower).unwrap());
        let hi = eval(&parse_cards(higher).unwrap());
        assert_eq!(hi.category.ordinal(), lo.category.ordinal() + 1, "{lower} / {higher}");
        assert!(hi > lo, "{higher} ({}) must beat {lower} ({})", hi.category, lo.category);
    }
}

#[test]
fn wheel_is_lowest_straight() {
    let wheel = eval(&straight_cards(5));
    assert_eq!(wheel.category, Category::Straight);
    for top in 6..=14 {
        assert!(eval(&straight_cards(top)) > wheel);
    }
}
