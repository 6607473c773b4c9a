//! Practice-hand tests.
//!
//! These tests verify the sampler's size rules:
//! - Small piles draw everything
//! - Full hands without events stop at the base size
//! - An event earns exactly one bonus card
//! - Excluded and non-playable cards never appear

use deck_rules::cards::{CardCatalog, CardDefinition, CardType};
use deck_rules::core::{DeckRng, DeckRules};
use deck_rules::deck::Deck;
use deck_rules::hand::HandSampler;
use rustc_hash::FxHashSet;

fn catalog() -> CardCatalog {
    CardCatalog::from_cards([
        CardDefinition::new("c1", "Hero", CardType::Character),
        CardDefinition::new("m1", "Rescue", CardType::Mission),
        CardDefinition::new("l1", "Tower", CardType::Location),
        CardDefinition::new("p1", "Punch", CardType::Power),
        CardDefinition::new("p2", "Kick", CardType::Power),
        CardDefinition::new("s1", "Trick", CardType::Special),
        CardDefinition::new("e1", "Storm", CardType::Event),
        CardDefinition::new("t1", "Token", CardType::Special).exclude_from_draw(),
    ])
    .unwrap()
}

/// A five-card pile draws all five.
#[test]
fn test_pile_of_five() {
    let rules = DeckRules::default();
    let deck = Deck::new()
        .with_card("c1", CardType::Character, 1)
        .with_card("p1", CardType::Power, 3)
        .with_card("s1", CardType::Special, 2);

    for seed in 0..10 {
        let hand = HandSampler::new(&rules).draw(&deck, &catalog(), &mut DeckRng::new(seed));
        assert_eq!(hand.len(), 5, "seed {seed}");
        assert!(!hand.has_bonus_card());
    }
}

/// Without events the hand stops at eight.
#[test]
fn test_no_event_hand_is_eight() {
    let rules = DeckRules::default();
    let deck = Deck::new()
        .with_card("p1", CardType::Power, 30)
        .with_card("p2", CardType::Power, 30);

    for seed in 0..10 {
        let hand = HandSampler::new(&rules).draw(&deck, &catalog(), &mut DeckRng::new(seed));
        assert_eq!(hand.len(), 8, "seed {seed}");
    }
}

/// An event among the first eight earns a ninth card, never more.
#[test]
fn test_event_hand_is_nine() {
    let rules = DeckRules::default();
    let deck = Deck::new()
        .with_card("e1", CardType::Event, 30)
        .with_card("p1", CardType::Power, 30);
    let sampler = HandSampler::new(&rules);

    for seed in 0..20 {
        let hand = sampler.draw(&deck, &catalog(), &mut DeckRng::new(seed));
        assert!(hand.len() <= 9);
        if hand.cards()[..8].iter().any(|c| c.is_event()) {
            assert_eq!(hand.len(), 9, "seed {seed}");
            assert!(hand.has_bonus_card());
        } else {
            assert_eq!(hand.len(), 8, "seed {seed}");
        }
    }
}

/// Slots are never drawn twice.
#[test]
fn test_no_duplicate_slots() {
    let rules = DeckRules::default();
    let deck = Deck::new()
        .with_card("e1", CardType::Event, 5)
        .with_card("p1", CardType::Power, 5);

    for seed in 0..20 {
        let hand = HandSampler::new(&rules).draw(&deck, &catalog(), &mut DeckRng::new(seed));
        let slots: FxHashSet<_> = hand.iter().map(|c| c.slot).collect();
        assert_eq!(slots.len(), hand.len());
    }
}

/// Characters, missions, locations and excluded cards are never drawn.
#[test]
fn test_non_playable_cards_never_drawn() {
    let rules = DeckRules::default();
    let deck = Deck::new()
        .with_card("c1", CardType::Character, 1)
        .with_card("m1", CardType::Mission, 1)
        .with_card("l1", CardType::Location, 1)
        .with_card("t1", CardType::Special, 20)
        .with_card("p1", CardType::Power, 10);

    let hand = HandSampler::new(&rules).draw(&deck, &catalog(), &mut DeckRng::new(11));
    assert_eq!(hand.pile_size(), 10);
    assert!(hand.iter().all(|c| c.card_id.as_str() == "p1"));
}

/// The draw button needs a full base hand of playable cards.
#[test]
fn test_can_draw_gate() {
    let rules = DeckRules::default();
    let sampler = HandSampler::new(&rules);
    let catalog = catalog();

    let seven = Deck::new()
        .with_card("p1", CardType::Power, 7)
        .with_card("t1", CardType::Special, 5)
        .with_card("c1", CardType::Character, 1);
    assert!(!sampler.can_draw(&seven, &catalog));

    let eight = seven.clone().with_card("s1", CardType::Special, 1);
    assert!(sampler.can_draw(&eight, &catalog));
}

/// Seeded draws are reproducible; restored RNG state continues the stream.
#[test]
fn test_seeded_draws() {
    let rules = DeckRules::default();
    let deck = Deck::new()
        .with_card("p1", CardType::Power, 20)
        .with_card("s1", CardType::Special, 20);
    let sampler = HandSampler::new(&rules);

    let mut rng = DeckRng::new(2024);
    let _ = sampler.draw(&deck, &catalog(), &mut rng);
    let state = rng.state();
    let next = sampler.draw(&deck, &catalog(), &mut rng);

    let mut restored = DeckRng::from_state(&state);
    assert_eq!(sampler.draw(&deck, &catalog(), &mut restored), next);
}

/// Reordering moves one card and keeps the rest in order.
#[test]
fn test_reorder_hand() {
    let rules = DeckRules::default();
    let deck = Deck::new().with_card("p1", CardType::Power, 20);
    let mut hand = HandSampler::new(&rules).draw(&deck, &catalog(), &mut DeckRng::new(8));
    let before: Vec<_> = hand.iter().map(|c| c.slot).collect();

    assert!(hand.reorder(5, 1));
    let after: Vec<_> = hand.iter().map(|c| c.slot).collect();
    assert_eq!(after[1], before[5]);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[1]);

    assert!(!hand.reorder(0, 100));
    assert_eq!(hand.iter().map(|c| c.slot).collect::<Vec<_>>(), after);
}

/// Hand sizes follow the rules configuration.
#[test]
fn test_configured_hand_sizes() {
    let rules = DeckRules::default().with_hand_sizes(5, 6);
    let deck = Deck::new().with_card("e1", CardType::Event, 40);

    let hand = HandSampler::new(&rules).draw(&deck, &catalog(), &mut DeckRng::new(4));
    assert_eq!(hand.len(), 6);
}
