//! Game integration tests.

use std::collections::HashSet;

use bataille::{
    AcknowledgeError, Card, CompareError, DECK_SIZE, Deck, DeckError, DuplicateRule, EngineState,
    Game, GameOptions, IntegrityError, RestartError, RevealError, RoundOutcome, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deck_of(cards: impl IntoIterator<Item = Card>) -> Deck {
    let mut deck = Deck::new();
    deck.append(cards);
    deck
}

/// All 13 cards of one suit, the given rank first.
fn suit_run(suit: Suit, front_rank: u8) -> Vec<Card> {
    let mut cards = vec![card(suit, front_rank)];
    cards.extend((2..=14).filter(|&r| r != front_rank).map(|r| card(suit, r)));
    cards
}

/// Rigs the game's decks so that `reveal` sees the given front cards while
/// the two decks together still hold the canonical 52-card set.
fn rig_decks(game: &Game, one: [Suit; 2], front_one: u8, two: [Suit; 2], front_two: u8) {
    let mut deck_one = suit_run(one[0], front_one);
    deck_one.extend(suit_run(one[1], 2));
    let mut deck_two = suit_run(two[0], front_two);
    deck_two.extend(suit_run(two[1], 2));

    *game.deck_one.lock() = deck_of(deck_one);
    *game.deck_two.lock() = deck_of(deck_two);
}

#[test]
fn canonical_deck_is_complete_and_unique() {
    let deck = Deck::canonical();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.cards().all(Card::has_legal_rank));
}

#[test]
fn shuffle_is_deterministic_under_a_seed_and_permutes() {
    let mut first = Deck::canonical();
    let mut second = Deck::canonical();

    first.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(first, second);

    let mut other_seed = Deck::canonical();
    other_seed.shuffle(&mut ChaCha8Rng::seed_from_u64(8));
    assert_ne!(first, other_seed);

    // Still a permutation of the canonical set.
    assert_eq!(first.len(), DECK_SIZE);
    let cards: HashSet<Card> = first.cards().collect();
    assert_eq!(cards, Deck::canonical().cards().collect());
}

#[test]
fn cut_in_two_splits_at_the_midpoint() {
    let deck = Deck::canonical();
    let original: Vec<Card> = deck.cards().collect();

    let (front, back) = deck.cut_in_two().unwrap();
    assert_eq!(front.len(), 26);
    assert_eq!(back.len(), 26);

    let rejoined: Vec<Card> = front.cards().chain(back.cards()).collect();
    assert_eq!(rejoined, original);
}

#[test]
fn cut_in_two_rejects_odd_decks() {
    let deck = deck_of([
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
    ]);

    assert_eq!(
        deck.cut_in_two().unwrap_err(),
        DeckError::InvalidSize { len: 3 }
    );
}

#[test]
fn pop_front_and_append_preserve_order() {
    let mut deck = deck_of([card(Suit::Clubs, 5), card(Suit::Spades, 9)]);

    deck.append([card(Suit::Hearts, 2), card(Suit::Diamonds, 14)]);
    assert_eq!(deck.pop_front().unwrap(), card(Suit::Clubs, 5));
    assert_eq!(deck.pop_front().unwrap(), card(Suit::Spades, 9));
    assert_eq!(deck.pop_front().unwrap(), card(Suit::Hearts, 2));
    assert_eq!(deck.pop_front().unwrap(), card(Suit::Diamonds, 14));
    assert_eq!(deck.pop_front().unwrap_err(), DeckError::Empty);
    assert!(deck.is_empty());
}

#[test]
fn win_determination_is_rank_only() {
    let ace = card(Suit::Spades, 14);
    let two = card(Suit::Hearts, 2);

    assert_eq!(ace.wins_against(two), Ok(RoundOutcome::PlayerOneWins));
    assert_eq!(two.wins_against(ace), Ok(RoundOutcome::PlayerTwoWins));

    // Suit never breaks a tie.
    let seven_hearts = card(Suit::Hearts, 7);
    let seven_spades = card(Suit::Spades, 7);
    assert_eq!(
        seven_hearts.wins_against(seven_spades),
        Ok(RoundOutcome::Draw)
    );

    let bogus = card(Suit::Clubs, 15);
    assert_eq!(
        bogus.wins_against(two),
        Err(CompareError::InvalidCard { rank: 15 })
    );
    assert_eq!(
        two.wins_against(card(Suit::Clubs, 1)),
        Err(CompareError::InvalidCard { rank: 1 })
    );
}

#[test]
fn winner_takes_both_cards_at_the_back_in_order() {
    let game = Game::new(GameOptions::default(), 1);
    // Front cards: A hearts vs 2 spades.
    rig_decks(
        &game,
        [Suit::Hearts, Suit::Clubs],
        14,
        [Suit::Spades, Suit::Diamonds],
        2,
    );

    let (one, two) = game.reveal().unwrap();
    assert_eq!(one, card(Suit::Hearts, 14));
    assert_eq!(two, card(Suit::Spades, 2));
    assert_eq!(game.outcome(), RoundOutcome::PlayerOneWins);
    assert_eq!(game.win_badges(), ("+", ""));

    game.acknowledge().unwrap();
    assert_eq!(game.deck_counts(), (27, 25));
    assert_eq!(game.state(), EngineState::Idle);
    assert_eq!(game.win_badges(), ("", ""));

    // Winner's own card first, then the captured card.
    let back: Vec<Card> = game.deck_one.lock().cards().collect();
    assert_eq!(back[25], card(Suit::Hearts, 14));
    assert_eq!(back[26], card(Suit::Spades, 2));

    game.check_integrity().unwrap();
}

#[test]
fn drawn_round_returns_each_card_to_its_own_deck() {
    let game = Game::new(GameOptions::default(), 1);
    // Front cards: 7 hearts vs 7 spades, different color groups.
    rig_decks(
        &game,
        [Suit::Hearts, Suit::Diamonds],
        7,
        [Suit::Spades, Suit::Clubs],
        7,
    );

    game.reveal().unwrap();
    assert_eq!(game.outcome(), RoundOutcome::Draw);
    assert_eq!(game.win_badges(), ("", ""));

    game.acknowledge().unwrap();
    assert_eq!(game.deck_counts(), (26, 26));
    assert_eq!(game.deck_one.lock().peek_back(), Some(card(Suit::Hearts, 7)));
    assert_eq!(game.deck_two.lock().peek_back(), Some(card(Suit::Spades, 7)));
    game.check_integrity().unwrap();
}

#[test]
fn same_color_draw_is_a_duplicate_error_and_mutates_nothing() {
    let game = Game::new(GameOptions::default(), 1);
    // Front cards: 7 hearts vs 7 diamonds, both red.
    rig_decks(
        &game,
        [Suit::Hearts, Suit::Clubs],
        7,
        [Suit::Diamonds, Suit::Spades],
        7,
    );

    game.reveal().unwrap();
    assert_eq!(game.outcome(), RoundOutcome::Draw);

    let before_one: Vec<Card> = game.deck_one.lock().cards().collect();
    let before_two: Vec<Card> = game.deck_two.lock().cards().collect();

    assert_eq!(
        game.acknowledge().unwrap_err(),
        AcknowledgeError::DuplicateCard { rank: 7 }
    );

    // The failed resolution left both decks untouched, still revealed.
    assert_eq!(game.state(), EngineState::Revealed);
    let after_one: Vec<Card> = game.deck_one.lock().cards().collect();
    let after_two: Vec<Card> = game.deck_two.lock().cards().collect();
    assert_eq!(before_one, after_one);
    assert_eq!(before_two, after_two);
}

#[test]
fn suit_rule_resolves_a_same_color_draw() {
    let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
    let game = Game::new(options, 1);
    // 7 hearts vs 7 diamonds: same color group, different suits.
    rig_decks(
        &game,
        [Suit::Hearts, Suit::Clubs],
        7,
        [Suit::Diamonds, Suit::Spades],
        7,
    );

    game.reveal().unwrap();
    game.acknowledge().unwrap();
    assert_eq!(game.deck_counts(), (26, 26));
    game.check_integrity().unwrap();
}

#[test]
fn illegal_transitions_are_rejected_without_mutation() {
    let game = Game::new(GameOptions::default(), 3);
    let before: Vec<Card> = game.deck_one.lock().cards().collect();

    // Acknowledge while idle.
    assert_eq!(
        game.acknowledge().unwrap_err(),
        AcknowledgeError::InvalidState
    );
    assert_eq!(game.state(), EngineState::Idle);

    // Reveal while already revealed.
    game.reveal().unwrap();
    assert_eq!(game.reveal().unwrap_err(), RevealError::InvalidState);
    assert_eq!(game.state(), EngineState::Revealed);

    let after: Vec<Card> = game.deck_one.lock().cards().collect();
    assert_eq!(before, after);
}

#[test]
fn reveal_fails_on_an_empty_deck() {
    let game = Game::new(GameOptions::default(), 3);
    *game.deck_two.lock() = Deck::new();

    assert_eq!(game.reveal().unwrap_err(), RevealError::EmptyDeck);
    assert_eq!(game.state(), EngineState::Idle);
}

#[test]
fn resolution_fails_when_a_card_went_missing() {
    let game = Game::new(GameOptions::default(), 1);
    rig_decks(
        &game,
        [Suit::Hearts, Suit::Clubs],
        14,
        [Suit::Spades, Suit::Diamonds],
        2,
    );
    // Lose a card from the back of deck two.
    let shorted: Vec<Card> = game.deck_two.lock().cards().take(25).collect();
    *game.deck_two.lock() = deck_of(shorted);

    game.reveal().unwrap();
    assert_eq!(
        game.acknowledge().unwrap_err(),
        AcknowledgeError::Integrity(IntegrityError::CardCount {
            deck_one: 27,
            deck_two: 24,
        })
    );
}

#[test]
fn integrity_check_finds_repeated_and_foreign_cards() {
    let game = Game::new(GameOptions::default(), 5);
    game.check_integrity().unwrap();

    // Replace deck two's front card with a copy of deck one's.
    let copied = game.deck_one.lock().peek_front().unwrap();
    let mut tampered: Vec<Card> = game.deck_two.lock().cards().collect();
    tampered[0] = copied;
    *game.deck_two.lock() = deck_of(tampered.clone());

    assert_eq!(
        game.check_integrity().unwrap_err(),
        IntegrityError::RepeatedCard { card: copied }
    );

    let foreign = card(Suit::Clubs, 1);
    tampered[0] = foreign;
    *game.deck_two.lock() = deck_of(tampered);

    assert_eq!(
        game.check_integrity().unwrap_err(),
        IntegrityError::ForeignCard { card: foreign }
    );
}

#[test]
fn restart_deals_a_fresh_session_only_while_idle() {
    // The suit rule keeps a naturally drawn first round resolvable.
    let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
    let game = Game::new(options, 11);

    game.reveal().unwrap();
    assert_eq!(game.restart().unwrap_err(), RestartError::InvalidState);

    game.acknowledge().unwrap();
    game.restart().unwrap();
    assert_eq!(game.deck_counts(), (26, 26));
    assert_eq!(game.outcome(), RoundOutcome::Unknown);
    game.check_integrity().unwrap();
}

#[test]
fn revealed_cards_accessor_follows_the_state() {
    let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
    let game = Game::new(options, 9);
    assert_eq!(game.revealed_cards(), None);
    assert!(!game.cards_revealed());

    let pair = game.reveal().unwrap();
    assert!(game.cards_revealed());
    assert_eq!(game.revealed_cards(), Some(pair));

    game.acknowledge().unwrap();
    assert_eq!(game.revealed_cards(), None);
}

#[test]
fn seeded_end_to_end_round() {
    let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
    let game = Game::new(options, 42);
    assert_eq!(game.deck_counts(), (26, 26));

    game.reveal().unwrap();
    let outcome = game.outcome();
    game.acknowledge().unwrap();

    let (one, two) = game.deck_counts();
    match outcome {
        RoundOutcome::PlayerOneWins => assert_eq!((one, two), (27, 25)),
        RoundOutcome::PlayerTwoWins => assert_eq!((one, two), (25, 27)),
        RoundOutcome::Draw => assert_eq!((one, two), (26, 26)),
        RoundOutcome::Unknown => panic!("revealed round must carry an outcome"),
    }

    assert_eq!(one + two, DECK_SIZE);
    assert_eq!(game.state(), EngineState::Idle);
    game.check_integrity().unwrap();
}

#[test]
fn long_session_preserves_the_invariants() {
    // The suit rule never misfires on a well-formed deck, so the session
    // only stops early when one player runs out of cards entirely.
    let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
    let game = Game::new(options, 1234);

    for _ in 0..500 {
        let (one, two) = game.deck_counts();
        if one == 0 || two == 0 {
            break;
        }

        game.reveal().unwrap();
        game.acknowledge().unwrap();
        game.check_integrity().unwrap();
    }

    let (one, two) = game.deck_counts();
    assert_eq!(one + two, DECK_SIZE);
}
