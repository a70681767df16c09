//! Game integration tests.

use warrs::{
    Card, DECK_SIZE, DeckError, FinalReport, Game, GameEvent, GameOptions, GameOutcome,
    GameState, Rank, RoundOutcome, RoundReport, SetupError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_with_cards(cards: &[Card], seed: u64) -> Game {
    let options = GameOptions::default().with_cards(cards.to_vec());
    Game::with_options(options, "Chuck", "Bob", "Jane", seed).unwrap()
}

fn split_events(events: Vec<GameEvent>) -> (Vec<RoundReport>, Vec<FinalReport>) {
    let mut rounds = Vec::new();
    let mut finals = Vec::new();
    for event in events {
        match event {
            GameEvent::Round(report) => {
                assert!(finals.is_empty(), "round reported after the final report");
                rounds.push(report);
            }
            GameEvent::Finished(report) => finals.push(report),
        }
    }
    (rounds, finals)
}

#[test]
fn new_game_names_dealer_and_players() {
    let game = Game::new("Pusheen", "Totoro", "Mai", 1);

    assert_eq!(game.dealer().name(), "Pusheen");
    assert_eq!(game.player1().name(), "Totoro");
    assert_eq!(game.player2().name(), "Mai");
    assert_eq!(game.player1().points(), 0);
    assert_eq!(game.player2().points(), 0);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.state(), GameState::RoundInProgress);
    assert_eq!(game.rounds_played(), 0);
    assert!(game.final_report().is_none());
}

#[test]
fn full_game_reports_26_rounds_then_final() {
    let (rounds, finals) = split_events(Game::new("Chuck", "Bob", "Jane", 42).play().collect());

    assert_eq!(rounds.len(), 26);
    assert_eq!(finals.len(), 1);

    for (index, report) in rounds.iter().enumerate() {
        assert_eq!(report.round, index + 1);
        assert_eq!(report.cards_remaining, DECK_SIZE - 2 * (index + 1));
    }

    let final_report = &finals[0];
    assert_eq!(final_report.rounds_played, 26);
    assert_eq!(
        final_report.player1_points + final_report.player2_points,
        rounds
            .iter()
            .filter(|r| r.outcome != RoundOutcome::Tie)
            .count() as u32
    );
}

#[test]
fn awarded_points_sum_to_final_scores() {
    let (rounds, finals) = split_events(Game::new("Chuck", "Bob", "Jane", 9001).play().collect());

    let mut player1 = 0;
    let mut player2 = 0;
    for report in &rounds {
        match report.outcome {
            RoundOutcome::Player1 => player1 += 1,
            RoundOutcome::Player2 => player2 += 1,
            RoundOutcome::Tie => {}
        }
        assert_eq!(report.player1_points, player1);
        assert_eq!(report.player2_points, player2);
    }

    assert_eq!(finals[0].player1_points, player1);
    assert_eq!(finals[0].player2_points, player2);
}

#[test]
fn round_winner_holds_the_higher_card() {
    let (rounds, _) = split_events(Game::new("Chuck", "Bob", "Jane", 5).play().collect());

    let mut previous = (0, 0);
    for report in rounds {
        match report.outcome {
            RoundOutcome::Player1 => {
                assert!(report.player1_card.rank > report.player2_card.rank);
                assert_eq!(report.round_winner.as_deref(), Some("Bob"));
            }
            RoundOutcome::Player2 => {
                assert!(report.player2_card.rank > report.player1_card.rank);
                assert_eq!(report.round_winner.as_deref(), Some("Jane"));
            }
            RoundOutcome::Tie => {
                assert_eq!(report.player1_card.rank, report.player2_card.rank);
                assert_eq!(report.round_winner, None);
                assert_eq!((report.player1_points, report.player2_points), previous);
            }
        }
        previous = (report.player1_points, report.player2_points);
    }
}

#[test]
fn no_card_is_dealt_twice_in_a_game() {
    let (rounds, _) = split_events(Game::new("Chuck", "Bob", "Jane", 77).play().collect());

    let mut cards: Vec<Card> = rounds
        .iter()
        .flat_map(|r| [r.player1_card, r.player2_card])
        .collect();
    cards.sort_unstable();
    cards.dedup();
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn equal_ranks_award_no_points() {
    let mut game = game_with_cards(
        &[card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Ace)],
        3,
    );

    let report = game.play_round().unwrap();
    assert_eq!(report.outcome, RoundOutcome::Tie);
    assert_eq!(report.round_winner, None);
    assert_eq!(report.player1_points, 0);
    assert_eq!(report.player2_points, 0);
    assert_eq!(report.cards_remaining, 0);

    assert!(game.play_round().is_none());
    let final_report = game.final_report().unwrap();
    assert_eq!(final_report.outcome, GameOutcome::Tie);
    assert_eq!(final_report.winner, None);
}

#[test]
fn higher_rank_wins_one_point() {
    let ace = card(Suit::Spades, Rank::Ace);
    let two = card(Suit::Clubs, Rank::Two);
    let mut game = game_with_cards(&[ace, two], 11);

    let report = game.play_round().unwrap();
    let (winner, points) = if report.player1_card == ace {
        (RoundOutcome::Player1, (1, 0))
    } else {
        (RoundOutcome::Player2, (0, 1))
    };
    assert_eq!(report.outcome, winner);
    assert_eq!((report.player1_points, report.player2_points), points);

    assert!(game.play_round().is_none());
    let final_report = game.final_report().unwrap();
    assert_eq!(final_report.player1_points + final_report.player2_points, 1);
    assert_ne!(final_report.outcome, GameOutcome::Tie);
    assert!(final_report.winner.is_some());
}

#[test]
fn unpaired_last_card_is_discarded() {
    let mut game = game_with_cards(
        &[
            card(Suit::Spades, Rank::Two),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::King),
        ],
        21,
    );

    let report = game.play_round().unwrap();
    assert_eq!(report.cards_remaining, 1);

    assert!(game.play_round().is_none());
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.final_report().unwrap().rounds_played, 1);
}

#[test]
fn empty_deck_finishes_immediately_as_tie() {
    let (rounds, finals) = split_events(game_with_cards(&[], 1).play().collect());

    assert!(rounds.is_empty());
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].player1_points, 0);
    assert_eq!(finals[0].player2_points, 0);
    assert_eq!(finals[0].outcome, GameOutcome::Tie);
}

#[test]
fn finished_game_stays_finished() {
    let mut game = game_with_cards(&[card(Suit::Spades, Rank::Two)], 1);

    assert!(game.play_round().is_none());
    assert!(game.play_round().is_none());
    assert_eq!(game.state(), GameState::Finished);

    let mut play = Game::new("Chuck", "Bob", "Jane", 2).play();
    let finished = play.by_ref().find(|e| matches!(e, GameEvent::Finished(_)));
    assert!(finished.is_some());
    assert!(play.next().is_none());
    assert!(play.next().is_none());
    assert_eq!(play.game().state(), GameState::Finished);
}

#[test]
fn final_report_names_the_player_with_more_points() {
    let (_, finals) = split_events(Game::new("Chuck", "Bob", "Jane", 1234).play().collect());
    let report = &finals[0];

    let expected = match report.player1_points.cmp(&report.player2_points) {
        core::cmp::Ordering::Greater => (GameOutcome::Player1, Some("Bob")),
        core::cmp::Ordering::Less => (GameOutcome::Player2, Some("Jane")),
        core::cmp::Ordering::Equal => (GameOutcome::Tie, None),
    };
    assert_eq!((report.outcome, report.winner.as_deref()), expected);
}

#[test]
fn games_with_same_names_have_same_report_shape() {
    let first: Vec<GameEvent> = Game::new("Pusheen", "Totoro", "Mai", 1).play().collect();
    let second: Vec<GameEvent> = Game::new("Pusheen", "Totoro", "Mai", 2).play().collect();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        match (a, b) {
            (GameEvent::Round(a), GameEvent::Round(b)) => {
                assert_eq!(a.round, b.round);
                assert_eq!(a.dealer_name, b.dealer_name);
                assert_eq!(a.player1_name, b.player1_name);
                assert_eq!(a.player2_name, b.player2_name);
                assert_eq!(a.cards_remaining, b.cards_remaining);
            }
            (GameEvent::Finished(a), GameEvent::Finished(b)) => {
                assert_eq!(a.player1_name, b.player1_name);
                assert_eq!(a.player2_name, b.player2_name);
                assert_eq!(a.rounds_played, b.rounds_played);
            }
            _ => panic!("event kinds differ"),
        }
    }
}

#[test]
fn same_seed_replays_the_same_game() {
    let first: Vec<GameEvent> = Game::new("Chuck", "Bob", "Jane", 99).play().collect();
    let second: Vec<GameEvent> = Game::new("Chuck", "Bob", "Jane", 99).play().collect();
    assert_eq!(first, second);
}

#[test]
fn points_per_round_option() {
    let options = GameOptions::default()
        .with_points_per_round(3)
        .with_cards(vec![
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Jack),
        ]);
    let mut game = Game::with_options(options, "Chuck", "Bob", "Jane", 4).unwrap();

    let report = game.play_round().unwrap();
    assert_eq!(report.player1_points + report.player2_points, 3);
}

#[test]
fn options_validation() {
    let options = GameOptions::default().with_points_per_round(0);
    assert_eq!(
        Game::with_options(options, "Chuck", "Bob", "Jane", 1).unwrap_err(),
        SetupError::ZeroPointsPerRound
    );

    let queen = card(Suit::Diamonds, Rank::Queen);
    let options = GameOptions::default().with_cards(vec![queen, queen]);
    assert_eq!(
        Game::with_options(options, "Chuck", "Bob", "Jane", 1).unwrap_err(),
        SetupError::Deck(DeckError::DuplicateCard { card: queen })
    );
}

#[test]
fn player_award_points_keeps_name() {
    let mut player = warrs::Player::new("Totoro");
    player.award_points(1);
    assert_eq!(player.points(), 1);
    player.award_points(4);
    assert_eq!(player.points(), 5);
    player.award_points(0);
    assert_eq!(player.points(), 5);
    assert_eq!(player.name(), "Totoro");
}

#[test]
fn dealer_deals_until_empty() {
    let mut dealer = warrs::Dealer::new("Pusheen", 8);
    assert_eq!(dealer.name(), "Pusheen");

    assert!(dealer.deal_card().is_some());
    assert_eq!(dealer.cards_remaining(), DECK_SIZE - 1);

    while dealer.deal_card().is_some() {}
    assert_eq!(dealer.cards_remaining(), 0);
    assert_eq!(dealer.deck().dealt().len(), DECK_SIZE);
    assert!(dealer.deal_card().is_none());
}
