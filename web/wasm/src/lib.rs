use serde::Serialize;
use wasm_bindgen::prelude::*;
use warrs::{
    Card, FinalReport, Game, GameEvent, GameOutcome, GameState, Play, RoundOutcome, RoundReport,
};

#[wasm_bindgen]
pub struct WasmGame {
    play: Play,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, dealer: String, player1: String, player2: String) -> Self {
        Self {
            play: Game::new(dealer, player1, player2, seed as u64).play(),
        }
    }

    pub fn reset(&mut self, seed: u32, dealer: String, player1: String, player2: String) {
        self.play = Game::new(dealer, player1, player2, seed as u64).play();
    }

    /// Returns the next event, or `null` once the game has been fully played.
    pub fn next_event(&mut self) -> Result<JsValue, JsValue> {
        match self.play.next() {
            Some(event) => to_js_value(&JsEvent::from(event)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Plays the rest of the game and returns every remaining event.
    pub fn play_all(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.play.by_ref().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = self.play.game();

        let snapshot = Snapshot {
            state: state_to_str(game.state()),
            dealer_name: game.dealer().name().to_string(),
            player1: JsPlayer {
                name: game.player1().name().to_string(),
                points: game.player1().points(),
            },
            player2: JsPlayer {
                name: game.player2().name().to_string(),
                points: game.player2().points(),
            },
            rounds_played: game.rounds_played() as u32,
            cards_remaining: game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    dealer_name: String,
    player1: JsPlayer,
    player2: JsPlayer,
    rounds_played: u32,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    points: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    face: &'static str,
    value: u8,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsEvent {
    Round(JsRoundReport),
    Finished(JsFinalReport),
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Round(report) => Self::Round(JsRoundReport::from(report)),
            GameEvent::Finished(report) => Self::Finished(JsFinalReport::from(report)),
        }
    }
}

#[derive(Serialize)]
struct JsRoundReport {
    round: u32,
    dealer_name: String,
    player1_name: String,
    player1_card: JsCard,
    player2_name: String,
    player2_card: JsCard,
    outcome: &'static str,
    round_winner: Option<String>,
    player1_points: u32,
    player2_points: u32,
    cards_remaining: u32,
}

impl From<RoundReport> for JsRoundReport {
    fn from(report: RoundReport) -> Self {
        Self {
            round: report.round as u32,
            dealer_name: report.dealer_name,
            player1_name: report.player1_name,
            player1_card: card_to_js(report.player1_card),
            player2_name: report.player2_name,
            player2_card: card_to_js(report.player2_card),
            outcome: round_outcome_to_str(report.outcome),
            round_winner: report.round_winner,
            player1_points: report.player1_points,
            player2_points: report.player2_points,
            cards_remaining: report.cards_remaining as u32,
        }
    }
}

#[derive(Serialize)]
struct JsFinalReport {
    player1_name: String,
    player1_points: u32,
    player2_name: String,
    player2_points: u32,
    outcome: &'static str,
    winner: Option<String>,
    rounds_played: u32,
}

impl From<FinalReport> for JsFinalReport {
    fn from(report: FinalReport) -> Self {
        Self {
            player1_name: report.player1_name,
            player1_points: report.player1_points,
            player2_name: report.player2_name,
            player2_points: report.player2_points,
            outcome: game_outcome_to_str(report.outcome),
            winner: report.winner,
            rounds_played: report.rounds_played as u32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit_name(),
        face: card.face_name(),
        value: card.rank.value(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::RoundInProgress => "RoundInProgress",
        GameState::Finished => "Finished",
    }
}

fn round_outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Player1 => "Player1",
        RoundOutcome::Player2 => "Player2",
        RoundOutcome::Tie => "Tie",
    }
}

fn game_outcome_to_str(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Player1 => "Player1",
        GameOutcome::Player2 => "Player2",
        GameOutcome::Tie => "Tie",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
