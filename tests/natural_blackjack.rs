use blackjack_rs::cards::parse_cards;
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{ActionError, EventVerb, Game, GameState, OpeningDeal, Rules};
use blackjack_rs::scoring::Scoring;

fn game_with(rules: Rules, deck: &str) -> Game {
    let mut game = Game::with_rules(rules.with_seed(5));
    game.start_with_deck(Deck::from_cards(parse_cards(deck).unwrap())).unwrap();
    game
}

fn natural_rules() -> Rules {
    Rules::default().with_natural_blackjack(true)
}

#[test]
fn both_naturals_draw_on_the_opening_deal() {
    let game = game_with(natural_rules().with_opening(OpeningDeal::Double), "As Ah Kd Qc");
    assert_eq!(game.state(), GameState::Draw);
    let naturals = game.history().iter().filter(|e| e.verb == EventVerb::Natural).count();
    assert_eq!(naturals, 2);
}

#[test]
fn single_natural_wins_outright() {
    let game = game_with(natural_rules().with_opening(OpeningDeal::Double), "As 9h Kd 9c");
    assert_eq!(game.state(), GameState::HumanWin);

    let game = game_with(natural_rules().with_opening(OpeningDeal::Double), "9h As 9c Kd");
    assert_eq!(game.state(), GameState::ComputerWin);
}

#[test]
fn rule_off_keeps_playing() {
    let game = game_with(Rules::default().with_opening(OpeningDeal::Double), "As Ah Kd Qc");
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.human_score(), 21);
}

#[test]
fn checked_after_dealing_the_second_opening_card() {
    let mut game = game_with(natural_rules(), "As 9h Kd 9c");
    assert_eq!(game.state(), GameState::Playing);
    game.deal_second_initial_card().unwrap();
    assert_eq!(game.state(), GameState::HumanWin);
    assert_eq!(
        game.deal_second_initial_card(),
        Err(ActionError::NotPlaying(GameState::HumanWin))
    );
}

#[test]
fn checked_when_the_computer_is_topped_up() {
    let mut game = game_with(natural_rules(), "10h Ac 5d Kc");
    game.human_hit().unwrap();
    assert_eq!(game.deal_computer_second_card().unwrap(), parse_cards("Kc").unwrap().pop());
    assert_eq!(game.state(), GameState::ComputerWin);
}

#[test]
fn raw_rank_naturals_follow_raw_totals() {
    // Under raw ranks an Ace and King make 14, an eight and King make 21.
    let rules = natural_rules().with_opening(OpeningDeal::Double).with_scoring(Scoring::RawRank);
    let game = game_with(rules, "As 8h Kd Kc");
    assert_eq!(game.state(), GameState::ComputerWin);
}
