use blackjack_rs::cards::parse_cards;
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{ActionError, ComputerMove, Game, GameState, OpeningDeal, Rules};
use blackjack_rs::player::Seat;

fn stacked(s: &str) -> Deck {
    Deck::from_cards(parse_cards(s).unwrap())
}

fn double_opening(seed: u64) -> Game {
    Game::with_rules(Rules::default().with_opening(OpeningDeal::Double).with_seed(seed))
}

#[test]
fn higher_total_wins_when_the_computer_stands() {
    // Human 10h 9d = 19, computer 10s 8c = 18; any computer hit busts on a King.
    let mut stood = 0;
    for seed in 0..200 {
        let mut game = double_opening(seed);
        game.start_with_deck(stacked("10h 10s 9d 8c Kd Kh Ks")).unwrap();
        game.human_stand().unwrap();
        let moves = game.play_computer_turn().unwrap();
        let outcome = game.finalize_game();
        assert_eq!(outcome.winner(), Some(Seat::Human));
        if moves == [ComputerMove::Stand] {
            assert_eq!(outcome, GameState::HumanWin);
            assert_eq!(game.human_score(), 19);
            assert_eq!(game.computer_score(), 18);
            stood += 1;
        } else {
            assert_eq!(outcome, GameState::ComputerBust);
        }
    }
    assert!(stood > 0, "no seed let the computer stand on 18");
}

#[test]
fn computer_on_twenty_either_stands_or_busts_on_the_two() {
    let mut busts = 0;
    let mut wins = 0;
    for seed in 0..200 {
        let mut game = Game::with_rules(Rules::default().with_seed(seed));
        game.start_with_deck(stacked("9h 10s 10c 2h")).unwrap();
        game.human_stand().unwrap();
        // A single ten always draws.
        assert!(matches!(game.computer_hit().unwrap(), ComputerMove::Hit(_)));
        assert_eq!(game.computer_score(), 20);
        game.play_computer_turn().unwrap();
        match game.finalize_game() {
            GameState::ComputerBust => {
                assert_eq!(game.computer_hand(), parse_cards("10s 10c 2h").unwrap().as_slice());
                assert_eq!(game.computer_score(), 22);
                busts += 1;
            }
            GameState::ComputerWin => {
                assert_eq!(game.computer_score(), 20);
                wins += 1;
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert!(busts > 0 && wins > 0, "busts={busts} wins={wins}");
}

#[test]
fn equal_totals_draw() {
    let mut game = double_opening(1);
    game.start_with_deck(stacked("10h 10s 9d 9c")).unwrap();
    game.human_stand().unwrap();
    let moves = game.play_computer_turn().unwrap();
    if moves == [ComputerMove::Stand] {
        assert_eq!(game.finalize_game(), GameState::Draw);
    } else {
        assert!(game.state().is_terminal() || game.finalize_game().is_terminal());
    }
}

#[test]
fn human_bust_ends_the_game_before_the_computer_moves() {
    let mut game = Game::with_rules(Rules::default().with_seed(2));
    game.start_with_deck(stacked("Kh 5c Qd 9s")).unwrap();
    game.human_hit().unwrap();
    game.human_hit().unwrap();
    assert_eq!(game.state(), GameState::HumanBust);
    assert_eq!(game.computer_hand().len(), 1);
    assert_eq!(game.computer_hit(), Err(ActionError::NotPlaying(GameState::HumanBust)));
    assert_eq!(game.finalize_game(), GameState::HumanBust);
}

#[test]
fn start_game_resets_everything() {
    let mut game = Game::with_rules(Rules::default().with_seed(9));
    game.start_game();
    game.human_hit().ok();
    game.human_stand().ok();
    game.start_game();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.human_hand().len(), 1);
    assert_eq!(game.computer_hand().len(), 1);
    assert!(!game.human().is_standing());
    assert!(!game.computer().is_standing());
    assert_eq!(game.deck_len(), 50);
}

#[test]
fn seeded_games_replay_identically() {
    let play = |seed| {
        let mut game = Game::with_rules(Rules::default().with_seed(seed));
        game.start_game();
        while game.state() == GameState::Playing && game.human_score() < 16 {
            game.human_hit().unwrap();
        }
        if game.state() == GameState::Playing {
            game.human_stand().unwrap();
            game.play_computer_turn().unwrap();
            game.finalize_game();
        }
        (game.state(), game.human_hand().to_vec(), game.computer_hand().to_vec())
    };
    assert_eq!(play(77), play(77));
}
