use blackjack_rs::agents::{Action, ComputerAgent, Table};
use blackjack_rs::cards::parse_cards;
use blackjack_rs::deck::Deck;
use blackjack_rs::engine::GameEngine;
use blackjack_rs::game::{Game, GameState, Rules};
use blackjack_rs::player::Seat;

fn stacked(seed: u64, s: &str) -> Game {
    let mut game = Game::with_rules(Rules::default().with_seed(seed));
    game.start_with_deck(Deck::from_cards(parse_cards(s).unwrap())).unwrap();
    game
}

fn drive(table: &mut Table, engine: &mut dyn GameEngine, max_ticks: usize) {
    for _ in 0..max_ticks {
        if engine.state() != GameState::Playing {
            return;
        }
        table.on_turn(engine).unwrap();
    }
}

#[test]
fn human_hit_hands_the_turn_to_the_computer_for_a_top_up() {
    let mut game = stacked(1, "10h 5c 2d 9s 3c 4d");
    let mut table = Table::new(ComputerAgent::new(0));

    assert!(table.receive(Action::Hit));
    assert!(table.on_turn(&mut game).unwrap());
    assert_eq!(game.human_hand().len(), 2);
    assert_eq!(table.turn(), Seat::Computer);

    // The computer only completes its opening pair, then it's the human again.
    assert!(table.on_turn(&mut game).unwrap());
    assert_eq!(game.computer_hand().len(), 2);
    assert_eq!(table.turn(), Seat::Human);
}

#[test]
fn standing_lets_the_computer_play_out_and_settles() {
    for seed in 0..25 {
        let mut game = Game::with_rules(Rules::default().with_seed(seed));
        game.start_game();
        let mut table = Table::new(ComputerAgent::new(0));
        table.receive(Action::Stand);
        drive(&mut table, &mut game, 100);
        assert!(game.state().is_terminal(), "seed {seed} stuck in {:?}", game.state());
        assert!(game.human().is_standing());
    }
}

#[test]
fn human_keeps_acting_once_the_computer_stands() {
    // The computer holds 10s + Ac: 21 never hits, so it stands on its first decision.
    let mut game = stacked(2, "2h 10s 3d Ac 4c 5s");
    let mut table = Table::new(ComputerAgent::new(0));

    table.receive(Action::Hit);
    table.on_turn(&mut game).unwrap(); // human hits
    table.on_turn(&mut game).unwrap(); // computer topped up to 21
    assert_eq!(game.computer_score(), 21);
    table.receive(Action::Hit);
    table.on_turn(&mut game).unwrap(); // human hits again
    table.on_turn(&mut game).unwrap(); // computer stands
    assert!(game.computer().is_standing());
    assert_eq!(table.turn(), Seat::Human);

    assert!(table.receive(Action::Hit));
    assert!(table.on_turn(&mut game).unwrap());
    assert_eq!(table.turn(), Seat::Human);
    assert_eq!(game.human_hand().len(), 4);

    table.receive(Action::Stand);
    table.on_turn(&mut game).unwrap();
    assert_eq!(game.state(), GameState::ComputerWin);
}

#[test]
fn reset_returns_the_turn_to_the_human() {
    let mut game = Game::with_rules(Rules::default().with_seed(4));
    game.start_game();
    let mut table = Table::new(ComputerAgent::new(0));
    table.receive(Action::Stand);
    table.on_turn(&mut game).unwrap();
    assert_eq!(table.turn(), Seat::Computer);
    game.start_game();
    table.reset();
    assert_eq!(table.turn(), Seat::Human);
    assert!(table.receive(Action::Hit));
}
