//! Property tests: random move sequences against both rule sets.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::engine::prelude::*;

#[derive(Debug, Clone)]
enum Move {
    Palette(usize, usize),
    Canvas(usize),
    Draw,
}

fn a_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        3 => (0..6usize, 0..8usize).prop_map(|(p, c)| Move::Palette(p, c)),
        2 => (0..8usize).prop_map(Move::Canvas),
        2 => Just(Move::Draw),
    ]
}

fn game_type() -> impl Strategy<Value = GameType> {
    prop_oneof![Just(GameType::Basic), Just(GameType::Advanced)]
}

/// Everything a caller can observe about a started game.
#[derive(Debug, PartialEq, Eq)]
struct Observed {
    hand: Vec<Card>,
    palettes: Vec<Vec<Card>>,
    canvas: Card,
    deck: usize,
    can_play_to_canvas: bool,
    over: bool,
}

fn observe(game: &dyn RedGameModel) -> Observed {
    let num_palettes = game.num_palettes().unwrap();
    Observed {
        hand: game.hand().unwrap(),
        palettes: (0..num_palettes).map(|i| game.palette(i).unwrap()).collect(),
        canvas: game.canvas().unwrap(),
        deck: game.num_of_cards_in_deck().unwrap(),
        can_play_to_canvas: game.can_play_to_canvas().unwrap(),
        over: game.is_game_over().unwrap(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the table stays consistent whatever is attempted, and a
    /// rejected move changes nothing.
    #[test]
    fn prop_random_play_keeps_the_table_consistent(
        game_type in game_type(),
        seed in any::<u64>(),
        num_palettes in 2..=5usize,
        hand_size in 1..=7usize,
        moves in prop::collection::vec(a_move(), 0..80),
    ) {
        let mut game = GameCreator::create_seeded(game_type, seed);
        game.start_game(Card::all(), true, num_palettes, hand_size).unwrap();
        let mut canvas_plays = 0;

        for mv in moves {
            let before = observe(game.as_ref());
            let result = match mv {
                Move::Palette(p, c) => game.play_to_palette(p, c),
                Move::Canvas(c) => game.play_to_canvas(c),
                Move::Draw => game.draw_for_hand(),
            };
            let after = observe(game.as_ref());

            match (&mv, &result) {
                (_, Err(_)) => {
                    prop_assert_eq!(&before, &after);
                }
                (Move::Canvas(_), Ok(())) => {
                    canvas_plays += 1;
                    prop_assert!(!after.can_play_to_canvas);
                }
                (Move::Draw, Ok(())) => {
                    prop_assert!(after.can_play_to_canvas);
                }
                _ => {}
            }
            if before.over {
                prop_assert!(result.is_err());
                prop_assert!(after.over);
            }

            prop_assert!(after.hand.len() <= hand_size);
            prop_assert!(after.palettes.iter().all(|p| !p.is_empty()));
            prop_assert!(game.winning_palette_index().unwrap() < num_palettes);

            let mut seen = HashSet::new();
            let visible = after.hand.iter().chain(after.palettes.iter().flatten());
            for card in visible.chain(std::iter::once(&after.canvas).filter(|c| !c.is_sentinel())) {
                prop_assert!(seen.insert(*card), "duplicate card {}", card);
            }

            let held = after.hand.len() + after.palettes.iter().map(Vec::len).sum::<usize>();
            prop_assert_eq!(held + after.deck + canvas_plays, 35);
        }
    }

    /// Property: a basic draw from a full hand changes nothing.
    #[test]
    fn prop_basic_draw_from_a_full_hand_is_a_no_op(
        seed in any::<u64>(),
        num_palettes in 2..=5usize,
        hand_size in 1..=7usize,
    ) {
        let mut game = BasicGame::with_seed(seed);
        game.start_game(Card::all(), true, num_palettes, hand_size).unwrap();
        let hand = game.hand().unwrap();
        let deck = game.num_of_cards_in_deck().unwrap();
        game.draw_for_hand().unwrap();
        prop_assert_eq!(game.hand().unwrap(), hand);
        prop_assert_eq!(game.num_of_cards_in_deck().unwrap(), deck);
    }

    /// Property: the same seed deals the same game.
    #[test]
    fn prop_seeded_shuffles_are_reproducible(seed in any::<u64>()) {
        let mut a = BasicGame::with_seed(seed);
        let mut b = BasicGame::with_seed(seed);
        a.start_game(Card::all(), true, 4, 7).unwrap();
        b.start_game(Card::all(), true, 4, 7).unwrap();
        prop_assert_eq!(observe(&a), observe(&b));
    }
}
