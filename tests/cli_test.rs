#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use salvo::{
        parse_coord, place_ship_at, AiPlayer, Board, CliPlayer, Coord, GameEngine, Player, Side,
    };

    fn board_with_ships(size: usize, ships: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &c in ships {
            place_ship_at(&mut board, Coord::from(c)).unwrap();
        }
        board
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3 1", 5), Ok(Coord::new(3, 1)));
        assert_eq!(parse_coord("  0   4 \n", 5), Ok(Coord::new(0, 4)));
        assert!(parse_coord("3", 5).unwrap_err().contains("exactly two numbers"));
        assert!(parse_coord("1 2 3", 5).unwrap_err().contains("exactly two numbers"));
        assert!(parse_coord("a 2", 5).unwrap_err().contains("numbers only"));
        assert!(parse_coord("5 0", 3).unwrap_err().contains("out of bounds"));
        assert!(parse_coord("-1 0", 3).unwrap_err().contains("out of bounds"));
        assert!(parse_coord("", 3).is_err());
    }

    #[test]
    fn test_parse_coord_on_empty_board_is_an_error() {
        assert!(parse_coord("0 0", 0).is_err());
    }

    #[test]
    fn test_confirm_turns_waits_for_enter() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut engine = GameEngine::from_boards(
            board_with_ships(3, &[(0, 0), (1, 0), (2, 0)]),
            board_with_ships(3, &[(2, 2), (0, 0)]),
        )
        .unwrap();
        // each blank line answers the prompt after the computer's shot
        let script = "0 1\n\n2 2\n\n0 0\n";
        let mut human = CliPlayer::with_io(Cursor::new(script.as_bytes()), Vec::new())
            .with_confirm_turns(true);
        let mut computer = AiPlayer::new();

        assert_eq!(engine.play([&mut human, &mut computer], &mut rng), Some(Side::Player));
        let out = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(out.matches("Press Enter to continue to the next turn...").count(), 2);
        assert!(!out.contains("Error:"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::new(3).unwrap();
        let input = Cursor::new("5 0\nx y\n\n2 1\n".as_bytes());
        let mut player = CliPlayer::with_io(input, Vec::new());
        player.new_game(3, 1);

        assert_eq!(
            player.select_target(&mut rng, &board, &board),
            Some(Coord::new(2, 1))
        );
        let out = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(out.matches("Enter coordinates for your shot").count(), 4);
        assert!(out.contains("out of bounds"));
        assert!(out.contains("numbers only"));
        assert!(out.contains("exactly two numbers"));
    }

    #[test]
    fn test_closed_input_abandons() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::new(3).unwrap();
        let mut player = CliPlayer::with_io(Cursor::new(&b""[..]), Vec::new());
        assert_eq!(player.select_target(&mut rng, &board, &board), None);
    }

    #[test]
    fn test_opponent_board_is_concealed() {
        let mut rng = SmallRng::seed_from_u64(1);
        let own = board_with_ships(2, &[(0, 0)]);
        let target = board_with_ships(2, &[(1, 1)]);
        let mut player = CliPlayer::with_io(Cursor::new("0 1\n".as_bytes()), Vec::new());
        player.select_target(&mut rng, &own, &target).unwrap();
        let out = String::from_utf8(player.into_output()).unwrap();
        let (mine, theirs) = out.split_once("Computer's Board:").unwrap();
        assert!(mine.contains("0 S ~"));
        assert!(!theirs.contains('S'));
    }

    #[test]
    fn test_full_game_against_computer() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut engine = GameEngine::from_boards(
            board_with_ships(3, &[(0, 0), (1, 0), (2, 0)]),
            board_with_ships(3, &[(2, 2), (0, 0)]),
        )
        .unwrap();
        let script = "0 1\n0 1\n9 9\nabc 1\n2 2\n0 0\n";
        let mut human = CliPlayer::with_io(Cursor::new(script.as_bytes()), Vec::new());
        let mut computer = AiPlayer::new();

        let winner = engine.play([&mut human, &mut computer], &mut rng);

        assert_eq!(winner, Some(Side::Player));
        assert_eq!(engine.turns(), 5);
        let out = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(out.matches("--- YOUR TURN ---").count(), 3);
        assert_eq!(out.matches("--- COMPUTER'S TURN ---").count(), 2);
        assert_eq!(out.matches("The computer fires at").count(), 2);
        assert_eq!(out.matches("Ships remaining -> You: ").count(), 2);
        assert!(out.contains("You've already shot there. Try again."));
        assert!(out.contains("out of bounds"));
        assert!(out.contains("numbers only"));
        assert!(out.contains("YOU MISSED!"));
        assert_eq!(out.matches("IT'S A HIT!").count(), 2);
    }
}
