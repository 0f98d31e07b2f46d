use std::io::{Cursor, Write};

use wordle_game::commands::run_play;
use wordle_game::core::{LetterMatch, Word};
use wordle_game::game::{Game, GameState, Outcome, seeded_rng, select_solution};
use wordle_game::output::NoClear;
use wordle_game::wordlists::{WordListError, WordPool, WordSource};

fn temp_word_list(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "wordle_game_{name}_{}.txt",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn play(game: &mut Game, script: &str) -> (Outcome, String) {
    let mut input = Cursor::new(script.as_bytes());
    let mut out = Vec::new();
    let outcome = run_play(game, &mut input, &mut out, &mut NoClear).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn seeded_game_from_file_is_reproducible() {
    let path = temp_word_list("seeded", "crane\nslate\nirate\nmoist\naudio\n");
    let pool = WordPool::load(&WordSource::File(path.clone())).unwrap();
    std::fs::remove_file(&path).unwrap();

    let (mut rng1, _) = seeded_rng(Some(2024));
    let (mut rng2, _) = seeded_rng(Some(2024));
    let solution = select_solution(&pool, &mut rng1).unwrap();
    assert_eq!(Some(solution.clone()), select_solution(&pool, &mut rng2));

    let mut game = Game::new(solution.clone());
    let (outcome, _) = play(&mut game, &format!("{}\n", solution.text().to_lowercase()));
    assert_eq!(
        outcome,
        Outcome::Won {
            attempts: 1,
            message: "Genius"
        }
    );
}

#[test]
fn word_list_without_valid_words_is_fatal() {
    let path = temp_word_list("empty", "toolong\nabc\n\n12345\n");
    let err = WordPool::load(&WordSource::File(path.clone())).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, WordListError::Empty { .. }));
}

#[test]
fn missing_word_list_is_fatal() {
    let err = WordPool::load(&WordSource::from_arg("/no/such/dir/solutions.txt")).unwrap_err();
    assert!(matches!(err, WordListError::Io { .. }));
}

#[test]
fn history_tracks_attempts_through_a_full_loss() {
    let mut game = Game::new(Word::new("allow").unwrap());
    let script = "llama\nnope!\nwaltz\n\nmoist\nbrick\nplumb\nfjord\n";
    let (outcome, text) = play(&mut game, script);

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.attempts(), 6);
    assert_eq!(game.history().len(), game.attempts());
    assert_eq!(
        outcome,
        Outcome::Lost {
            solution: Word::new("allow").unwrap()
        }
    );
    assert!(text.contains("The word was: "));

    // Both A's in LLAMA are credited even though ALLOW has one A
    use LetterMatch::{Match, NotMatch, PartialMatch};
    assert_eq!(
        game.history()[0].score.matches(),
        &[PartialMatch, Match, PartialMatch, NotMatch, PartialMatch]
    );
}
