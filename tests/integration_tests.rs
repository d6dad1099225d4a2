//! Integration tests for autocomplete.
//!
//! These tests exercise the public engine API and the shell command layer
//! end to end.

use autocomplete::shell::command::{CommandRegistry, CommandResult, ShellContext};
use autocomplete::shell::commands::register_all;
use autocomplete::{AutocompleteEngine, AutocompleteError, AutocompleteProvider, Candidate, Shell};
use std::io::Write;
use tempfile::NamedTempFile;

fn pairs(candidates: &[Candidate]) -> Vec<(&str, u32)> {
    candidates
        .iter()
        .map(|c| (c.suggestion.as_str(), c.likelihood))
        .collect()
}

fn assert_ranked(candidates: &[Candidate]) {
    for window in candidates.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        assert!(
            a.likelihood > b.likelihood
                || (a.likelihood == b.likelihood && a.suggestion <= b.suggestion),
            "{:?} should not precede {:?}",
            a,
            b
        );
    }
}

/// Creates a command registry for testing.
fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_all(&mut registry);
    registry
}

// ============================================================================
// Engine Scenarios
// ============================================================================

#[test]
fn test_sentence_training() {
    let mut engine = AutocompleteEngine::new();
    engine.train("the cat sat on the mat");

    let found = engine.suggest("t").unwrap();
    assert_eq!(pairs(&found), vec![("the", 2)]);

    let found = engine.suggest("th").unwrap();
    assert_eq!(pairs(&found), vec![("the", 2)]);
}

#[test]
fn test_likelihood_descending() {
    let mut engine = AutocompleteEngine::new();
    engine.train("cat");
    engine.train("cat");
    engine.train("car");

    assert_eq!(
        pairs(&engine.suggest("ca").unwrap()),
        vec![("cat", 2), ("car", 1)]
    );
}

#[test]
fn test_ties_alphabetical() {
    let mut engine = AutocompleteEngine::new();
    engine.train("bat");
    engine.train("ban");

    assert_eq!(
        pairs(&engine.suggest("ba").unwrap()),
        vec![("ban", 1), ("bat", 1)]
    );
}

#[test]
fn test_single_letter_word() {
    let mut engine = AutocompleteEngine::new();
    engine.train("a");

    assert_eq!(pairs(&engine.suggest("a").unwrap()), vec![("a", 1)]);
}

#[test]
fn test_untrained_letter_is_empty() {
    let engine = AutocompleteEngine::new();
    assert!(engine.suggest("xyz").unwrap().is_empty());
}

#[test]
fn test_digit_prefix_is_invalid() {
    let engine = AutocompleteEngine::new();
    assert_eq!(
        engine.suggest("7up"),
        Err(AutocompleteError::InvalidPrefix('7'))
    );
    assert_eq!(
        engine.suggest("3cat"),
        Err(AutocompleteError::InvalidPrefix('3'))
    );
}

// ============================================================================
// Engine Properties
// ============================================================================

#[test]
fn test_every_prefix_finds_trained_word() {
    let mut engine = AutocompleteEngine::new();
    let words = ["alphabet", "alpine", "zebra", "theme", "the", "q"];
    engine.train(&words.join(" "));

    for word in words {
        for end in 1..=word.len() {
            let prefix = &word[..end];
            let found = engine.suggest(prefix).unwrap();
            assert!(
                found.iter().any(|c| c.suggestion == word),
                "'{}' missing for prefix '{}'",
                word,
                prefix
            );
        }
    }
}

#[test]
fn test_repeat_training_counts() {
    let mut engine = AutocompleteEngine::new();
    for n in 1..=5u32 {
        engine.train("echo");
        let found = engine.suggest("echo").unwrap();
        assert_eq!(pairs(&found), vec![("echo", n)]);
    }
}

#[test]
fn test_empty_and_missing_fragments() {
    let mut engine = AutocompleteEngine::new();
    engine.train("something");

    assert_eq!(engine.suggest(""), Ok(vec![]));
    assert_eq!(engine.get_suggestions(None), Ok(vec![]));
    assert_eq!(engine.get_suggestions(Some("")), Ok(vec![]));
}

#[test]
fn test_results_are_ordered() {
    let mut engine = AutocompleteEngine::new();
    engine.train(
        "she sells sea shells by the sea shore the shells she sells are \
         surely seashells so if she sells shells on the seashore",
    );

    let found = engine.suggest("s").unwrap();
    assert!(found.len() > 5);
    assert_ranked(&found);
    assert_eq!(found[0].suggestion, "sells");
    assert_eq!(found[0].likelihood, 3);
}

#[test]
fn test_query_is_idempotent() {
    let mut engine = AutocompleteEngine::new();
    engine.train("one two three two three three");

    let first = engine.suggest("t").unwrap();
    let second = engine.suggest("t").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_returned_candidates_do_not_change() {
    let mut engine = AutocompleteEngine::new();
    engine.train("cat");
    let before = engine.suggest("c").unwrap();

    engine.train("cat cow");
    assert_eq!(pairs(&before), vec![("cat", 1)]);
    assert_eq!(
        pairs(&engine.suggest("c").unwrap()),
        vec![("cat", 2), ("cow", 1)]
    );
}

#[test]
fn test_punctuation_is_stripped_everywhere() {
    let mut engine = AutocompleteEngine::new();
    engine.train("Hello, world! \"Hello\" again... -- !!!");

    assert_eq!(pairs(&engine.suggest("hel").unwrap()), vec![("hello", 2)]);
    assert_eq!(pairs(&engine.suggest("'WOR").unwrap()), vec![("world", 1)]);
    assert_eq!(engine.len(), 3);
}

#[test]
fn test_probability_is_not_populated() {
    let mut engine = AutocompleteEngine::new();
    engine.train("alpha beta alpha");

    let found = engine.suggest("a").unwrap();
    assert!(found.iter().all(|c| c.probability.is_none()));
}

// ============================================================================
// Corpus Loading
// ============================================================================

#[test]
fn test_train_reader_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "It was the best of times,").unwrap();
    writeln!(file, "it was the worst of times.").unwrap();

    let mut engine = AutocompleteEngine::new();
    let reader = std::io::BufReader::new(file.reopen().unwrap());
    let report = engine.train_reader(reader).unwrap();

    assert_eq!(report.accepted, 12);
    assert_eq!(report.skipped, 0);
    assert_eq!(
        pairs(&engine.suggest("w").unwrap()),
        vec![("was", 2), ("worst", 1)]
    );
}

// ============================================================================
// Shell Commands
// ============================================================================

#[test]
fn test_train_then_suggest_commands() {
    let mut engine = AutocompleteEngine::new();
    let registry = create_registry();
    let mut ctx = ShellContext::new(&mut engine).with_registry(&registry);

    let train = registry.get("train").expect("Train command should exist");
    let result = train.execute(&["cat", "cat", "car"], &mut ctx);
    assert!(matches!(result, CommandResult::Success(_)));

    let suggest = registry.get("suggest").expect("Suggest command should exist");
    match suggest.execute(&["ca"], &mut ctx) {
        CommandResult::Success(Some(out)) => {
            let cat = out.find("cat").unwrap();
            let car = out.find("car").unwrap();
            assert!(cat < car);
        }
        other => panic!("Expected suggestions, got {:?}", other),
    }
}

#[test]
fn test_suggest_command_invalid_prefix() {
    let mut engine = AutocompleteEngine::new();
    let registry = create_registry();
    let mut ctx = ShellContext::new(&mut engine).with_registry(&registry);

    let suggest = registry.get("s").expect("Suggest alias should exist");
    assert!(matches!(
        suggest.execute(&["7up"], &mut ctx),
        CommandResult::Error(_)
    ));
}

#[test]
fn test_load_command() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "apple apricot\navocado apple\n").unwrap();

    let mut engine = AutocompleteEngine::new();
    let registry = create_registry();
    let mut ctx = ShellContext::new(&mut engine).with_registry(&registry);

    let load = registry.get("load").expect("Load command should exist");
    let path = file.path().to_str().unwrap().to_string();
    assert!(matches!(
        load.execute(&[path.as_str()], &mut ctx),
        CommandResult::Success(_)
    ));
    drop(ctx);

    assert_eq!(
        pairs(&engine.suggest("ap").unwrap()),
        vec![("apple", 2), ("apricot", 1)]
    );
}

#[test]
fn test_command_aliases() {
    let registry = create_registry();

    for alias in ["t", "learn", "s", "complete", "l", "h", "?", "q", "exit"] {
        assert!(registry.get(alias).is_some(), "missing alias {}", alias);
    }
}

#[test]
fn test_registry_completions() {
    let registry = create_registry();

    assert_eq!(registry.completions("he"), vec!["help"]);
    assert_eq!(registry.completions("l"), vec!["l", "learn", "load"]);
    assert!(registry.completions("").len() >= 5);
}

#[test]
fn test_shell_session() {
    let shell = Shell::default();

    shell.execute_line("train Sing a song of sixpence").unwrap();
    shell.execute_line("train a pocket full of rye").unwrap();

    match shell.execute_line("suggest s").unwrap() {
        CommandResult::Success(Some(out)) => {
            assert!(out.contains("sing"));
            assert!(out.contains("sixpence"));
            assert!(out.contains("song"));
        }
        other => panic!("Expected suggestions, got {:?}", other),
    }

    assert!(matches!(
        shell.execute_line("quit").unwrap(),
        CommandResult::Exit
    ));
}
