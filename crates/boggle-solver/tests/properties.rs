use std::collections::{BTreeSet, HashSet};

use boggle_solver::{find_words, solve, Adjacency, Board, Movement, Position, SearchConfig, WordList};
use proptest::prelude::*;

fn arb_board() -> impl Strategy<Value = Board> {
    (1usize..=3, 1usize..=3).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::sample::select(vec!["a", "b", "qu"]), rows * cols)
            .prop_map(move |tiles| Board::new(rows, cols, tiles).unwrap())
    })
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("(a|b|qu){1,5}", 0..24)
}

fn arb_movement() -> impl Strategy<Value = Movement> {
    prop_oneof![Just(Movement::Separate), Just(Movement::Mixed)]
}

fn touches(rule: Adjacency, a: Position, b: Position) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    match rule {
        Adjacency::Orthogonal => dr + dc == 1,
        Adjacency::DiagonalOnly => dr == 1 && dc == 1,
        Adjacency::Mixed => dr.max(dc) == 1,
    }
}

/// Plain recursive enumeration used as the reference answer.
fn reference_walk(
    board: &Board,
    dict: &WordList,
    rule: Adjacency,
    min_length: usize,
    path: &mut Vec<Position>,
    prefix: &str,
    out: &mut BTreeSet<String>,
) {
    use boggle_solver::Dictionary;

    let Some(&here) = path.last() else { return };
    for next in board.positions() {
        if path.contains(&next) || !touches(rule, here, next) {
            continue;
        }
        let word = format!("{prefix}{}", &board[next]);
        path.push(next);
        if path.len() >= min_length && dict.is_valid(&word) {
            out.insert(word.clone());
        }
        reference_walk(board, dict, rule, min_length, path, &word, out);
        path.pop();
    }
}

fn reference_words(
    board: &Board,
    dict: &WordList,
    movement: Movement,
    min_length: usize,
) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for start in board.positions() {
        for &rule in movement.strategies() {
            let mut path = vec![start];
            reference_walk(board, dict, rule, min_length, &mut path, &board[start], &mut out);
        }
    }
    out
}

fn config(min_length: usize, movement: Movement) -> SearchConfig {
    SearchConfig {
        min_length,
        movement,
        prune_prefixes: false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn matches_reference_enumeration(
        board in arb_board(),
        words in arb_words(),
        movement in arb_movement(),
        min_length in 0usize..5,
    ) {
        let dict = WordList::new(&words).unwrap();
        let found: BTreeSet<String> = solve(&board, &dict, &config(min_length, movement))
            .words
            .into_iter()
            .collect();
        prop_assert_eq!(found, reference_words(&board, &dict, movement, min_length));
    }

    #[test]
    fn repeated_searches_agree(
        board in arb_board(),
        words in arb_words(),
        movement in arb_movement(),
    ) {
        let dict = WordList::new(&words).unwrap();
        let first = solve(&board, &dict, &config(2, movement));
        let second = solve(&board, &dict, &config(2, movement));
        prop_assert_eq!(first.words, second.words);
        prop_assert_eq!(first.paths_explored, second.paths_explored);
    }

    #[test]
    fn discoveries_are_unique_simple_paths(
        board in arb_board(),
        words in arb_words(),
        movement in arb_movement(),
        min_length in 0usize..5,
    ) {
        let dict = WordList::new(&words).unwrap();
        let mut seen = HashSet::new();
        for found in find_words(&board, &dict, &config(min_length, movement)) {
            prop_assert!(seen.insert(found.word.clone()), "{} reported twice", found.word);

            let cells: HashSet<_> = found.path.iter().collect();
            prop_assert_eq!(cells.len(), found.path.len());
            prop_assert!(found.path.len() >= min_length.max(2));

            let spelled: String = found.path.iter().map(|&p| &board[p]).collect();
            prop_assert_eq!(&spelled, &found.word);
            prop_assert!(words.iter().any(|w| w == &found.word));

            let walked_by_one_rule = movement.strategies().iter().any(|&rule| {
                found.path.windows(2).all(|step| touches(rule, step[0], step[1]))
            });
            prop_assert!(walked_by_one_rule);
        }
    }

    #[test]
    fn mixed_covers_separate(board in arb_board(), words in arb_words()) {
        let dict = WordList::new(&words).unwrap();
        let separate = solve(&board, &dict, &config(2, Movement::Separate));
        let mixed: HashSet<String> = solve(&board, &dict, &config(2, Movement::Mixed))
            .words
            .into_iter()
            .collect();
        for word in separate.words {
            prop_assert!(mixed.contains(&word), "{} missing from mixed search", word);
        }
    }

    #[test]
    fn prefix_pruning_keeps_word_set(
        board in arb_board(),
        words in arb_words(),
        movement in arb_movement(),
    ) {
        let dict = WordList::new(&words).unwrap();
        let plain = solve(&board, &dict, &config(2, movement));
        let pruned = solve(&board, &dict, &SearchConfig {
            prune_prefixes: true,
            ..config(2, movement)
        });
        prop_assert_eq!(plain.words, pruned.words);
        prop_assert!(pruned.paths_explored <= plain.paths_explored);
    }
}
