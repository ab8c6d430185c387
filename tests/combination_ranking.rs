use booktest::library::Book;
use booktest::selection::CombinationRanker;
use booktest::types::{BookId, RankingError, RankingParams};

fn make_book(ordinal: u32, title: &str, chapters: &str, chapter_count: usize) -> Book {
    Book::ingest(BookId::from_ordinal(ordinal), title, chapters, chapter_count).unwrap()
}

/// The four-book worked example: A:"0011", B:"0101", C:"0110", D:"1100",
/// choosing 3 of 4 with 4 chapters.
fn example_library() -> Vec<Book> {
    vec![
        make_book(1, "A", "0011", 4),
        make_book(2, "B", "0101", 4),
        make_book(3, "C", "0110", 4),
        make_book(4, "D", "1100", 4),
    ]
}

fn params(subset_size: usize, chapter_count: usize, list_size: usize) -> RankingParams {
    RankingParams {
        subset_size,
        chapter_count,
        list_size,
    }
}

fn member_ids(result: &booktest::types::RankedCombination) -> Vec<u32> {
    result.books.iter().map(|b| b.id.get()).collect()
}

#[test]
fn worked_example_scores_and_order() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    let result = ranker.rank(&library, &params(3, 4, 4)).unwrap();

    assert_eq!(result.ranking.combinations_considered, 4);
    assert_eq!(result.ranking.combinations_listed, 4);
    assert_eq!(result.ranking.best_score, Some(4));

    // {A,B,C} collects a group of 3 at position 0 plus three groups of 2,
    // for a score of 5; every other triple scores 4. Among the threes,
    // {A,B,D} and {A,C,D} share reps [2,2,2,2] and fall back to enumeration
    // order, while {B,C,D} with reps [3,2,2] ranks after both.
    let ids: Vec<Vec<u32>> = result.combinations.iter().map(member_ids).collect();
    assert_eq!(
        ids,
        vec![
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
            vec![1, 2, 3],
        ]
    );

    let scores: Vec<usize> = result.combinations.iter().map(|c| c.score).collect();
    assert_eq!(scores, vec![4, 4, 4, 5]);

    assert_eq!(result.combinations[0].why.reps, vec![2, 2, 2, 2]);
    assert_eq!(result.combinations[2].why.reps, vec![3, 2, 2]);
    assert_eq!(result.combinations[3].why.reps, vec![3, 2, 2, 2]);

    // {A,B,D}: token '0' collides at chapters 1 and 3, token '1' at 2 and 4.
    let why = &result.combinations[0].why;
    assert_eq!(why.chapters.get(&'0'), Some(&vec![1, 3]));
    assert_eq!(why.chapters.get(&'1'), Some(&vec![2, 4]));
}

#[test]
fn list_size_truncates_best_first() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    let result = ranker.rank(&library, &params(3, 4, 1)).unwrap();

    assert_eq!(result.ranking.combinations_considered, 4);
    assert_eq!(result.ranking.combinations_listed, 1);
    assert_eq!(result.combinations.len(), 1);
    assert_eq!(member_ids(&result.combinations[0]), vec![1, 2, 4]);
    assert_eq!(result.combinations[0].score, 4);
}

#[test]
fn oversized_list_size_returns_everything() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    let result = ranker.rank(&library, &params(3, 4, 100)).unwrap();

    assert_eq!(result.combinations.len(), 4, "no padding, no duplicates");
    assert_eq!(result.ranking.combinations_listed, 4);
    assert_eq!(result.ranking.list_size, 100);
}

#[test]
fn subset_size_equal_to_library_is_single_result() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    let result = ranker.rank(&library, &params(4, 4, 5)).unwrap();

    assert_eq!(result.ranking.combinations_considered, 1);
    assert_eq!(result.combinations.len(), 1);
    assert_eq!(member_ids(&result.combinations[0]), vec![1, 2, 3, 4]);
}

#[test]
fn insufficient_books_fails_before_enumeration() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    let err = ranker.rank(&library, &params(5, 4, 1)).unwrap_err();
    match err {
        RankingError::InsufficientBooks { have, need } => {
            assert_eq!(have, 4);
            assert_eq!(need, 5);
        }
        other => panic!("expected InsufficientBooks, got {other:?}"),
    }
}

#[test]
fn short_chapter_data_fails_before_enumeration() {
    let mut library = example_library();
    // Bypass ingest to model data that degraded after loading.
    library[2].chapters = "01".to_string();

    let ranker = CombinationRanker::default();
    let err = ranker.rank(&library, &params(3, 4, 1)).unwrap_err();
    match err {
        RankingError::ChapterLength { id, have, need } => {
            assert_eq!(id.get(), 3);
            assert_eq!(have, 2);
            assert_eq!(need, 4);
        }
        other => panic!("expected ChapterLength, got {other:?}"),
    }
}

#[test]
fn zero_parameters_are_rejected() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    for bad in [params(0, 4, 1), params(3, 0, 1), params(3, 4, 0)] {
        let err = ranker.rank(&library, &bad).unwrap_err();
        assert!(
            matches!(err, RankingError::InvalidParameter { .. }),
            "expected InvalidParameter, got {err:?}"
        );
    }
}

#[test]
fn metadata_is_consistent_with_listed_combinations() {
    let library = example_library();
    let ranker = CombinationRanker::default();

    let result = ranker.rank(&library, &params(2, 4, 3)).unwrap();

    assert_eq!(result.ranking.combinations_considered, 6);
    assert_eq!(result.ranking.combinations_listed, result.combinations.len());
    assert_eq!(result.ranking.books_considered, 4);
    assert_eq!(
        result.ranking.best_score,
        result.combinations.first().map(|c| c.score)
    );
    for combination in &result.combinations {
        assert_eq!(combination.books.len(), 2);
    }
}
