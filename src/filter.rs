// In-memory filters over a fetched book list. All of these preserve the
// server's ordering and never fail.

use crate::book::Book;

/// Books whose title or author contains `term`, ignoring case.
/// Callers reject an empty term before getting here; whitespace is kept.
pub fn search_by_text(term: &str, books: &[Book]) -> Vec<Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Books whose read flag equals `read`.
pub fn filter_by_status(read: bool, books: &[Book]) -> Vec<Book> {
    books.iter().filter(|b| b.read == read).cloned().collect()
}

/// Titles in list order, for the delete selector. Duplicates are kept.
pub fn titles(books: &[Book]) -> Vec<String> {
    books.iter().map(|b| b.title.clone()).collect()
}

/// First book (in list order) with exactly this title.
pub fn find_by_title<'a>(title: &str, books: &'a [Book]) -> Option<&'a Book> {
    books.iter().find(|b| b.title == title)
}

/// How many books share exactly this title.
pub fn count_title(title: &str, books: &[Book]) -> usize {
    books.iter().filter(|b| b.title == title).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookId;

    fn book(id: i64, title: &str, author: &str, read: bool) -> Book {
        Book {
            id: BookId::Number(id),
            title: title.into(),
            author: author.into(),
            year: 1965,
            genre: "Fiction".into(),
            read,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Dune", "Frank Herbert", true),
            book(2, "Emma", "Jane Austen", false),
            book(3, "Children of Dune", "Frank Herbert", false),
            book(4, "Persuasion", "Jane Austen", true),
            book(5, "Emma", "Someone Else", true),
        ]
    }

    #[test]
    fn search_matches_author_case_insensitively() {
        let hits = search_by_text("herbert", &shelf());
        let ids: Vec<_> = hits.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec![BookId::Number(1), BookId::Number(3)]);
    }

    #[test]
    fn search_matches_title_substring() {
        let hits = search_by_text("DUNE", &shelf());
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|b| b.title.to_lowercase().contains("dune")));
    }

    #[test]
    fn search_results_are_a_subset() {
        let books = shelf();
        for term in ["a", "e", "Austen", "zzz", "of"] {
            let hits = search_by_text(term, &books);
            let needle = term.to_lowercase();
            for hit in &hits {
                assert!(books.contains(hit));
                assert!(
                    hit.title.to_lowercase().contains(&needle)
                        || hit.author.to_lowercase().contains(&needle)
                );
            }
        }
        assert!(search_by_text("zzz", &books).is_empty());
    }

    #[test]
    fn status_filters_partition_the_list() {
        let lists = vec![Vec::new(), shelf(), vec![book(9, "Solo", "A", false)]];
        for books in lists {
            let read = filter_by_status(true, &books);
            let unread = filter_by_status(false, &books);
            assert_eq!(read.len() + unread.len(), books.len());
            assert!(read.iter().all(|b| !unread.contains(b)));
            assert!(books.iter().all(|b| read.contains(b) || unread.contains(b)));
        }
    }

    #[test]
    fn status_filter_on_empty_list_is_empty() {
        assert!(filter_by_status(true, &[]).is_empty());
    }

    #[test]
    fn find_by_title_returns_first_match() {
        let books = shelf();
        let found = find_by_title("Emma", &books).unwrap();
        assert_eq!(found.id, BookId::Number(2));
        assert_eq!(count_title("Emma", &books), 2);
        assert!(find_by_title("emma", &books).is_none());
    }

    #[test]
    fn titles_keep_order_and_duplicates() {
        assert_eq!(
            titles(&shelf()),
            vec!["Dune", "Emma", "Children of Dune", "Persuasion", "Emma"]
        );
    }
}
