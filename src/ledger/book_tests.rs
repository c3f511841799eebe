use pretty_assertions::assert_eq;

use super::book::Book;
use super::record::OpenRecord;

#[test]
fn test_add_groups_by_category() {
    let mut book = Book::new();
    book.add(&OpenRecord::new("2023-01-05", "Assets:Cash", "", "Cash", "Assets"));
    book.add(&OpenRecord::new("2023-02-01", "Expenses:Food", "", "", "Expenses"));
    book.add(&OpenRecord::new("2023-03-01", "Assets:Bank", "USD", "", "Assets"));

    assert_eq!(book.len(), 2);
    assert_eq!(
        book.lines("Assets").unwrap(),
        &vec![
            "2023-01-05 open Assets:Cash CNY  ; Cash".to_string(),
            "2023-03-01 open Assets:Bank USD".to_string(),
        ]
    );
    assert_eq!(
        book.lines("Expenses").unwrap(),
        &vec!["2023-02-01 open Expenses:Food CNY".to_string()]
    );
}

#[test]
fn test_categories_keep_encounter_order() {
    let mut book = Book::new();
    for category in ["负债", "Assets", "Income", "Assets", "负债"] {
        book.add(&OpenRecord::new("2023-01-01", "Assets:X", "", "", category));
    }

    let categories: Vec<&String> = book.groups_iter().map(|(category, _)| category).collect();
    assert_eq!(categories, ["负债", "Assets", "Income"]);
}

#[test]
fn test_blank_category_goes_to_unknown() {
    let mut book = Book::new();
    book.add(&OpenRecord::new("", "Assets:Bank", "USD", "", ""));
    book.add(&OpenRecord::new("", "Assets:Cash", "", "", "  "));

    assert_eq!(book.len(), 1);
    assert_eq!(
        book.lines("Unknown").unwrap(),
        &vec![
            "1970-01-01 open Assets:Bank USD".to_string(),
            "1970-01-01 open Assets:Cash CNY".to_string(),
        ]
    );
}

#[test]
fn test_categories_are_distinct_under_exact_equality() {
    let mut book = Book::new();
    book.add(&OpenRecord::new("2023-01-01", "Assets:A", "", "", "Assets"));
    book.add(&OpenRecord::new("2023-01-01", "Assets:B", "", "", "assets"));

    assert_eq!(book.len(), 2);
    assert_eq!(book.lines("Assets").unwrap().len(), 1);
    assert_eq!(book.lines("assets").unwrap().len(), 1);
}

#[test]
fn test_empty_book() {
    let book = Book::new();

    assert!(book.is_empty());
    assert_eq!(book.groups_iter().count(), 0);
    assert_eq!(book.lines("Assets"), None);
}
