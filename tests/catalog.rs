#![cfg(feature = "std")]

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use bst_catalog::catalog::{Book, Browser, Catalog, CatalogError, CatalogFormat, SortField};

fn data_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/books.txt")
}

fn load() -> Catalog {
    Catalog::open(data_file(), &CatalogFormat::default()).expect("fixture loads")
}

fn walk(browser: &mut Browser) -> Vec<String> {
    let mut seen = Vec::new();
    let mut book = browser.first_book().map(|book| book.isbn.clone());
    while let Some(isbn) = book {
        seen.push(isbn);
        if browser.position() + 1 == browser.len() {
            break;
        }
        book = browser.next_book().map(|book| book.isbn.clone());
    }
    seen
}

#[test]
fn header_is_skipped_and_every_record_loaded() {
    let catalog = load();
    assert_eq!(catalog.records(), 11);
    assert_eq!(catalog.len(SortField::Isbn), 11);
    // two books by the same author, two rated 4.25
    assert_eq!(catalog.len(SortField::Author), 10);
    assert_eq!(catalog.len(SortField::AverageRating), 10);
    assert_eq!(catalog.find_isbn("isbn"), None);
}

#[test]
fn year_order_walks_oldest_first() {
    let mut browser = Browser::new(load()).unwrap();
    browser.select(SortField::Year).unwrap();
    let years: Vec<i32> = walk(&mut browser)
        .iter()
        .map(|isbn| browser.catalog().find_isbn(isbn).map_or(0, |book| book.year))
        .collect();
    assert_eq!(years, [1813, 1925, 1937, 1951, 1960, 1997, 2000, 2003, 2005, 2008, 2012]);
}

#[test]
fn isbn_order_is_lexicographic() {
    let mut browser = Browser::new(load()).unwrap();
    let isbns = walk(&mut browser);
    let mut sorted = isbns.clone();
    sorted.sort();
    assert_eq!(isbns, sorted);
    assert_eq!(isbns.first().map(String::as_str), Some("1416524797"));
}

#[test]
fn author_index_keeps_the_later_record() {
    let catalog = load();
    let by_author = catalog.ordered(SortField::Author).unwrap();
    let rowling: Vec<&Book> = by_author.iter().map(|book| &**book).filter(|book| book.author == "J.K. Rowling").collect();
    assert_eq!(rowling.len(), 1);
    assert_eq!(rowling[0].year, 2003);
}

#[test]
fn rating_order_ends_on_the_highest() {
    let mut browser = Browser::new(load()).unwrap();
    browser.select(SortField::AverageRating).unwrap();
    assert_eq!(browser.first_book().map(|book| book.average_rating), Some(3.57));
    assert_eq!(browser.last_book().map(|book| book.average_rating), Some(4.46));
    assert_eq!(browser.next_book().map(|book| book.average_rating), Some(4.46));
}

#[test]
fn headerless_input_with_another_delimiter() {
    let format = CatalogFormat {
        delimiter: '\t',
        skip_header: false,
        ..CatalogFormat::default()
    };
    let text = "1\t1\t9780\tLe Guin\t1974\tThe Dispossessed\tThe Dispossessed\t4.21\r\n";
    let catalog = Catalog::parse(text, &format).unwrap();
    assert_eq!(catalog.records(), 1);
    assert_eq!(catalog.find_isbn("9780").map(|book| book.average_rating), Some(4.21));
}

#[test]
fn malformed_record_stops_loading() {
    let text = "header\n1~2~i~a~2000~o~t~4.0\n1~2~j~b~2001\n";
    let error = Catalog::parse(text, &CatalogFormat::default()).unwrap_err();
    assert_eq!(error.to_string(), "line 3: record has no Original Title column");
    assert!(matches!(error, CatalogError::MissingField { line: 3, field: SortField::OriginalTitle }));
}
