//! Book catalog indexes built on [`BstMap`].
//!
//! A [`Catalog`] is loaded from delimited text, one record per line, and
//! indexes every [`Book`] once per [`SortField`]: six maps holding the same
//! books, each ordered by a different field. A [`Browser`] walks one of those
//! orders with a cursor.
//!
//! An index keeps one book per key. When two records share a key in some
//! field (two books by the same author, say) the later record replaces the
//! earlier one in that index only, so an index can hold fewer books than the
//! catalog has records.
//!
//! # Example
//!
//! ```
//! use bst_catalog::catalog::{Browser, Catalog, CatalogFormat, SortField};
//!
//! let text = "\
//! id~book_id~isbn~authors~year~original_title~title~rating
//! 1~10~0439023483~Suzanne Collins~2008~The Hunger Games~The Hunger Games~4.34
//! 2~20~0316015849~Stephenie Meyer~2005~Twilight~Twilight~3.57
//! 3~30~0061120081~Harper Lee~1960~To Kill a Mockingbird~To Kill a Mockingbird~4.25
//! ";
//! let catalog = Catalog::parse(text, &CatalogFormat::default())?;
//!
//! let mut browser = Browser::new(catalog)?;
//! browser.select(SortField::Year)?;
//! assert_eq!(browser.current().map(|book| book.year), Some(1960));
//! assert_eq!(browser.last_book().map(|book| book.year), Some(2008));
//! # Ok::<(), bst_catalog::catalog::CatalogError>(())
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::BstMap;

mod book;
mod browser;
mod format;

pub use book::{Book, Rating};
pub use browser::Browser;
pub use format::{CatalogFormat, Columns};

/// Errors raised while loading or reading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog")]
    Io(#[from] io::Error),

    #[error("line {line}: record has no {field} column")]
    MissingField { line: usize, field: SortField },

    #[error("line {line}: year '{value}' is not an integer")]
    InvalidYear {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("line {line}: rating '{value}' is not a number")]
    InvalidRating {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("unknown sort field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    Index(#[from] crate::Error),
}

/// A field the catalog can be browsed by.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SortField {
    #[default]
    Isbn,
    Author,
    Year,
    OriginalTitle,
    Title,
    AverageRating,
}

impl SortField {
    /// Every field, in display order.
    pub const ALL: [SortField; 6] = [
        SortField::Isbn,
        SortField::Author,
        SortField::Year,
        SortField::OriginalTitle,
        SortField::Title,
        SortField::AverageRating,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SortField::Isbn => "ISBN",
            SortField::Author => "Author",
            SortField::Year => "Year",
            SortField::OriginalTitle => "Original Title",
            SortField::Title => "Title",
            SortField::AverageRating => "Average Rating",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    /// Parses a field from its [`label`](SortField::label), ignoring ASCII case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortField::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownField(s.to_owned()))
    }
}

/// The books of a catalog, indexed once per [`SortField`].
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    by_isbn: BstMap<String, Rc<Book>>,
    by_author: BstMap<String, Rc<Book>>,
    by_year: BstMap<i32, Rc<Book>>,
    by_original_title: BstMap<String, Rc<Book>>,
    by_title: BstMap<String, Rc<Book>>,
    by_rating: BstMap<Rating, Rc<Book>>,
    records: usize,
}

impl Catalog {
    /// Creates a catalog with no books.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog from the file at `path`.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_reader`].
    pub fn open(path: impl AsRef<Path>, format: &CatalogFormat) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening catalog");
        Self::from_reader(BufReader::new(File::open(path)?), format)
    }

    /// Loads a catalog from text already in memory.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_reader`].
    pub fn parse(text: &str, format: &CatalogFormat) -> Result<Self, CatalogError> {
        Self::from_reader(text.as_bytes(), format)
    }

    /// Loads a catalog, one record per line.
    ///
    /// The first line is skipped when `format.skip_header` is set, and blank
    /// lines are ignored. Loading stops at the first malformed record.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] when reading fails, or the error for the first
    /// record [`CatalogFormat::parse_record`] rejects.
    pub fn from_reader(reader: impl BufRead, format: &CatalogFormat) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if (index == 0 && format.skip_header) || line.trim().is_empty() {
                continue;
            }
            let book = format.parse_record(index + 1, &line)?;
            trace!(line = index + 1, isbn = %book.isbn, "parsed record");
            catalog.insert(book);
        }

        debug!(
            records = catalog.records,
            isbn = catalog.by_isbn.len(),
            author = catalog.by_author.len(),
            year = catalog.by_year.len(),
            original_title = catalog.by_original_title.len(),
            title = catalog.by_title.len(),
            rating = catalog.by_rating.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Adds `book` to every index.
    pub fn insert(&mut self, book: Book) {
        let book = Rc::new(book);
        let replaced = [
            (SortField::Isbn, self.by_isbn.insert(book.isbn.clone(), Rc::clone(&book))),
            (SortField::Author, self.by_author.insert(book.author.clone(), Rc::clone(&book))),
            (SortField::Year, self.by_year.insert(book.year, Rc::clone(&book))),
            (
                SortField::OriginalTitle,
                self.by_original_title.insert(book.original_title.clone(), Rc::clone(&book)),
            ),
            (SortField::Title, self.by_title.insert(book.title.clone(), Rc::clone(&book))),
            (SortField::AverageRating, self.by_rating.insert(Rating(book.average_rating), Rc::clone(&book))),
        ];

        for (field, previous) in replaced {
            if let Some(previous) = previous {
                debug!(%field, replaced = %previous.isbn, by = %book.isbn, "index key already present");
            }
        }
        self.records += 1;
    }

    /// Returns the number of records added, including those later replaced in
    /// some index.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Returns true if no record was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Returns the number of books in the index for `field`.
    #[must_use]
    pub fn len(&self, field: SortField) -> usize {
        match field {
            SortField::Isbn => self.by_isbn.len(),
            SortField::Author => self.by_author.len(),
            SortField::Year => self.by_year.len(),
            SortField::OriginalTitle => self.by_original_title.len(),
            SortField::Title => self.by_title.len(),
            SortField::AverageRating => self.by_rating.len(),
        }
    }

    /// Returns the books of the index for `field`, in ascending order of that
    /// field.
    ///
    /// # Errors
    ///
    /// Does not fail in practice: the extraction buffer is always allocated
    /// with non-zero capacity. The [`CatalogError::Index`] path is kept so a
    /// failed extraction surfaces instead of being hidden.
    pub fn ordered(&self, field: SortField) -> Result<Vec<Rc<Book>>, CatalogError> {
        let buffer: Vec<Rc<Book>> = Vec::with_capacity(self.len(field).max(1));
        let books = match field {
            SortField::Isbn => self.by_isbn.to_value_array(buffer),
            SortField::Author => self.by_author.to_value_array(buffer),
            SortField::Year => self.by_year.to_value_array(buffer),
            SortField::OriginalTitle => self.by_original_title.to_value_array(buffer),
            SortField::Title => self.by_title.to_value_array(buffer),
            SortField::AverageRating => self.by_rating.to_value_array(buffer),
        }?;
        Ok(books)
    }

    /// Looks a book up by its ISBN.
    #[must_use]
    pub fn find_isbn(&self, isbn: &str) -> Option<&Book> {
        self.by_isbn.get(isbn).map(|book| &**book)
    }

    /// Drops every book from every index.
    pub fn clear(&mut self) {
        self.by_isbn.clear();
        self.by_author.clear();
        self.by_year.clear();
        self.by_original_title.clear();
        self.by_title.clear();
        self.by_rating.clear();
        self.records = 0;
    }
}
