use std::rc::Rc;

use tracing::debug;

use super::{Book, Catalog, CatalogError, SortField};

/// A cursor over the books of a [`Catalog`], in the order of one field.
///
/// The cursor always stays within the books of the selected order: stepping
/// back from the first book or forward from the last one leaves it in place.
#[derive(Clone, Debug)]
pub struct Browser {
    catalog: Catalog,
    field: SortField,
    books: Vec<Rc<Book>>,
    position: usize,
}

impl Browser {
    /// Starts browsing `catalog` by ISBN, on the first book.
    ///
    /// # Errors
    ///
    /// Propagates [`Catalog::ordered`].
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let field = SortField::default();
        let books = catalog.ordered(field)?;
        Ok(Self {
            catalog,
            field,
            books,
            position: 0,
        })
    }

    /// Switches to the order of `field` and moves to its first book.
    ///
    /// # Errors
    ///
    /// Propagates [`Catalog::ordered`]; the browser is unchanged on error.
    pub fn select(&mut self, field: SortField) -> Result<(), CatalogError> {
        self.books = self.catalog.ordered(field)?;
        self.field = field;
        self.position = 0;
        debug!(%field, books = self.books.len(), "browsing order selected");
        Ok(())
    }

    /// Returns the book under the cursor, or `None` if the order is empty.
    #[must_use]
    pub fn current(&self) -> Option<&Book> {
        self.books.get(self.position).map(|book| &**book)
    }

    /// Moves to the first book; `None` if the order is empty.
    pub fn first_book(&mut self) -> Option<&Book> {
        self.position = 0;
        self.current()
    }

    /// Moves to the last book; stays at position 0 and returns `None` if the
    /// order is empty.
    pub fn last_book(&mut self) -> Option<&Book> {
        self.position = self.books.len().saturating_sub(1);
        self.current()
    }

    /// Moves to the next book unless the cursor is on the last one.
    pub fn next_book(&mut self) -> Option<&Book> {
        if self.position + 1 < self.books.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Moves to the previous book unless the cursor is on the first one.
    pub fn previous_book(&mut self) -> Option<&Book> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Zero-based index of the cursor within the current order.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of books in the current order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub fn field(&self) -> SortField {
        self.field
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
