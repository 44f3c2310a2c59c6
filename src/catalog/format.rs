use super::{Book, CatalogError, SortField};

/// Zero-based column of each field within a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Columns {
    /// Column of the ISBN. Defaults to 2.
    pub isbn: usize,
    /// Column of the author. Defaults to 3.
    pub author: usize,
    /// Column of the publication year. Defaults to 4.
    pub year: usize,
    /// Column of the original title. Defaults to 5.
    pub original_title: usize,
    /// Column of the title. Defaults to 6.
    pub title: usize,
    /// Column of the average rating. Defaults to 7.
    pub average_rating: usize,
}

impl Columns {
    /// Returns the column holding `field`.
    #[must_use]
    pub const fn of(&self, field: SortField) -> usize {
        match field {
            SortField::Isbn => self.isbn,
            SortField::Author => self.author,
            SortField::Year => self.year,
            SortField::OriginalTitle => self.original_title,
            SortField::Title => self.title,
            SortField::AverageRating => self.average_rating,
        }
    }
}

impl Default for Columns {
    /// The layout of the book data file: two record ids the browser never
    /// shows, then the six browsable fields.
    fn default() -> Self {
        Self {
            isbn: 2,
            author: 3,
            year: 4,
            original_title: 5,
            title: 6,
            average_rating: 7,
        }
    }
}

/// How a catalog file is laid out.
///
/// # Examples
///
/// ```
/// use bst_catalog::catalog::{Catalog, CatalogFormat};
///
/// let format = CatalogFormat {
///     delimiter: '|',
///     skip_header: false,
///     ..CatalogFormat::default()
/// };
/// let catalog = Catalog::parse("1|2|0439023483|Suzanne Collins|2008|The Hunger Games|The Hunger Games|4.34", &format)?;
/// assert_eq!(catalog.records(), 1);
/// # Ok::<(), bst_catalog::catalog::CatalogError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CatalogFormat {
    /// Separates the fields of a record. Defaults to `~`.
    pub delimiter: char,
    /// Whether the first line is a header to ignore. Defaults to `true`.
    pub skip_header: bool,
    /// Where each field sits within a record. Defaults to [`Columns::default`].
    pub columns: Columns,
}

impl Default for CatalogFormat {
    fn default() -> Self {
        Self {
            delimiter: '~',
            skip_header: true,
            columns: Columns::default(),
        }
    }
}

impl CatalogFormat {
    /// Parses one record. `line` is the 1-based line number used in errors.
    ///
    /// Text fields are kept verbatim; the year and rating may carry
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`CatalogError::MissingField`] when the record has too few columns,
    /// [`CatalogError::InvalidYear`] / [`CatalogError::InvalidRating`] when a
    /// numeric field does not parse.
    pub fn parse_record(&self, line: usize, record: &str) -> Result<Book, CatalogError> {
        let fields: Vec<&str> = record.split(self.delimiter).collect();
        let field = |which: SortField| {
            fields
                .get(self.columns.of(which))
                .copied()
                .ok_or(CatalogError::MissingField { line, field: which })
        };

        let isbn = field(SortField::Isbn)?;
        let author = field(SortField::Author)?;
        let year = field(SortField::Year)?;
        let original_title = field(SortField::OriginalTitle)?;
        let title = field(SortField::Title)?;
        let rating = field(SortField::AverageRating)?;

        let year = year.trim().parse::<i32>().map_err(|source| CatalogError::InvalidYear {
            line,
            value: year.to_owned(),
            source,
        })?;
        let average_rating = rating.trim().parse::<f64>().map_err(|source| CatalogError::InvalidRating {
            line,
            value: rating.to_owned(),
            source,
        })?;

        Ok(Book {
            isbn: isbn.to_owned(),
            author: author.to_owned(),
            year,
            original_title: original_title.to_owned(),
            title: title.to_owned(),
            average_rating,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RECORD: &str = "1~2767052~439023483~Suzanne Collins~2008~The Hunger Games~The Hunger Games (The Hunger Games, #1)~4.34";

    #[test]
    fn default_layout_reads_the_browsable_columns() {
        let book = CatalogFormat::default().parse_record(2, RECORD).unwrap();
        assert_eq!(
            book,
            Book {
                isbn: "439023483".into(),
                author: "Suzanne Collins".into(),
                year: 2008,
                original_title: "The Hunger Games".into(),
                title: "The Hunger Games (The Hunger Games, #1)".into(),
                average_rating: 4.34,
            }
        );
    }

    #[test]
    fn numeric_fields_tolerate_padding() {
        let book = CatalogFormat::default().parse_record(1, "a~b~c~d~ 1999 ~e~f~ 3.5").unwrap();
        assert_eq!(book.year, 1999);
        assert_eq!(book.average_rating, 3.5);
    }

    #[test]
    fn short_record_names_the_missing_field() {
        let error = CatalogFormat::default().parse_record(7, "1~2~isbn~author~2001").unwrap_err();
        assert!(matches!(
            error,
            CatalogError::MissingField {
                line: 7,
                field: SortField::OriginalTitle
            }
        ));
    }

    #[test]
    fn bad_year_keeps_the_raw_value() {
        let error = CatalogFormat::default().parse_record(3, "1~2~i~a~MMVIII~o~t~4.0").unwrap_err();
        match error {
            CatalogError::InvalidYear { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "MMVIII");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_rating_is_reported() {
        let error = CatalogFormat::default().parse_record(4, "1~2~i~a~2000~o~t~great").unwrap_err();
        assert!(matches!(error, CatalogError::InvalidRating { line: 4, .. }));
    }

    #[test]
    fn columns_can_be_rearranged() {
        let format = CatalogFormat {
            delimiter: ',',
            skip_header: false,
            columns: Columns {
                isbn: 0,
                author: 1,
                year: 2,
                original_title: 3,
                title: 3,
                average_rating: 4,
            },
        };
        let book = format.parse_record(1, "isbn,author,1990,title,4.1").unwrap();
        assert_eq!(book.title, book.original_title);
        assert_eq!(format.columns.of(SortField::AverageRating), 4);
    }
}
