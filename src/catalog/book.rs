use std::cmp::Ordering;
use std::fmt;

/// One record of the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub isbn: String,
    pub author: String,
    pub year: i32,
    pub original_title: String,
    pub title: String,
    pub average_rating: f64,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({}, ISBN {}, rated {})", self.title, self.author, self.year, self.isbn, self.average_rating)
    }
}

/// An average rating usable as a map key.
///
/// Ordered by [`f64::total_cmp`], so every value (including NaN) has a place
/// and `-0.0` sorts before `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rating(pub f64);

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Rating {
    fn from(rating: f64) -> Self {
        Rating(rating)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn ratings_have_a_total_order() {
        let mut ratings = [Rating(4.5), Rating(f64::NAN), Rating(3.9), Rating(-0.0), Rating(0.0)];
        ratings.sort();
        assert_eq!(ratings[0].0.to_bits(), (-0.0f64).to_bits());
        assert_eq!(ratings[1].0.to_bits(), 0.0f64.to_bits());
        assert_eq!(ratings[2], Rating(3.9));
        assert_eq!(ratings[3], Rating(4.5));
        assert!(ratings[4].0.is_nan());
        assert_eq!(Rating(f64::NAN), Rating(f64::NAN));
    }

    #[test]
    fn book_display_names_title_and_author() {
        let book = Book {
            isbn: "439023483".into(),
            author: "Suzanne Collins".into(),
            year: 2008,
            original_title: "The Hunger Games".into(),
            title: "The Hunger Games (The Hunger Games, #1)".into(),
            average_rating: 4.34,
        };
        assert_eq!(
            book.to_string(),
            "The Hunger Games (The Hunger Games, #1) by Suzanne Collins (2008, ISBN 439023483, rated 4.34)"
        );
    }
}
