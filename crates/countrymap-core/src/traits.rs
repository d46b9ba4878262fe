// crates/countrymap-core/src/traits.rs
use crate::common::DatasetStats;
use crate::model::CountryRecord;
use crate::text::{equals_case_folded, equals_folded};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: exact match ignoring letter case
/// - [`NameMatch::is_named_folded`]: exact match ignoring case and accents
///
/// # Examples
/// ```rust
/// use countrymap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("France").is_named("FRANCE"));
/// assert!(!Place("Côte d'Ivoire").is_named("cote d'ivoire"));
/// assert!(Place("Côte d'Ivoire").is_named_folded("cote d'ivoire"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_case_folded(self.name_str(), q)
    }

    #[inline]
    fn is_named_folded(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Query operations over the country table.
///
/// Every lookup is an exact match; there is no partial-match ranking.
pub trait CountrySearch {
    fn stats(&self) -> DatasetStats;

    /// Returns a slice of all countries, in dataset order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrymap_core::{CountrySearch, CountryTable};
    ///
    /// let table = CountryTable::shared().unwrap();
    /// for country in table.countries().iter().take(5) {
    ///     println!("- {} ({})", country.name(), country.continent());
    /// }
    /// ```
    fn countries(&self) -> &[CountryRecord];

    /// Distinct continent values in order of first appearance.
    ///
    /// These are the options of the continent selector; the first one is
    /// the default selection.
    fn continents(&self) -> Vec<&str>;

    /// Rows whose continent equals `continent` exactly.
    fn in_continent<'a>(&'a self, continent: &str) -> Vec<&'a CountryRecord>;

    /// The row of `continent` named `name`, ignoring letter case.
    ///
    /// `name` is compared as given. [`Selection::new`](crate::selection::Selection::new)
    /// trims the typed text first, so `" France "` from the form still
    /// finds France; an untrimmed comparison would not.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countrymap_core::{CountrySearch, CountryTable};
    ///
    /// let table = CountryTable::shared().unwrap();
    /// let a = table.select_country("Europe", "france");
    /// let b = table.select_country("Europe", "FRANCE");
    /// assert_eq!(a, b);
    /// ```
    fn select_country(&self, continent: &str, name: &str) -> Option<&CountryRecord>;

    /// Table-wide lookup by name, used to place a neighbouring country.
    ///
    /// Tries a case-insensitive match first, then an accent-insensitive one.
    fn find_by_name(&self, name: &str) -> Option<&CountryRecord>;
}
