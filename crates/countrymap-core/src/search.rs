// crates/countrymap-core/src/search.rs
use crate::common::DatasetStats;
use crate::model::{CountryRecord, CountryTable};
use crate::traits::{CountrySearch, NameMatch};

impl CountrySearch for CountryTable {
    fn stats(&self) -> DatasetStats {
        DatasetStats {
            countries: self.countries.len(),
            continents: self.continents().len(),
        }
    }

    fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    fn continents(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.countries {
            // Linear scan is perfectly fine for a handful of continents
            if !out.contains(&c.continent()) {
                out.push(c.continent());
            }
        }
        out
    }

    fn in_continent<'a>(&'a self, continent: &str) -> Vec<&'a CountryRecord> {
        self.countries
            .iter()
            .filter(|c| c.continent == continent)
            .collect()
    }

    fn select_country(&self, continent: &str, name: &str) -> Option<&CountryRecord> {
        if name.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.continent == continent && c.is_named(name))
    }

    fn find_by_name(&self, name: &str) -> Option<&CountryRecord> {
        if name.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.is_named(name))
            .or_else(|| self.countries.iter().find(|c| c.is_named_folded(name)))
    }
}
