use domain::suggestions::default_catalog;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fresh permutation of `catalog`; every entry appears exactly once.
pub fn shuffle<S: AsRef<str>>(catalog: &[S]) -> Vec<String> {
    shuffle_with(catalog, &mut rand::rng())
}

pub fn shuffle_with<S: AsRef<str>, R: Rng + ?Sized>(catalog: &[S], rng: &mut R) -> Vec<String> {
    let mut ordering: Vec<String> = catalog.iter().map(|s| s.as_ref().to_string()).collect();
    ordering.shuffle(rng);
    ordering
}

/// Holds the fixed catalog and hands out a new ordering per panel opening.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    catalog: Vec<String>,
}

impl SuggestionService {
    pub fn new(catalog: Vec<String>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn ordering(&self) -> Vec<String> {
        shuffle(&self.catalog)
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}
