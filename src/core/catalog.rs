//! Category catalog
//!
//! An immutable, ordered mapping from category name to candidate words.

use rand::Rng;
use std::fmt;
use std::io;

/// A named group of candidate words, shown to the player as the hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Validated catalog of categories
///
/// Always holds at least one category, and every category holds at least
/// one non-blank word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Error type for catalogs that cannot be played
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    EmptyCatalog,
    EmptyCategory(String),
    BlankCategoryName { line: usize },
    BlankWord(String),
    UnguessableCharacter { category: String, word: String },
    DuplicateCategory(String),
    WordWithoutCategory { line: usize, word: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read catalog: {e}"),
            Self::EmptyCatalog => write!(f, "Catalog must contain at least one category"),
            Self::EmptyCategory(name) => write!(f, "Category '{name}' has no words"),
            Self::BlankCategoryName { line } => {
                write!(f, "Line {line}: category name must not be blank")
            }
            Self::BlankWord(name) => write!(f, "Category '{name}' contains a blank word"),
            Self::UnguessableCharacter { category, word } => write!(
                f,
                "Category '{category}': word {word:?} contains whitespace other than a plain space"
            ),
            Self::DuplicateCategory(name) => write!(f, "Category '{name}' is defined twice"),
            Self::WordWithoutCategory { line, word } => {
                write!(f, "Line {line}: word '{word}' appears before any category")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl Catalog {
    /// Build a catalog from `(category, words)` pairs, keeping their order
    ///
    /// # Errors
    /// Returns `CatalogError` if there are no categories, a category name
    /// repeats, a category has no words, or a word is blank or holds a
    /// whitespace or control character other than a plain space.
    ///
    /// # Examples
    /// ```
    /// use secret_word::core::Catalog;
    ///
    /// let catalog = Catalog::new([("Frutas", vec!["maçã", "banana"])]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.word_count(), 2);
    ///
    /// assert!(Catalog::new(Vec::<(&str, Vec<&str>)>::new()).is_err());
    /// ```
    pub fn new<N, W, I>(entries: impl IntoIterator<Item = (N, I)>) -> Result<Self, CatalogError>
    where
        N: Into<String>,
        W: Into<String>,
        I: IntoIterator<Item = W>,
    {
        let mut categories: Vec<Category> = Vec::new();

        for (name, words) in entries {
            let name: String = name.into();
            if categories.iter().any(|c| c.name == name) {
                return Err(CatalogError::DuplicateCategory(name));
            }

            let words: Vec<String> = words.into_iter().map(Into::into).collect();

            if words.is_empty() {
                return Err(CatalogError::EmptyCategory(name));
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(CatalogError::BlankWord(name));
            }
            if let Some(word) = words.iter().find(|w| w.chars().any(is_unguessable)) {
                return Err(CatalogError::UnguessableCharacter {
                    word: word.clone(),
                    category: name,
                });
            }

            categories.push(Category { name, words });
        }

        if categories.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        Ok(Self { categories })
    }

    /// Pick a category uniformly at random, then one of its words
    ///
    /// Returns `(word, category)`.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> (&str, &str) {
        // Non-empty by construction
        let category = &self.categories[rng.random_range(0..self.categories.len())];
        let word = &category.words[rng.random_range(0..category.words.len())];

        (word.as_str(), category.name.as_str())
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of words across all categories
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    /// Iterate over every `(category, word)` pair in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().map(move |w| (c.name.as_str(), w.as_str())))
    }
}

/// Characters a player cannot type as a guess; a plain space is a separator
fn is_unguessable(c: char) -> bool {
    c != ' ' && (c.is_whitespace() || c.is_control())
}
