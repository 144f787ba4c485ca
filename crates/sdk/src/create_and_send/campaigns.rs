//! Campaign categories for reporting.

use serde::Serialize;

use crate::error::{PayloadError, Result};

/// Reporting categories attached to a send, e.g.
/// `{"categories": ["winter sale", "west coast"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Campaigns {
    categories: Vec<String>,
}

impl Campaigns {
    /// Maximum number of categories per send.
    pub const MAX_CATEGORIES: usize = 10;
    /// Maximum length of a single category, in characters.
    pub const MAX_CATEGORY_LENGTH: usize = 64;

    /// Build campaigns from categories, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyField`] for an empty list,
    /// [`PayloadError::TooManyCategories`] above [`Self::MAX_CATEGORIES`] and
    /// [`PayloadError::InvalidCategory`] for an empty or over-long category.
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();

        if categories.is_empty() {
            return Err(PayloadError::EmptyField("categories"));
        }

        if categories.len() > Self::MAX_CATEGORIES {
            return Err(PayloadError::TooManyCategories {
                max: Self::MAX_CATEGORIES,
                got: categories.len(),
            });
        }

        if let Some(bad) = categories
            .iter()
            .find(|c| c.is_empty() || c.chars().count() > Self::MAX_CATEGORY_LENGTH)
        {
            return Err(PayloadError::InvalidCategory {
                category: bad.clone(),
                max: Self::MAX_CATEGORY_LENGTH,
            });
        }

        Ok(Self { categories })
    }

    /// Get the categories, in the order given.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
