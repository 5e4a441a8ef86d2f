//! Blog post content model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Maximum length of titles and slugs.
pub const MAX_TITLE_LEN: usize = 200;

/// Slug used when a title contains nothing sluggable.
const FALLBACK_SLUG: &str = "post";

/// Post category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Travel,
    Finance,
    Diy,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Travel,
        Category::Finance,
        Category::Diy,
    ];

    /// Stored identifier, also used in `?category=` query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Travel => "travel",
            Category::Finance => "finance",
            Category::Diy => "diy",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Travel => "Travel",
            Category::Finance => "Finance",
            Category::Diy => "DIY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for category identifiers outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Derives a URL safe slug from a title.
///
/// Folds to ASCII, lowercases, and collapses every run of other characters
/// into a single hyphen. The result is truncated to [`MAX_TITLE_LEN`] and
/// never empty.
pub fn slugify(title: &str) -> String {
    let slug = slug::slugify(title);
    let slug = truncate_slug(&slug);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Returns true if the slug only contains lowercase ASCII, digits and
/// single inner hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_TITLE_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn truncate_slug(slug: &str) -> &str {
    if slug.len() <= MAX_TITLE_LEN {
        return slug;
    }
    // Slugs are ASCII, any byte index is a char boundary
    slug[..MAX_TITLE_LEN].trim_end_matches('-')
}

/// A published or draft blog post.
///
/// Posts are created and mutated through a store, which owns slug
/// uniqueness and timestamp bookkeeping. From the page side posts are
/// read only.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) content: String,
    pub(crate) featured_image: Option<String>,
    pub(crate) category: Category,
    pub(crate) published_at: Option<DateTime<Utc>>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Post {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Raw markdown body.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn featured_image(&self) -> Option<&str> {
        self.featured_image.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Detail page path.
    pub fn absolute_url(&self) -> String {
        format!("/blog/{}/", self.slug)
    }

    /// True if the post has a publish date that is not in the future.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|at| at <= now)
    }

    /// Listing order: newest publish date first, then newest creation.
    ///
    /// Posts without a publish date sort after every dated post.
    pub fn listing_order(a: &Post, b: &Post) -> Ordering {
        // Option orders None before Some, reversing puts undated last
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Fields supplied when authoring a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    /// Explicit slug; derived from the title when absent.
    pub slug: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Category,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewPost {
    /// Draft with only the required fields set.
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            content: content.into(),
            featured_image: None,
            category,
            published_at: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn with_featured_image(mut self, image: impl Into<String>) -> Self {
        self.featured_image = Some(image.into());
        self
    }
}

/// Partial update to an existing post. `None` leaves a field unchanged.
///
/// The slug is not editable: links to a post stay valid after edits.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub category: Option<Category>,
    pub published_at: Option<Option<DateTime<Utc>>>,
}
