//! Post storage.
//!
//! Pages only need two queries: exact slug lookup and a filtered, ordered
//! listing. [`PostStore`] is that seam. [`MemoryStore`] implements it and
//! owns the authoring side (insert, update) with slug uniqueness and
//! timestamp bookkeeping. Posts are loaded from a directory of markdown
//! files carrying YAML front matter.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::post::{Category, MAX_TITLE_LEN, NewPost, Post, PostChanges, is_valid_slug, slugify};

/// Front matter delimiter line.
const FRONT_MATTER_FENCE: &str = "---";

/// Post storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Explicit slug already used by another post.
    #[error("Slug already exists: {0}")]
    DuplicateSlug(String),

    /// Explicit slug contains characters not allowed in URLs.
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    /// Title empty or too long.
    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    /// No post with the slug.
    #[error("Post not found: {0}")]
    NotFound(String),
}

/// Listing filter for public pages.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Only posts whose publish date is at or before this instant.
    pub published_before: Option<DateTime<Utc>>,
    pub category: Option<Category>,
    /// Case insensitive substring matched against title and content.
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl PostFilter {
    /// Publicly visible posts at `now`.
    pub fn published(now: DateTime<Utc>) -> Self {
        Self {
            published_before: Some(now),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn search(mut self, term: Option<String>) -> Self {
        self.search = term.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, post: &Post) -> bool {
        if let Some(now) = self.published_before
            && !post.is_published(now)
        {
            return false;
        }
        if let Some(category) = self.category
            && post.category() != category
        {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.trim().to_lowercase();
            return post.title().to_lowercase().contains(&term)
                || post.content().to_lowercase().contains(&term);
        }
        true
    }
}

/// Read access to posts used by page handlers.
pub trait PostStore: Send + Sync {
    /// Finds the post with exactly this slug.
    fn find_by_slug(&self, slug: &str) -> Option<&Post>;

    /// Lists matching posts in listing order.
    fn list(&self, filter: &PostFilter) -> Vec<&Post>;
}

/// In memory post store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: Vec<Post>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Adds a post created at `now`.
    ///
    /// A slug derived from the title that collides with an existing post
    /// gets a numeric suffix (`-2`, `-3`, ...). An explicit slug that
    /// collides is rejected.
    ///
    /// # Errors
    ///
    /// Returns error if the title is empty or too long, or the explicit
    /// slug is malformed or taken.
    pub fn insert(&mut self, draft: NewPost, now: DateTime<Utc>) -> Result<&Post, StoreError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
            return Err(StoreError::InvalidTitle(draft.title));
        }

        let slug = match draft.slug.filter(|s| !s.is_empty()) {
            Some(slug) => {
                if !is_valid_slug(&slug) {
                    return Err(StoreError::InvalidSlug(slug));
                }
                if self.contains_slug(&slug) {
                    return Err(StoreError::DuplicateSlug(slug));
                }
                slug
            }
            None => self.unique_slug(&slugify(&title)),
        };

        self.posts.push(Post {
            title,
            slug,
            content: draft.content,
            featured_image: draft.featured_image,
            category: draft.category,
            published_at: draft.published_at,
            created_at: now,
            updated_at: now,
        });

        let index = self.posts.len() - 1;
        Ok(&self.posts[index])
    }

    /// Applies changes to the post with `slug`, refreshing its update time.
    ///
    /// # Errors
    ///
    /// Returns error if no post has the slug or the new title is invalid.
    pub fn update(
        &mut self,
        slug: &str,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> Result<&Post, StoreError> {
        if let Some(title) = &changes.title
            && (title.trim().is_empty() || title.chars().count() > MAX_TITLE_LEN)
        {
            return Err(StoreError::InvalidTitle(title.clone()));
        }

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;

        if let Some(title) = changes.title {
            post.title = title.trim().to_string();
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        if let Some(image) = changes.featured_image {
            post.featured_image = image;
        }
        if let Some(category) = changes.category {
            post.category = category;
        }
        if let Some(published_at) = changes.published_at {
            post.published_at = published_at;
        }
        post.updated_at = now.max(post.created_at);

        Ok(&*post)
    }

    /// Every post, drafts included, in listing order.
    pub fn all(&self) -> Vec<&Post> {
        self.list(&PostFilter::default())
    }

    fn contains_slug(&self, slug: &str) -> bool {
        self.posts.iter().any(|p| p.slug == slug)
    }

    fn unique_slug(&self, base: &str) -> String {
        if !self.contains_slug(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| suffixed_slug(base, n))
            .find(|candidate| !self.contains_slug(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}

/// `base` with a `-n` suffix, cut so the result still fits in
/// [`MAX_TITLE_LEN`].
fn suffixed_slug(base: &str, n: usize) -> String {
    let suffix = format!("-{}", n);
    let keep = MAX_TITLE_LEN.saturating_sub(suffix.len()).min(base.len());
    // Slugs are ASCII, any byte index is a char boundary
    let stem = base[..keep].trim_end_matches('-');
    format!("{}{}", stem, suffix)
}

impl PostStore for MemoryStore {
    fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    fn list(&self, filter: &PostFilter) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().filter(|p| filter.matches(p)).collect();
        posts.sort_by(|a, b| Post::listing_order(a, b));
        if let Some(limit) = filter.limit {
            posts.truncate(limit);
        }
        posts
    }
}

/// YAML header of a post file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

/// Splits a post file into front matter and markdown body.
///
/// # Errors
///
/// Returns error if the file does not start with a `---` delimited YAML
/// block or the YAML does not describe a post.
pub fn parse_post_file(source: &str) -> Result<(FrontMatter, String)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source
        .strip_prefix(FRONT_MATTER_FENCE)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
        .context("Post file must start with '---' front matter")?;

    let (yaml, body) = split_front_matter(rest).context("Front matter is not closed by '---'")?;
    let front_matter: FrontMatter =
        serde_yaml::from_str(yaml).context("Failed to parse front matter")?;

    Ok((front_matter, body.trim_start_matches(['\r', '\n']).to_string()))
}

fn split_front_matter(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Renders a post file with front matter.
///
/// # Errors
///
/// Returns error if the front matter cannot be serialized.
pub fn format_post_file(front_matter: &FrontMatter, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(front_matter).context("Failed to serialize front matter")?;
    Ok(format!("{fence}\n{yaml}{fence}\n\n{body}", fence = FRONT_MATTER_FENCE))
}

/// Loads every `*.md` file in `dir` into a new store.
///
/// Files are read in name order so slug suffixes are stable between runs.
/// Posts with an explicit slug are inserted first, so a derived slug never
/// takes a URL another file names. Missing `created` dates fall back to the file modification time.
///
/// # Errors
///
/// Returns error if the directory cannot be read, or any file is invalid
/// or repeats an explicit slug.
pub fn load_dir(dir: &Path) -> Result<MemoryStore> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read posts directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    let drafts = paths
        .iter()
        .map(|path| {
            read_post_file(path)
                .map(|(draft, created)| (path, draft, created))
                .with_context(|| format!("Invalid post: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    // Explicit slugs claim their URLs before derived slugs are suffixed
    let (explicit, derived): (Vec<_>, Vec<_>) =
        drafts.into_iter().partition(|(_, draft, _)| draft.slug.is_some());

    let mut store = MemoryStore::new();
    for (path, draft, created) in explicit.into_iter().chain(derived) {
        let post = store
            .insert(draft, created)
            .with_context(|| format!("Invalid post: {}", path.display()))?;
        tracing::debug!(slug = post.slug(), "Loaded post");
    }

    tracing::info!(count = store.len(), dir = %dir.display(), "Loaded posts");
    Ok(store)
}

fn read_post_file(path: &Path) -> Result<(NewPost, DateTime<Utc>)> {
    let source = fs::read_to_string(path).context("Failed to read post file")?;
    let (front_matter, body) = parse_post_file(&source)?;

    let created = match front_matter.created {
        Some(created) => created,
        None => fs::metadata(path)
            .and_then(|m| m.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now()),
    };

    let draft = NewPost {
        title: front_matter.title,
        slug: front_matter.slug,
        content: body,
        featured_image: front_matter.featured_image,
        category: front_matter.category,
        published_at: front_matter.published,
    };

    Ok((draft, created))
}

/// Writes a new post file into `dir`, creating the directory if needed.
///
/// The slug is checked against the posts already in `dir`, so a derived
/// slug gets the same suffix it would get when the directory is loaded.
///
/// # Errors
///
/// Returns error if existing posts fail to load, the draft is invalid,
/// or the target file already exists.
pub fn write_new_post(dir: &Path, draft: NewPost, now: DateTime<Utc>) -> Result<PathBuf> {
    let mut store = if dir.is_dir() {
        load_dir(dir)?
    } else {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create posts directory: {}", dir.display()))?;
        MemoryStore::new()
    };

    let post = store.insert(draft, now)?;
    let front_matter = FrontMatter {
        title: post.title().to_string(),
        slug: Some(post.slug().to_string()),
        category: post.category(),
        published: post.published_at(),
        created: Some(post.created_at()),
        featured_image: post.featured_image().map(String::from),
    };
    let contents = format_post_file(&front_matter, post.content())?;

    let path = dir.join(format!("{}.md", post.slug()));
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("Refusing to overwrite: {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write post: {}", path.display()))?;

    tracing::info!(path = %path.display(), "Created post");
    Ok(path)
}
