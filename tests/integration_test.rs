//! Integration tests for post loading, rendering and excerpts.

mod common;

use anyhow::Result;
use blogsite::{
    Category, MAX_TITLE_LEN, MarkdownRenderer, MemoryStore, NewPost, PostFilter, PostStore,
    excerpt, load_dir, write_new_post,
};
use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;

/// Strips tags, leaving text content.
fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[test]
fn test_load_dir_reads_front_matter_posts() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    common::write_file(
        dir.path(),
        "a-lisbon.md",
        "---\ntitle: Weekend in Lisbon\ncategory: travel\npublished: 2025-02-01T10:00:00Z\ncreated: 2025-01-30T10:00:00Z\nfeatured_image: blog_images/lisbon.jpg\n---\n\nTrams and tiles.\n",
    )?;
    common::write_file(
        dir.path(),
        "b-rust.md",
        "---\ntitle: Rust Lifetimes\nslug: lifetimes\ncategory: tech\npublished: 2025-02-10T10:00:00Z\n---\n\n```rust\nfn main() {}\n```\n",
    )?;
    common::write_file(
        dir.path(),
        "c-draft.md",
        "---\ntitle: Budget Draft\ncategory: finance\n---\nNumbers.\n",
    )?;
    common::write_file(dir.path(), "notes.txt", "not a post")?;

    // Act
    let store = load_dir(dir.path())?;

    // Assert
    assert_eq!(store.len(), 3);
    let lisbon = store
        .find_by_slug("weekend-in-lisbon")
        .expect("Slug should derive from title");
    assert_eq!(lisbon.category(), Category::Travel);
    assert_eq!(lisbon.featured_image(), Some("blog_images/lisbon.jpg"));
    assert_eq!(
        lisbon.created_at(),
        Utc.with_ymd_and_hms(2025, 1, 30, 10, 0, 0).unwrap()
    );
    assert_eq!(lisbon.content(), "Trams and tiles.\n");

    let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let public: Vec<&str> = store
        .list(&PostFilter::published(now))
        .iter()
        .map(|p| p.slug())
        .collect();
    assert_eq!(public, vec!["lifetimes", "weekend-in-lisbon"]);

    Ok(())
}

#[test]
fn test_load_dir_rejects_invalid_post() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    common::write_file(dir.path(), "broken.md", "# No front matter\n")?;

    // Act
    let result = load_dir(dir.path());

    // Assert
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("broken.md"), "{}", message);

    Ok(())
}

#[test]
fn test_load_dir_rejects_repeated_explicit_slug() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let post = "---\ntitle: Same\nslug: same\ncategory: diy\n---\nBody\n";
    common::write_file(dir.path(), "one.md", post)?;
    common::write_file(dir.path(), "two.md", post)?;

    // Act
    let result = load_dir(dir.path());

    // Assert
    assert!(result.is_err());

    Ok(())
}

#[test]
fn test_long_colliding_title_reloads() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let now = common::base_time();
    let title = "a".repeat(MAX_TITLE_LEN);
    let first = NewPost::new(title.as_str(), Category::Tech, "one");
    write_new_post(dir.path(), first, now)?;

    // Act
    let second = NewPost::new(title.as_str(), Category::Tech, "two");
    let path = write_new_post(dir.path(), second, now)?;
    let store = load_dir(dir.path())?;

    // Assert
    assert!(path.exists());
    let posts = store.all();
    let slugs: Vec<&str> = posts.iter().map(|p| p.slug()).collect();
    assert_eq!(slugs.len(), 2);
    assert!(slugs.iter().all(|s| s.len() <= MAX_TITLE_LEN));
    assert!(slugs.contains(&format!("{}-2", "a".repeat(MAX_TITLE_LEN - 2)).as_str()));

    Ok(())
}

#[test]
fn test_explicit_slug_wins_over_derived() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    common::write_file(dir.path(), "a.md", "---\ntitle: Intro\ncategory: tech\n---\nDerived\n")?;
    common::write_file(
        dir.path(),
        "b.md",
        "---\ntitle: Welcome\nslug: intro\ncategory: tech\n---\nExplicit\n",
    )?;

    // Act
    let store = load_dir(dir.path())?;

    // Assert
    assert_eq!(store.find_by_slug("intro").map(|p| p.title()), Some("Welcome"));
    assert_eq!(store.find_by_slug("intro-2").map(|p| p.title()), Some("Intro"));

    Ok(())
}

#[test]
fn test_listing_order_excludes_unpublished() {
    // Arrange
    let t2 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let t1 = t2 + Duration::days(5);
    let now = t1 + Duration::days(1);
    let mut store = MemoryStore::new();
    store
        .insert(NewPost::new("Older", Category::Tech, "x").published(t2), t2)
        .unwrap();
    store
        .insert(NewPost::new("Unpublished", Category::Tech, "x"), now)
        .unwrap();
    store
        .insert(NewPost::new("Newer", Category::Tech, "x").published(t1), t2)
        .unwrap();
    store
        .insert(
            NewPost::new("Scheduled", Category::Tech, "x").published(now + Duration::days(1)),
            t2,
        )
        .unwrap();

    // Act
    let all: Vec<&str> = store.all().iter().map(|p| p.title()).collect();
    let public: Vec<&str> = store
        .list(&PostFilter::published(now))
        .iter()
        .map(|p| p.title())
        .collect();

    // Assert
    assert_eq!(all, vec!["Scheduled", "Newer", "Older", "Unpublished"]);
    assert_eq!(public, vec!["Newer", "Older"]);
}

#[test]
fn test_filter_by_category_and_search() {
    // Arrange
    let store = common::sample_store();
    let now = common::base_time() + Duration::days(2);

    // Act
    let travel = store.list(&PostFilter::published(now).category(Some(Category::Travel)));
    let searched = store.list(&PostFilter::published(now).search(Some("BORROWING".to_string())));
    let limited = store.list(&PostFilter::published(now).limit(1));

    // Assert
    assert_eq!(travel.len(), 1);
    assert_eq!(travel[0].title(), "Weekend in Lisbon");
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].slug(), "rust-lifetimes");
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].slug(), "rust-lifetimes");
}

#[test]
fn test_same_title_gets_distinct_slugs() {
    // Arrange
    let mut store = MemoryStore::new();
    let now = common::base_time();

    // Act
    let first = store
        .insert(NewPost::new("Hello World", Category::Tech, "a"), now)
        .unwrap()
        .absolute_url();
    let second = store
        .insert(NewPost::new("Hello World", Category::Tech, "b"), now)
        .unwrap()
        .absolute_url();

    // Assert
    assert_eq!(first, "/blog/hello-world/");
    assert_eq!(second, "/blog/hello-world-2/");
}

#[test]
fn test_render_post_with_known_and_unknown_languages() {
    // Arrange
    let renderer = MarkdownRenderer::new();
    let content = "# Setup\n\n```python\nprint(1)\n```\n\nThen:\n\n```zzz\nhello\n```\n\n```\nplain <text>\n```\n";

    // Act
    let html = renderer.render(content);

    // Assert
    assert!(html.contains("<h1>Setup</h1>"), "{}", html);
    assert_eq!(html.matches(r#"<pre class="highlight""#).count(), 3, "{}", html);
    assert!(html.contains(r#"class="language-python""#));
    let text = text_content(&html);
    assert!(text.contains("print(1)"));
    assert!(text.contains("hello"));
    assert!(html.contains("plain &lt;text&gt;"), "{}", html);
}

#[test]
fn test_excerpt_of_loaded_post() -> Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let words: Vec<String> = (1..=50).map(|n| format!("word{}", n)).collect();
    let body = format!(
        "# Intro\n\n```rust\nlet hidden = 1;\n```\n\n**Bold** start {}\n",
        words.join(" ")
    );
    common::write_file(
        dir.path(),
        "long.md",
        &format!("---\ntitle: Long\ncategory: tech\n---\n{}", body),
    )?;
    let store = load_dir(dir.path())?;
    let post = store.find_by_slug("long").expect("Post should load");

    // Act
    let teaser = excerpt(post.content(), 30);

    // Assert
    assert!(teaser.starts_with("Intro Bold start word1"), "{}", teaser);
    assert!(teaser.ends_with("..."));
    assert!(!teaser.contains("hidden"));
    assert_eq!(teaser.trim_end_matches("...").split_whitespace().count(), 30);

    Ok(())
}
