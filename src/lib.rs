//! Personal blog with syntax highlighted markdown posts.

mod assets;
pub mod components;
mod config;
mod highlight;
mod markdown;
pub mod pages;
mod post;
pub mod server;
mod store;
pub mod transit;
mod util;

pub use assets::{STYLESHEET_PATH, stylesheet};
pub use config::{Cli, Command, Config, NewPostArgs, Profile, TransitArgs};
pub use highlight::{DEFAULT_THEME, Highlighter};
pub use markdown::{DEFAULT_EXCERPT_WORDS, MarkdownRenderer, excerpt};
pub use post::{Category, MAX_TITLE_LEN, NewPost, Post, PostChanges, UnknownCategory, slugify};
pub use store::{
    FrontMatter, MemoryStore, PostFilter, PostStore, StoreError, format_post_file, load_dir,
    parse_post_file, write_new_post,
};
pub use util::{format_date, format_relative};
