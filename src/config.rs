//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::highlight::DEFAULT_THEME;
use crate::post::Category;
use crate::transit::{self, DEFAULT_API_URL, PLACEHOLDER_API_KEY};

/// Command line interface for the blog.
#[derive(Debug, Clone, Parser)]
#[command(name = "blogsite", version, about, long_about = None)]
pub struct Cli {
    /// Enable info level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the blog over HTTP
    Serve(Config),

    /// Create a new post file
    New(NewPostArgs),

    /// Print the bus arrival report
    Bus(TransitArgs),
}

/// Server configuration.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Directory of markdown posts
    #[arg(long, default_value = "posts")]
    pub posts: PathBuf,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.light, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    #[command(flatten)]
    pub transit: TransitArgs,

    #[command(flatten)]
    pub profile: Profile,
}

impl Config {
    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the posts directory does not exist or the host is
    /// not an IP address.
    pub fn validate(&self) -> Result<()> {
        if !self.posts.is_dir() {
            bail!("Posts directory does not exist: {}", self.posts.display());
        }
        self.addr()?;

        Ok(())
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns error if host is not an IP address.
    pub fn addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid host address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Bus Time API access.
#[derive(Debug, Clone, Args)]
pub struct TransitArgs {
    /// MTA Bus Time API key
    #[arg(long, env = "MTA_API_KEY", default_value = PLACEHOLDER_API_KEY, hide_env_values = true)]
    pub mta_api_key: String,

    /// Stop monitoring endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub mta_api_url: String,
}

impl TransitArgs {
    /// Whether a real key has been supplied.
    pub fn has_api_key(&self) -> bool {
        transit::has_api_key(&self.mta_api_key)
    }
}

/// About page details.
#[derive(Debug, Clone, Default, Args)]
pub struct Profile {
    /// Name shown in the header and about page
    #[arg(long, default_value = "Blog Author")]
    pub author: String,

    #[arg(long)]
    pub github_url: Option<String>,

    #[arg(long)]
    pub linkedin_url: Option<String>,

    /// Profile image URL
    #[arg(long)]
    pub profile_image: Option<String>,
}

/// Arguments for creating a post file.
#[derive(Debug, Clone, Args)]
pub struct NewPostArgs {
    /// Post title
    pub title: String,

    /// One of tech, travel, finance, diy
    #[arg(short, long, default_value = "tech")]
    pub category: Category,

    /// Explicit slug, derived from title when omitted
    #[arg(long)]
    pub slug: Option<String>,

    /// Directory of markdown posts
    #[arg(long, default_value = "posts")]
    pub posts: PathBuf,

    /// Mark the post published now
    #[arg(long)]
    pub publish: bool,
}

impl NewPostArgs {
    /// Directory the post lands in.
    pub fn dir(&self) -> &Path {
        &self.posts
    }
}
