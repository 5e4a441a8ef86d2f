use anyhow::{Context, Result};
use blogsite::transit::{BusTimeClient, WriteSink, run_all_checks};
use blogsite::{Cli, Command, NewPost, NewPostArgs, TransitArgs, server, write_new_post};
use chrono::Utc;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Serve(config) => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
            runtime.block_on(server::run_server(config))
        }
        Command::New(args) => create_post(&args),
        Command::Bus(args) => print_bus_report(&args),
    }
}

fn create_post(args: &NewPostArgs) -> Result<()> {
    let now = Utc::now();
    let mut draft = NewPost::new(args.title.clone(), args.category, "Write your post here.\n");
    if let Some(slug) = &args.slug {
        draft = draft.with_slug(slug.clone());
    }
    if args.publish {
        draft = draft.published(now);
    }

    let path = write_new_post(args.dir(), draft, now).context("Failed to create post")?;
    println!("Created {}", path.display());

    Ok(())
}

fn print_bus_report(args: &TransitArgs) -> Result<()> {
    let client = BusTimeClient::new(args.mta_api_url.clone());
    let mut sink = WriteSink::new(io::stdout().lock());
    run_all_checks(&client, &args.mta_api_key, &mut sink);

    Ok(())
}
