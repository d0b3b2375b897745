//! flickr-tag: render `flickr_photo` tags from the command line.
//!
//! Acts as a minimal template host: each argument is the markup of one tag
//! (`1234567890 "Large Square"`) and is rendered on its own line.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use flickr_tag::{Config, FlickrPhotosBuilder, MarkupStyle, Tag};

/// Render Flickr photo tags as HTML.
#[derive(Parser)]
#[command(name = "flickr-tag")]
#[command(version)]
#[command(about = "Render Flickr photo tags as HTML")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Flickr API key. Overrides the config file, which in turn overrides
    /// FLICKR_API_KEY.
    #[arg(long)]
    api_key: Option<String>,

    /// Emit <figure> markup instead of the photo-holder div.
    #[arg(long)]
    figure: bool,

    /// Print the assembled photo record as JSON instead of HTML.
    #[arg(long)]
    json: bool,

    /// Tag markup, e.g. '1234567890 "Large Square"'.
    #[arg(required = true)]
    tags: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let mut builder = FlickrPhotosBuilder::from_config(&config);
    if let Some(key) = args.api_key {
        builder = builder.api_key(key);
    }
    if args.figure {
        builder = builder.markup(MarkupStyle::Figure);
    }
    let photos = builder.build()?;

    info!(tags = args.tags.len(), "rendering");

    for markup in &args.tags {
        if args.json {
            let tag = Tag::parse(markup)?;
            let record = photos.photo(&tag.id, &tag.size).await?;
            println!("{}", record.to_json()?);
        } else {
            println!("{}", photos.render_tag(markup).await?);
        }
    }

    Ok(())
}
