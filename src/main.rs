use anyhow::{Result, bail};
use clap::Parser;
use plume::cli::{Cli, Commands};
use plume::config::SiteConfig;
use plume::content::{
    Collection, DocumentStore, FsStore,
    id::parent_id,
    queries::{all_posts, group_posts_by_year, post_by_id},
    tags::sorted_tags,
};
use plume::generator::rss::build_feed;
use plume::log;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let store = FsStore::new(config.build.content.clone());

    match &cli.command {
        Commands::Feed { output } => build_feed(&config, &store, output.as_deref()),
        Commands::Tags { json } => print_tags(&store, *json),
        Commands::Archive { collection } => print_archive(&store, *collection),
        Commands::Check => check_content(&store),
    }
}

/// Load configuration relative to the project root.
///
/// A missing config file falls back to defaults; commands that need
/// cross-field guarantees validate afterwards.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };

    // Content and output paths resolve relative to the project root.
    config.build.content = root.join(&config.build.content);
    config.build.output = root.join(&config.build.output);

    if matches!(cli.command, Commands::Feed { .. }) {
        config.validate()?;
    }

    Ok(config)
}

fn print_tags(store: &impl DocumentStore, json: bool) -> Result<()> {
    let tags = sorted_tags(store, &Collection::POSTS)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    for tag in tags {
        log!("tags"; "{} ({})", tag.tag, tag.count);
    }
    Ok(())
}

fn print_archive(store: &impl DocumentStore, collection: Collection) -> Result<()> {
    let posts = all_posts(store, collection, false)?;

    for (year, posts) in group_posts_by_year(&posts) {
        log!("archive"; "{year}");
        for post in posts {
            log!("archive"; "  {}  {}", post.meta.date, post.meta.title);
        }
    }
    Ok(())
}

/// Verify that every subpost's parent exists in its collection.
///
/// Malformed ids already fail inside the store when collections load.
fn check_content(store: &impl DocumentStore) -> Result<()> {
    let mut dangling = 0usize;

    for collection in Collection::POSTS {
        for post in all_posts(store, collection, true)? {
            let Some(parent) = parent_id(&post.id) else {
                continue;
            };
            if post_by_id(store, parent, collection)?.is_none() {
                log!("error"; "{}: subpost `{}` has no parent `{}`", collection.key(), post.id, parent);
                dangling += 1;
            }
        }
    }

    if dangling > 0 {
        bail!("{dangling} dangling subpost parent reference(s)");
    }
    log!("check"; "all subpost parent references resolve");
    Ok(())
}
