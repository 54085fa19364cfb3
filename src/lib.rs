//! Plume - a content relationship engine for markdown blog collections.
//!
//! The [`content`] module derives ordering, subpost grouping, adjacency
//! navigation, tag and author indexes, reading time, and table-of-contents
//! sections from an injected [`content::DocumentStore`]. [`generator`]
//! turns the post collections into an rss feed, configured by [`config`].
//! The `plume` binary wires these together behind a small CLI.

pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod logger;
