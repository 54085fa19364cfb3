//! Output generators fed by the content engine.

pub mod rss;
