pub mod analyse;
pub mod catalog;
pub mod config;
pub mod dump;
pub mod error;
pub mod format;
pub mod helpers;
pub mod index;
pub mod pipeline;
pub mod requester;
pub mod sitemap;
pub mod templates;
