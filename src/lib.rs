//! bookstall: a terminal book inventory manager backed by a remote HTTP
//! collection store.
//!
//! The interesting part is the data synchronization layer: a URL-keyed
//! revalidating cache ([`cache`]) between the typed REST client ([`api`]) and
//! the list/form controllers ([`ui::list`], [`ui::form`]).

pub mod api;
pub mod cache;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
