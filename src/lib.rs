//! A small personal address book.
//!
//! The [`ContactStore`](domain::store::ContactStore) keeps the contacts and
//! mirrors them into a single key-value slot; the [`ui`] layer renders them
//! and turns user gestures into store calls through a pluggable
//! [`ContactView`](ui::ContactView).

pub mod cli;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod storage;
pub mod ui;
