/// State management module
///
/// This module handles all application state, including:
/// - The read-only catalog snapshot (catalog.rs)
/// - The persisted favorites ledger (favorites.rs)
/// - Filtering, sorting and active-chip derivation (filter.rs)

pub mod catalog;
pub mod favorites;
pub mod filter;
