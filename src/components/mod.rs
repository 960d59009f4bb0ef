//! UI component modules

pub mod dialog;
pub mod entry_row;
pub mod stats_card;

pub use dialog::{Dialog, LinkFieldRow, SelectField, TextAreaField, TextField};
pub use entry_row::EntryRow;
pub use stats_card::StatsCard;
