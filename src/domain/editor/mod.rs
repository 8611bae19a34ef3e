//! Editors that mutate the draft's repeatable sections.

mod collection;
mod keyed_group;

pub use collection::{CollectionEditor, Entry, EntryKey};
pub use keyed_group::{parse_skills, KeyedGroupEditor, KeyedGroupError, RenameOutcome, NEW_CATEGORY_PREFIX};
