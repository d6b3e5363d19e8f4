pub mod lookup;
pub mod merge;
pub mod preferences;
pub mod recommendation;
pub mod selector;

pub use lookup::{normalize, CaseInsensitiveMap};
pub use merge::{merge_into_sets, merge_into_unique_lists, merge_with, Grouping};
pub use preferences::{aggregate_preferences, GroupPreferences};
pub use recommendation::{first_name, recommend};
pub use selector::select_subset;
