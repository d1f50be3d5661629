//! Who a task belongs to, and which tasks a list view shows.
//!
//! Matching works on the six assignment slots (lead plus five supports).
//! A slot can hold a person's name, a team name, or the "everyone" sentinel.

mod filter;
mod matching;
mod options;

pub use filter::{searchable_text, TaskFilter, SEARCH_SEPARATOR};
pub use matching::{
    filter_user_tasks, is_assigned_to_user, matches_person_query, team_of, unique_names,
    BLOCKER_PLACEHOLDER, EVERYONE_SENTINEL,
};
pub use options::FilterOptions;
