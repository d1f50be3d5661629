//! Person and team matching against a task's assignment slots.

use crate::schedule::{Person, Task};

/// Slot token meaning "assigned to all people".
pub const EVERYONE_SENTINEL: &str = "everyone";

/// Placeholder name used in the sheet for blocked-out slots.
pub const BLOCKER_PLACEHOLDER: &str = "blocker";

/// Team of the directory entry whose name equals `name`, ignoring case and
/// surrounding whitespace. An empty team counts as no team.
pub fn team_of<'a>(name: &str, directory: &'a [Person]) -> Option<&'a str> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    directory
        .iter()
        .find(|person| person.name.trim().to_lowercase() == wanted)
        .map(|person| person.team.trim())
        .filter(|team| !team.is_empty())
}

/// Lowercased non-empty slots of a task.
fn lowered_slots(task: &Task) -> Vec<String> {
    task.assignees().map(str::to_lowercase).collect()
}

fn has_everyone(slots: &[String]) -> bool {
    slots.iter().any(|slot| slot.contains(EVERYONE_SENTINEL))
}

fn has_team(slots: &[String], team: Option<&str>) -> bool {
    match team {
        Some(team) => {
            let team = team.to_lowercase();
            slots.iter().any(|slot| *slot == team)
        }
        None => false,
    }
}

/// Whether `user` is on the task: named in a slot, covered by an "everyone"
/// slot, or a member of a team named in a slot.
pub fn is_assigned_to_user(task: &Task, user: &str, directory: &[Person]) -> bool {
    let user = user.trim().to_lowercase();
    if user.is_empty() {
        return false;
    }
    let slots = lowered_slots(task);
    slots.iter().any(|slot| *slot == user)
        || has_everyone(&slots)
        || has_team(&slots, team_of(&user, directory))
}

/// Looser variant for the person filter: the query only has to appear
/// inside a slot.
pub fn matches_person_query(task: &Task, query: &str, directory: &[Person]) -> bool {
    let needle = query.to_lowercase();
    let slots = lowered_slots(task);
    slots.iter().any(|slot| slot.contains(&needle))
        || has_everyone(&slots)
        || has_team(&slots, team_of(query, directory))
}

/// Tasks assigned to `user`, in input order.
pub fn filter_user_tasks<'a>(tasks: &'a [Task], user: &str, directory: &[Person]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| is_assigned_to_user(task, user, directory))
        .collect()
}

/// Distinct assignee names across tasks, sorted, without the blocker
/// placeholder.
pub fn unique_names(tasks: &[Task]) -> Vec<String> {
    let mut names: Vec<String> = tasks
        .iter()
        .flat_map(Task::assignees)
        .filter(|name| !name.eq_ignore_ascii_case(BLOCKER_PLACEHOLDER))
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Person> {
        vec![
            Person::new("Alice Smith", "Logistics"),
            Person::new("Bob", "Staff"),
            Person::new("Carol", ""),
        ]
    }

    #[test]
    fn team_lookup_is_exact_and_case_insensitive() {
        let people = directory();
        assert_eq!(team_of("alice smith", &people), Some("Logistics"));
        assert_eq!(team_of("  BOB ", &people), Some("Staff"));
        assert_eq!(team_of("Alice", &people), None);
        assert_eq!(team_of("Carol", &people), None);
        assert_eq!(team_of("", &people), None);
    }

    #[test]
    fn direct_assignment_is_exact_match() {
        let task = Task::new(1, "Check-in").with_lead("Alice Smith").with_support("Dan");
        assert!(is_assigned_to_user(&task, "alice smith", &[]));
        assert!(is_assigned_to_user(&task, "DAN", &[]));
        assert!(!is_assigned_to_user(&task, "Alice", &[]));
    }

    #[test]
    fn everyone_sentinel_assigns_anybody() {
        let task = Task::new(1, "Group photo").with_lead("Everyone");
        assert!(is_assigned_to_user(&task, "Alice", &[]));

        let task = Task::new(2, "Briefing").with_support("everyone on site");
        assert!(is_assigned_to_user(&task, "Zed", &[]));
    }

    #[test]
    fn team_slot_assigns_team_members() {
        let task = Task::new(1, "Load truck").with_lead("logistics");
        let people = directory();
        assert!(is_assigned_to_user(&task, "Alice Smith", &people));
        assert!(!is_assigned_to_user(&task, "Bob", &people));
        // without a directory entry, no team check applies
        assert!(!is_assigned_to_user(&task, "Alice Smith", &[]));
    }

    #[test]
    fn blank_user_matches_nothing() {
        let task = Task::new(1, "Group photo").with_lead("Everyone");
        assert!(!is_assigned_to_user(&task, "   ", &[]));
    }

    #[test]
    fn person_query_matches_substrings() {
        let task = Task::new(1, "Check-in").with_lead("Alice Smith");
        let people = directory();
        assert!(matches_person_query(&task, "ali", &people));
        assert!(matches_person_query(&task, "SMITH", &people));
        assert!(!matches_person_query(&task, "bob", &people));
    }

    #[test]
    fn person_query_honours_everyone_and_team() {
        let people = directory();
        let task = Task::new(1, "Tear-down").with_support("EVERYONE");
        assert!(matches_person_query(&task, "nobody", &people));

        let task = Task::new(2, "Badges").with_lead("Staff");
        assert!(matches_person_query(&task, "bob", &people));
        assert!(!matches_person_query(&task, "alice smith", &people));
    }

    #[test]
    fn filter_user_tasks_keeps_input_order() {
        let tasks = vec![
            Task::new(1, "A").with_lead("Bob"),
            Task::new(2, "B").with_lead("Carol"),
            Task::new(3, "C").with_support("Everyone"),
            Task::new(4, "D").with_support("Staff"),
        ];
        let ids: Vec<u32> = filter_user_tasks(&tasks, "bob", &directory())
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(filter_user_tasks(&tasks, "", &directory()).is_empty());
    }

    #[test]
    fn unique_names_skips_blocker_and_duplicates() {
        let tasks = vec![
            Task::new(1, "A").with_lead("Bob").with_support("Blocker"),
            Task::new(2, "B").with_lead("Ann").with_support("Bob"),
            Task::new(3, "C").with_lead(""),
        ];
        assert_eq!(unique_names(&tasks), vec!["Ann".to_string(), "Bob".to_string()]);
    }
}
