//! Deriving the visible table from a loaded roster: substring search, then
//! collapsing rows that share a full name.

use crate::data::student::{Student, StudentAttributes};
use std::collections::HashSet;

/// Case-insensitive substring match against the full name, gender, current
/// address, city and state. An empty query matches everyone.
pub fn matches_query(attributes: &StudentAttributes, query: &str) -> bool {
    let query = query.to_lowercase();
    let query = query.as_str();
    let field_matches = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| !value.is_empty() && value.to_lowercase().contains(query))
    };

    attributes.full_name().to_lowercase().contains(query)
        || field_matches(&attributes.gender)
        || field_matches(&attributes.current_address)
        || field_matches(&attributes.city)
        || field_matches(&attributes.state)
}

pub fn filter_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|student| matches_query(&student.attributes, query))
        .collect()
}

pub fn full_name_key(attributes: &StudentAttributes) -> String {
    attributes.full_name().to_lowercase()
}

/// Keeps the first student seen for each full-name key, preserving order.
pub fn dedup_by_full_name<'a>(students: impl IntoIterator<Item = &'a Student>) -> Vec<&'a Student> {
    let mut seen = HashSet::new();
    students
        .into_iter()
        .filter(|student| seen.insert(full_name_key(&student.attributes)))
        .collect()
}

/// Filter, then dedup.
pub fn visible_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    dedup_by_full_name(filter_students(students, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, RecordId};

    fn student(id: u64, first: Option<&str>, last: Option<&str>) -> Student {
        Record {
            id: RecordId::Number(id.into()),
            attributes: StudentAttributes {
                first_name: first.map(ToString::to_string),
                last_name: last.map(ToString::to_string),
                ..Default::default()
            },
        }
    }

    fn ids(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.id.to_string()).collect()
    }

    fn ann_ann_bob() -> Vec<Student> {
        vec![
            student(1, Some("Ann"), Some("Lee")),
            student(2, Some("ann"), Some("lee")),
            student(3, Some("Bob"), Some("Roe")),
        ]
    }

    #[test]
    fn searching_lee_gives_the_first_ann_only() {
        let students = ann_ann_bob();
        assert_eq!(ids(&visible_students(&students, "lee")), ["1"]);
        assert_eq!(ids(&visible_students(&students, "LEE")), ["1"]);
    }

    #[test]
    fn unfiltered_view_collapses_duplicate_names() {
        let students = ann_ann_bob();
        assert_eq!(ids(&visible_students(&students, "")), ["1", "3"]);
    }

    #[test]
    fn each_searched_field_can_match() {
        let mut s = student(9, Some("Zed"), Some("Zee"));
        s.attributes.gender = Some("Female".to_string());
        s.attributes.current_address = Some("12 Mill Lane".to_string());
        s.attributes.city = Some("Harrogate".to_string());
        s.attributes.state = Some("North Yorkshire".to_string());

        for query in ["zed zee", "FEMALE", "mill la", "harro", "yorkshire"] {
            assert!(matches_query(&s.attributes, query), "{query}");
        }
        assert!(!matches_query(&s.attributes, "london"));
    }

    #[test]
    fn unsearched_fields_do_not_match() {
        let mut s = student(4, Some("Kim"), Some("Park"));
        s.attributes.parent_email_id = Some("parent@example.com".to_string());
        s.attributes.blood_group = Some("AB-".to_string());

        assert!(!matches_query(&s.attributes, "example.com"));
        assert!(!matches_query(&s.attributes, "ab-"));
    }

    #[test]
    fn names_span_the_joining_space() {
        let s = student(5, Some("Mary"), Some("Jane"));
        assert!(matches_query(&s.attributes, "y j"));
        assert!(!matches_query(&s.attributes, "maryjane"));
    }

    #[test]
    fn missing_names_and_fields_are_tolerated() {
        let nameless = student(6, None, None);
        assert!(matches_query(&nameless.attributes, ""));
        assert!(matches_query(&nameless.attributes, " "));
        assert!(!matches_query(&nameless.attributes, "a"));

        let mut blank_city = student(7, Some("Al"), None);
        blank_city.attributes.city = Some(String::new());
        assert!(matches_query(&blank_city.attributes, "al"));
        assert!(!matches_query(&blank_city.attributes, "x"));
    }

    #[test]
    fn every_filtered_row_matches_some_field() {
        let mut students = ann_ann_bob();
        students[2].attributes.city = Some("Leeds".to_string());
        students.push(student(8, Some("Cy"), Some("Dee")));

        for query in ["lee", "ee", "b", "", "nobody"] {
            for row in filter_students(&students, query) {
                assert!(matches_query(&row.attributes, query), "{query}");
            }
        }
        assert_eq!(ids(&filter_students(&students, "lee")), ["1", "2", "3"]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_of_each_key() {
        let students = vec![
            student(1, Some("Bob"), Some("Roe")),
            student(2, Some("Ann"), Some("Lee")),
            student(3, Some("BOB"), Some("ROE")),
            student(4, Some("ann"), Some("LEE")),
            student(5, Some("Ann"), None),
        ];

        let kept = dedup_by_full_name(&students);
        assert_eq!(ids(&kept), ["1", "2", "5"]);

        let keys: HashSet<_> = kept.iter().map(|s| full_name_key(&s.attributes)).collect();
        assert_eq!(keys.len(), kept.len());
    }

    #[test]
    fn full_name_key_is_lowercase_first_space_last() {
        let s = student(1, Some("ÉMILE"), Some("Zola"));
        assert_eq!(full_name_key(&s.attributes), "émile zola");
    }
}
