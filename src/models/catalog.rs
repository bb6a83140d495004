use std::collections::BTreeMap;

use crate::models::Course;

/// The read-only set of available courses, grouped by slot-type.
///
/// Slot-types iterate in name order and courses within a slot-type are kept
/// name-sorted, so a seeded planning run sees the same candidate ordering on
/// every machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: BTreeMap<String, Vec<Course>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert(course);
        }
        catalog
    }

    /// Insert a course, replacing any same-named course of the same
    /// slot-type. Names are unique within a slot-type.
    pub fn insert(&mut self, course: Course) {
        let pool = self.courses.entry(course.slot_type.clone()).or_default();
        match pool.binary_search_by(|c| c.name.as_str().cmp(&course.name)) {
            Ok(i) => pool[i] = course,
            Err(i) => pool.insert(i, course),
        }
    }

    pub fn slot_types(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn courses_of(&self, slot_type: &str) -> &[Course] {
        self.courses.get(slot_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Course])> {
        self.courses.iter().map(|(t, c)| (t.as_str(), c.as_slice()))
    }

    /// Whether any slot-type holds a course with this (lowercase) name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.all_names().any(|n| n == name)
    }

    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.courses
            .values()
            .flat_map(|pool| pool.iter().map(|c| c.name.as_str()))
    }

    /// Total number of courses across all slot-types.
    pub fn len(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
