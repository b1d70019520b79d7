//! Course model and group expansion.
//!
//! A course is the external unit of configuration: a code plus how many
//! parallel groups it runs. The scheduling core only ever sees the
//! expanded [`Group`] list.

use serde::{Deserialize, Serialize};

use super::{Group, RoomType};

/// A course to be expanded into schedulable groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g. `"MAT101"`).
    pub code: String,
    /// Human-readable name, for documentation only.
    pub name: String,
    /// Number of parallel groups this course runs.
    pub number_of_groups: usize,
    /// Span length of each group in blocks.
    pub duration: usize,
    /// Room class every group of this course requires.
    pub required_room_type: RoomType,
    /// Expected group size, carried into each group's minimum capacity.
    pub group_size: Option<u32>,
    /// Advisory room wish shared by all groups of this course.
    pub preferred_room: Option<String>,
}

impl Course {
    /// Creates a new course.
    ///
    /// The required room type is inferred from the course code
    /// (`L`/`P` suffix → lab); override with [`Course::with_room_type`].
    pub fn new(code: impl Into<String>, number_of_groups: usize, duration: usize) -> Self {
        let code = code.into();
        let required_room_type = RoomType::infer_from_course_code(&code);
        Self {
            code,
            name: String::new(),
            number_of_groups,
            duration,
            required_room_type,
            group_size: None,
            preferred_room: None,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Overrides the inferred room type.
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.required_room_type = room_type;
        self
    }

    /// Sets the expected group size.
    pub fn with_group_size(mut self, size: u32) -> Self {
        self.group_size = Some(size);
        self
    }

    /// Sets the advisory preferred room.
    pub fn with_preferred_room(mut self, room: impl Into<String>) -> Self {
        self.preferred_room = Some(room.into());
        self
    }

    /// Expands this course into its groups.
    ///
    /// Group ids follow the `"{code}-G{n}"` convention with `n`
    /// starting at 1.
    pub fn generate_groups(&self) -> Vec<Group> {
        (1..=self.number_of_groups)
            .map(|n| {
                let mut group = Group::new(
                    format!("{}-G{n}", self.code),
                    self.duration,
                    self.required_room_type.clone(),
                )
                .with_course_code(&self.code);
                group.minimum_size = self.group_size;
                group.preferred_room = self.preferred_room.clone();
                group
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_ids_and_attributes() {
        let course = Course::new("MAT101", 3, 2)
            .with_group_size(30)
            .with_preferred_room("A1");
        let groups = course.generate_groups();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].id, "MAT101-G1");
        assert_eq!(groups[2].id, "MAT101-G3");
        for group in &groups {
            assert_eq!(group.course_code.as_deref(), Some("MAT101"));
            assert_eq!(group.duration, 2);
            assert_eq!(group.required_room_type, RoomType::Standard);
            assert_eq!(group.minimum_size, Some(30));
            assert_eq!(group.preferred_room.as_deref(), Some("A1"));
            assert!(!group.is_assigned());
        }
    }

    #[test]
    fn test_room_type_inferred_from_code() {
        assert_eq!(
            Course::new("BIJ400", 1, 1).required_room_type,
            RoomType::Standard
        );
        assert_eq!(
            Course::new("BIJ400L", 1, 1).required_room_type,
            RoomType::Lab
        );
        assert_eq!(
            Course::new("BIJ405P", 1, 1).required_room_type,
            RoomType::Lab
        );
    }

    #[test]
    fn test_room_type_override() {
        let course = Course::new("ART300P", 1, 1).with_room_type(RoomType::Standard);
        assert_eq!(course.required_room_type, RoomType::Standard);
        assert_eq!(
            course.generate_groups()[0].required_room_type,
            RoomType::Standard
        );
    }

    #[test]
    fn test_zero_groups_expand_to_nothing() {
        let course = Course::new("MAT101", 0, 2);
        assert!(course.generate_groups().is_empty());
    }
}
