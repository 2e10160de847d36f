use std::fmt;

use bacbot_catalog::Filiere;

/// Position of a sender's dialogue in the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Start,
    SelectFiliere,
    SelectSubject,
    SelectSemester,
    SelectMaterial,
    SelectCourse,
    SelectVideo,
    SelectExercise,
    MoreCourses,
}

impl Step {
    pub const ALL: [Self; 9] = [
        Self::Start,
        Self::SelectFiliere,
        Self::SelectSubject,
        Self::SelectSemester,
        Self::SelectMaterial,
        Self::SelectCourse,
        Self::SelectVideo,
        Self::SelectExercise,
        Self::MoreCourses,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SelectFiliere => "select_filiere",
            Self::SelectSubject => "select_subject",
            Self::SelectSemester => "select_semester",
            Self::SelectMaterial => "select_material",
            Self::SelectCourse => "select_course",
            Self::SelectVideo => "select_video",
            Self::SelectExercise => "select_exercise",
            Self::MoreCourses => "more_courses",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dialogue state of one sender.
///
/// `filiere`, `subject` and `semester` are filled in as their selection
/// steps complete and cleared again on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub sender_id: String,
    pub step: Step,
    pub filiere: Option<Filiere>,
    pub subject: Option<String>,
    pub semester: Option<u32>,
}

impl Session {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            step: Step::Start,
            filiere: None,
            subject: None,
            semester: None,
        }
    }

    /// Back to [`Step::Start`] with every selection forgotten.
    pub fn reset(&mut self) {
        self.step = Step::Start;
        self.filiere = None;
        self.subject = None;
        self.semester = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_empty() {
        let session = Session::new("psid-1");
        assert_eq!(session.step, Step::Start);
        assert!(session.filiere.is_none());
        assert!(session.subject.is_none());
        assert!(session.semester.is_none());
    }

    #[test]
    fn reset_clears_selections() {
        let mut session = Session {
            sender_id: "psid-1".into(),
            step: Step::SelectCourse,
            filiere: Some(Filiere::Svt),
            subject: Some("Géologie".into()),
            semester: Some(2),
        };
        session.reset();
        assert_eq!(session, Session::new("psid-1"));
    }

    #[test]
    fn step_names_are_unique() {
        let mut names: Vec<_> = Step::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Step::ALL.len());
    }
}
