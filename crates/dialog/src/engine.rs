use {
    bacbot_catalog::{CatalogClient, CourseRecord, Filiere},
    bacbot_sessions::{Session, Step},
    tracing::debug,
};

use crate::{
    input::{is_greeting, is_reset, parse_choice},
    message::OutboundMessage,
    prompts,
};

/// What kind of material the student asked for at `SelectMaterial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Courses,
    Videos,
    Exercises,
}

impl MaterialKind {
    const MENU: [Self; 3] = [Self::Courses, Self::Videos, Self::Exercises];

    fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::MENU.get(i).copied())
    }

    fn selection_step(self) -> Step {
        match self {
            Self::Courses => Step::SelectCourse,
            Self::Videos => Step::SelectVideo,
            Self::Exercises => Step::SelectExercise,
        }
    }

    fn listing(self, records: &[CourseRecord]) -> String {
        let titles = records.iter().map(|r| r.title.as_str());
        match self {
            Self::Courses => prompts::course_list(titles),
            Self::Videos => prompts::video_list(titles),
            Self::Exercises => prompts::exercise_list(titles),
        }
    }
}

/// Why a turn sent the dialogue back to [`Step::Start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// The sender typed the reset token.
    Requested,
    /// The chosen filiere has no subjects, or the catalog was unavailable.
    NoSubjects,
    /// No material matches the selection, or the catalog was unavailable.
    NothingAvailable,
    /// The sender declined more material.
    Finished,
}

/// How a turn was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The input was valid and the dialogue moved on.
    Advanced,
    /// The input was not valid for the current step; state is unchanged.
    Rejected,
    Reset(ResetReason),
    /// The session was missing a selection its step depends on; state is
    /// unchanged and a generic error was sent.
    Fallback,
}

/// Result of one turn: the session to store and the replies to send, in
/// order.
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: Session,
    pub messages: Vec<OutboundMessage>,
    pub outcome: TurnOutcome,
}

impl Transition {
    fn advanced(session: Session, messages: Vec<OutboundMessage>) -> Self {
        Self {
            session,
            messages,
            outcome: TurnOutcome::Advanced,
        }
    }

    fn rejected(session: Session, text: &str) -> Self {
        Self {
            session,
            messages: vec![OutboundMessage::text(text)],
            outcome: TurnOutcome::Rejected,
        }
    }

    fn reset(mut session: Session, messages: Vec<OutboundMessage>, reason: ResetReason) -> Self {
        session.reset();
        Self {
            session,
            messages,
            outcome: TurnOutcome::Reset(reason),
        }
    }

    fn fallback(session: Session) -> Self {
        Self {
            session,
            messages: vec![OutboundMessage::text(prompts::UNEXPECTED)],
            outcome: TurnOutcome::Fallback,
        }
    }
}

/// The menu state machine.
#[derive(Clone)]
pub struct DialogEngine {
    catalog: CatalogClient,
}

impl DialogEngine {
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }

    /// Apply one inbound token to `session`.
    ///
    /// Never fails: invalid input re-prompts without touching the state, and
    /// an unavailable catalog behaves like an empty one.
    ///
    /// In the course, video and exercise selection steps, an in-range index
    /// whose record has no URL for that material is rejected with the "not
    /// found" reply and the step stays put, rather than moving on to
    /// `MoreCourses` with nothing sent.
    pub async fn handle(&self, session: &Session, input: &str) -> Transition {
        let token = input.trim();
        let next = session.clone();

        let transition = if is_reset(token) {
            Transition::reset(next, welcome(), ResetReason::Requested)
        } else {
            match session.step {
                Step::Start => on_start(next, token),
                Step::SelectFiliere => self.on_select_filiere(next, token).await,
                Step::SelectSubject => self.on_select_subject(next, token).await,
                Step::SelectSemester => on_select_semester(next, token),
                Step::SelectMaterial => self.on_select_material(next, token).await,
                Step::SelectCourse => self.on_select_item(next, token, MaterialKind::Courses).await,
                Step::SelectVideo => self.on_select_item(next, token, MaterialKind::Videos).await,
                Step::SelectExercise => {
                    self.on_select_item(next, token, MaterialKind::Exercises).await
                },
                Step::MoreCourses => on_more_courses(next, token),
            }
        };

        debug!(
            sender_id = %session.sender_id,
            from = %session.step,
            to = %transition.session.step,
            outcome = ?transition.outcome,
            replies = transition.messages.len(),
            "dialog turn"
        );
        transition
    }

    async fn on_select_filiere(&self, mut next: Session, token: &str) -> Transition {
        let Some(filiere) = parse_choice(token, Filiere::ALL.len()).and_then(Filiere::from_index)
        else {
            return Transition::rejected(next, prompts::INVALID_CHOICE);
        };

        let subjects = self.catalog.distinct_subjects(filiere.as_str()).await;
        if subjects.is_empty() {
            return Transition::reset(
                next,
                vec![OutboundMessage::text_with_replies(
                    prompts::no_subjects(filiere),
                    vec![prompts::back_to_start()],
                )],
                ResetReason::NoSubjects,
            );
        }

        next.filiere = Some(filiere);
        next.subject = None;
        next.semester = None;
        next.step = Step::SelectSubject;
        let menu = prompts::subject_menu(filiere, &subjects);
        Transition::advanced(next, vec![OutboundMessage::text(menu)])
    }

    async fn on_select_subject(&self, mut next: Session, token: &str) -> Transition {
        let Some(filiere) = next.filiere else {
            return Transition::fallback(next);
        };

        let subjects = self.catalog.distinct_subjects(filiere.as_str()).await;
        let Some(subject) = parse_choice(token, subjects.len())
            .and_then(|n| subjects.into_iter().nth(n - 1))
        else {
            return Transition::rejected(next, prompts::INVALID_CHOICE);
        };

        let menu = prompts::semester_menu(&subject);
        next.subject = Some(subject);
        next.semester = None;
        next.step = Step::SelectSemester;
        Transition::advanced(next, vec![OutboundMessage::text(menu)])
    }

    async fn on_select_material(&self, next: Session, token: &str) -> Transition {
        let Some(kind) =
            parse_choice(token, MaterialKind::MENU.len()).and_then(MaterialKind::from_choice)
        else {
            return Transition::rejected(next, prompts::INVALID_CHOICE);
        };
        let Some(records) = self.current_materials(&next).await else {
            return Transition::fallback(next);
        };

        if records.is_empty() {
            return Transition::reset(
                next,
                vec![OutboundMessage::text_with_replies(
                    prompts::NOTHING_AVAILABLE,
                    vec![prompts::back_to_start()],
                )],
                ResetReason::NothingAvailable,
            );
        }

        let mut next = next;
        next.step = kind.selection_step();
        let listing = kind.listing(&records);
        Transition::advanced(next, vec![OutboundMessage::text(listing)])
    }

    async fn on_select_item(&self, mut next: Session, token: &str, kind: MaterialKind) -> Transition {
        let Some(records) = self.current_materials(&next).await else {
            return Transition::fallback(next);
        };
        let Some(record) = parse_choice(token, records.len())
            .and_then(|n| records.into_iter().nth(n - 1))
        else {
            return Transition::rejected(next, prompts::NOT_FOUND);
        };

        let messages = match kind {
            MaterialKind::Courses => record.pdf_url.as_deref().map(|url| {
                vec![
                    OutboundMessage::file(url),
                    OutboundMessage::text(prompts::course_sent(&record.title)),
                ]
            }),
            MaterialKind::Videos => record.video_url.as_deref().map(|url| {
                vec![
                    OutboundMessage::text(prompts::video_link(url)),
                    OutboundMessage::text(prompts::MORE_VIDEOS),
                ]
            }),
            MaterialKind::Exercises => record.exercise_pdf_url.as_deref().map(|url| {
                vec![
                    OutboundMessage::file(url),
                    OutboundMessage::text(prompts::EXERCISE_SENT),
                ]
            }),
        };
        let Some(messages) = messages else {
            debug!(title = %record.title, ?kind, "selected record has no url for this material");
            return Transition::rejected(next, prompts::NOT_FOUND);
        };

        next.step = Step::MoreCourses;
        Transition::advanced(next, messages)
    }

    /// Records for the session's filiere, subject and semester, or `None`
    /// when one of them has not been selected yet.
    async fn current_materials(&self, session: &Session) -> Option<Vec<CourseRecord>> {
        let filiere = session.filiere?;
        let subject = session.subject.as_deref()?;
        let semester = session.semester?;
        Some(
            self.catalog
                .matching(filiere.as_str(), subject, semester)
                .await,
        )
    }
}

fn welcome() -> Vec<OutboundMessage> {
    vec![
        OutboundMessage::text(prompts::WELCOME),
        OutboundMessage::text(prompts::filiere_menu()),
    ]
}

fn on_start(mut next: Session, token: &str) -> Transition {
    if !is_greeting(token) {
        return Transition::rejected(next, prompts::NOT_UNDERSTOOD);
    }
    next.step = Step::SelectFiliere;
    Transition::advanced(next, welcome())
}

fn on_select_semester(mut next: Session, token: &str) -> Transition {
    let Some(semester) = parse_choice(token, 2) else {
        return Transition::rejected(next, prompts::INVALID_CHOICE);
    };
    let semester = semester as u32;
    next.semester = Some(semester);
    next.step = Step::SelectMaterial;
    let menu = prompts::material_menu(semester);
    Transition::advanced(next, vec![OutboundMessage::text(menu)])
}

fn on_more_courses(mut next: Session, token: &str) -> Transition {
    match parse_choice(token, 2) {
        Some(1) => {
            next.step = Step::SelectMaterial;
            let menu = OutboundMessage::text(prompts::MATERIAL_MENU_AGAIN);
            Transition::advanced(next, vec![menu])
        },
        Some(_) => Transition::reset(
            next,
            vec![OutboundMessage::text(prompts::FAREWELL)],
            ResetReason::Finished,
        ),
        None => Transition::rejected(next, prompts::INVALID_CHOICE),
    }
}
