use std::fmt;

/// Opaque handle tying an expected answer to something the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Id of a labeled shape in a map quiz.
    Region(String),
    /// Row index in a text or matching quiz.
    Slot(usize),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Region(id) => write!(f, "{}", id),
            Identifier::Slot(index) => write!(f, "#{}", index + 1),
        }
    }
}

/// How an entry ended up once it was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// The player typed the answer.
    Correct,
    /// The player gave up before finding it.
    Missed,
}

/// One expected answer and its progress within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    id: Identifier,
    expected: String,
    prompt: Option<String>,
    solved: bool,
    revealed: Option<Reveal>,
}

impl AnswerEntry {
    pub fn new(id: Identifier, expected: impl Into<String>) -> Self {
        Self {
            id,
            expected: expected.into(),
            prompt: None,
            solved: false,
            revealed: None,
        }
    }

    /// Attach the key shown next to this slot in a matching quiz.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn revealed(&self) -> Option<Reveal> {
        self.revealed
    }

    pub(crate) fn mark_correct(&mut self) {
        self.solved = true;
        self.revealed = Some(Reveal::Correct);
    }

    /// Only unsolved, unrevealed entries can be marked missed.
    pub(crate) fn mark_missed(&mut self) -> bool {
        if self.solved || self.revealed.is_some() {
            return false;
        }
        self.revealed = Some(Reveal::Missed);
        true
    }
}
