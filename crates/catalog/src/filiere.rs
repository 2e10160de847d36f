use std::fmt;

/// The four academic streams a student can pick from, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filiere {
    SciencesMathA,
    SciencesMathB,
    SciencesPhysiques,
    Svt,
}

impl Filiere {
    pub const ALL: [Self; 4] = [
        Self::SciencesMathA,
        Self::SciencesMathB,
        Self::SciencesPhysiques,
        Self::Svt,
    ];

    /// Catalog name, compared verbatim against `CourseRecord::filiere`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SciencesMathA => "Sciences Mathématiques A",
            Self::SciencesMathB => "Sciences Mathématiques B",
            Self::SciencesPhysiques => "Sciences Physiques",
            Self::Svt => "Sciences de la Vie et de la Terre (SVT)",
        }
    }

    /// Resolve a 1-based menu index.
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Filiere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
