//! Cover candidates and the teacher entity.

use std::collections::BTreeSet;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An agent that can cover some of the required items.
///
/// The greedy assigner prefers the candidate covering the most uncovered
/// items; among candidates tied on coverage, the smaller [`priority`]
/// wins, and remaining ties go to the earlier candidate.
///
/// [`priority`]: CoverCandidate::priority
pub trait CoverCandidate {
    /// Item type being covered.
    type Item: Ord + Clone + Debug;

    /// Secondary ordering key. Lower wins ties.
    type Priority: Ord;

    /// The fixed set of items this candidate can cover.
    fn capabilities(&self) -> &BTreeSet<Self::Item>;

    /// Tie-break key among candidates with equal coverage.
    fn priority(&self) -> Self::Priority;
}

/// A teacher with a fixed set of teachable subjects.
///
/// `assigned_subjects` starts empty for every instance and is filled once,
/// by [`create_schedule`](super::create_schedule), with exactly the
/// subjects the teacher was chosen to cover.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Teacher {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    can_teach: BTreeSet<String>,
    assigned_subjects: BTreeSet<String>,
}

impl Teacher {
    /// Creates a teacher with an empty assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localopt::cover::Teacher;
    ///
    /// let t = Teacher::new("Olena", "Hrytsenko", 42, "o.hrytsenko@example.com", ["Biology"]);
    /// assert!(t.can_teach().contains("Biology"));
    /// assert!(t.assigned_subjects().is_empty());
    /// ```
    pub fn new<S>(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        can_teach: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
            can_teach: can_teach.into_iter().map(Into::into).collect(),
            assigned_subjects: BTreeSet::new(),
        }
    }

    /// Subjects this teacher is able to teach.
    pub fn can_teach(&self) -> &BTreeSet<String> {
        &self.can_teach
    }

    /// Subjects assigned by the scheduler (empty until scheduled).
    pub fn assigned_subjects(&self) -> &BTreeSet<String> {
        &self.assigned_subjects
    }

    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub(crate) fn assign(&mut self, subjects: BTreeSet<String>) {
        self.assigned_subjects = subjects;
    }
}

impl CoverCandidate for Teacher {
    type Item = String;
    type Priority = u32;

    fn capabilities(&self) -> &BTreeSet<String> {
        &self.can_teach
    }

    fn priority(&self) -> u32 {
        self.age
    }
}
