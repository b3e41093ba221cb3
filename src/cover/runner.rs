//! Greedy cover execution loop.

use super::types::{CoverCandidate, Teacher};
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// One step of a cover: which candidate was chosen and what it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverAssignment<T> {
    /// Index of the chosen candidate in the input slice.
    pub candidate: usize,
    /// The uncovered items it took over (the intersection, not its whole
    /// capability set).
    pub covered: BTreeSet<T>,
}

/// Result of a successful greedy cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverResult<T> {
    /// Assignments in selection order.
    pub assignments: Vec<CoverAssignment<T>>,
}

impl<T> CoverResult<T> {
    /// Number of candidates used.
    pub fn candidates_used(&self) -> usize {
        self.assignments.len()
    }

    /// Chosen candidate indices in selection order.
    pub fn order(&self) -> Vec<usize> {
        self.assignments.iter().map(|a| a.candidate).collect()
    }
}

/// Greedy set-cover assigner.
///
/// At each step the remaining candidate covering the most uncovered items is
/// chosen. This is the classic greedy approximation: it does not guarantee
/// the minimum number of candidates.
pub struct GreedyCover;

impl GreedyCover {
    /// Covers `required` with `candidates`, each used at most once.
    ///
    /// An empty `required` set yields an empty assignment list.
    ///
    /// # Errors
    ///
    /// [`Error::UncoverableSet`] when no remaining candidate covers any of
    /// the items still uncovered.
    pub fn assign<C: CoverCandidate>(
        required: &BTreeSet<C::Item>,
        candidates: &[C],
    ) -> Result<CoverResult<C::Item>> {
        let mut uncovered = required.clone();
        let mut available: Vec<usize> = (0..candidates.len()).collect();
        let mut assignments = Vec::new();

        while !uncovered.is_empty() {
            // (position in `available`, coverage, priority)
            let mut best: Option<(usize, BTreeSet<C::Item>, C::Priority)> = None;

            for (pos, &idx) in available.iter().enumerate() {
                let candidate = &candidates[idx];
                let coverage: BTreeSet<C::Item> = candidate
                    .capabilities()
                    .intersection(&uncovered)
                    .cloned()
                    .collect();
                if coverage.is_empty() {
                    continue;
                }

                let priority = candidate.priority();
                let better = match &best {
                    None => true,
                    Some((_, best_coverage, best_priority)) => {
                        coverage.len() > best_coverage.len()
                            || (coverage.len() == best_coverage.len() && priority < *best_priority)
                    }
                };
                if better {
                    best = Some((pos, coverage, priority));
                }
            }

            let Some((pos, covered, _)) = best else {
                log::debug!(
                    "greedy cover stuck with {} uncovered items after {} assignments",
                    uncovered.len(),
                    assignments.len()
                );
                return Err(Error::UncoverableSet {
                    uncovered: uncovered.iter().map(|item| format!("{item:?}")).collect(),
                });
            };

            let candidate = available.remove(pos);
            for item in &covered {
                uncovered.remove(item);
            }
            log::debug!(
                "greedy cover picked candidate {} for {} items, {} left",
                candidate,
                covered.len(),
                uncovered.len()
            );
            assignments.push(CoverAssignment { candidate, covered });
        }

        Ok(CoverResult { assignments })
    }
}

/// Assigns teachers to `subjects` greedily, preferring the teacher who
/// covers the most remaining subjects and, on ties, the youngest.
///
/// Returns the chosen teachers in selection order, each with
/// `assigned_subjects` set to exactly the subjects it covers. Unchosen
/// teachers are dropped.
///
/// # Examples
///
/// ```
/// use u_localopt::cover::{create_schedule, Teacher};
///
/// let teachers = vec![
///     Teacher::new("Maria", "Petrenko", 38, "m.petrenko@example.com", ["Chemistry"]),
///     Teacher::new("Oleksandr", "Ivanenko", 45, "o.ivanenko@example.com", ["Math", "Physics"]),
/// ];
/// let schedule = create_schedule(["Math", "Physics", "Chemistry"], teachers).unwrap();
/// assert_eq!(schedule[0].first_name, "Oleksandr");
/// assert_eq!(schedule[1].assigned_subjects().len(), 1);
/// ```
pub fn create_schedule<I, S>(subjects: I, teachers: Vec<Teacher>) -> Result<Vec<Teacher>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let required: BTreeSet<String> = subjects.into_iter().map(Into::into).collect();
    let cover = GreedyCover::assign(&required, &teachers)?;

    let mut pool: Vec<Option<Teacher>> = teachers.into_iter().map(Some).collect();
    let schedule = cover
        .assignments
        .into_iter()
        .map(|assignment| {
            let mut teacher = pool[assignment.candidate]
                .take()
                .expect("greedy cover chooses each candidate at most once");
            teacher.assign(assignment.covered);
            teacher
        })
        .collect();
    Ok(schedule)
}
