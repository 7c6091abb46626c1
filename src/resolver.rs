//! Prerequisite dependency resolution.
//!
//! Materializes the prerequisite relation as an index-based adjacency
//! list (prerequisite → dependents) and orders courses topologically.
//!
//! # Algorithm
//! Kahn's algorithm with a FIFO queue seeded in input order, so ties are
//! broken by input position and the output is reproducible. If fewer
//! nodes are emitted than were given, the remainder sits on or behind a
//! cycle and resolution fails with [`PlanError::CycleDetected`].
//!
//! Prerequisite ids that do not name a course in the input are not edges.
//!
//! # Complexity
//! O(V + E).
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks", CACM 5(11)

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::models::CourseNode;

/// Dense-index prerequisite graph over a borrowed course list.
#[derive(Debug, Clone)]
pub struct CourseGraph<'a> {
    courses: &'a [CourseNode],
    index: HashMap<&'a str, usize>,
    dependents: Vec<Vec<usize>>,
    prereqs: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<'a> CourseGraph<'a> {
    /// Builds the graph. Course `i` in the input gets index `i`.
    ///
    /// If an id occurs more than once, prerequisite references resolve to
    /// its first occurrence.
    pub fn build(courses: &'a [CourseNode]) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            index.entry(course.id.as_str()).or_insert(i);
        }

        let mut dependents = vec![Vec::new(); courses.len()];
        let mut prereqs: Vec<Vec<usize>> = vec![Vec::new(); courses.len()];
        let mut edge_count = 0;

        for (i, course) in courses.iter().enumerate() {
            for prereq_id in &course.prereq_ids {
                let Some(&p) = index.get(prereq_id.as_str()) else {
                    continue;
                };
                if prereqs[i].contains(&p) {
                    continue;
                }
                prereqs[i].push(p);
                dependents[p].push(i);
                edge_count += 1;
            }
        }

        debug!(
            courses = courses.len(),
            edges = edge_count,
            "built prerequisite graph"
        );

        Self {
            courses,
            index,
            dependents,
            prereqs,
            edge_count,
        }
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of distinct in-set prerequisite edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether a course id is part of the graph.
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Course at an index.
    pub fn course(&self, idx: usize) -> &'a CourseNode {
        &self.courses[idx]
    }

    /// Indices of the in-set prerequisites of a course.
    pub fn prereqs_of(&self, idx: usize) -> &[usize] {
        &self.prereqs[idx]
    }

    /// Indices of the courses that list `idx` as a prerequisite.
    pub fn dependents_of(&self, idx: usize) -> &[usize] {
        &self.dependents[idx]
    }

    /// Topological order as indices.
    ///
    /// # Errors
    /// [`PlanError::CycleDetected`] naming every course left unordered.
    pub fn topological_order(&self) -> Result<Vec<usize>> {
        let n = self.len();
        let mut in_degree: Vec<usize> = (0..n).map(|i| self.prereqs_of(i).len()).collect();

        let mut queue: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &w in self.dependents_of(v) {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    queue.push_back(w);
                }
            }
        }

        if order.len() < n {
            let course_ids: Vec<String> = (0..n)
                .filter(|&i| in_degree[i] > 0)
                .map(|i| self.course(i).id.clone())
                .collect();
            warn!(
                unresolved = course_ids.len(),
                courses = ?course_ids,
                "prerequisite cycle detected"
            );
            return Err(PlanError::CycleDetected { course_ids });
        }

        Ok(order)
    }

    /// Courses in topological order.
    pub fn ordered_courses(&self) -> Result<Vec<&'a CourseNode>> {
        Ok(self
            .topological_order()?
            .into_iter()
            .map(|i| self.course(i))
            .collect())
    }
}

/// Orders courses so every in-set prerequisite precedes its dependents.
///
/// # Example
///
/// ```
/// use u_courseplan::models::CourseNode;
/// use u_courseplan::resolver::resolve;
///
/// let courses = vec![
///     CourseNode::new("B", 3).with_prereq("A"),
///     CourseNode::new("A", 3),
/// ];
/// let order: Vec<&str> = resolve(&courses)
///     .unwrap()
///     .into_iter()
///     .map(|c| c.id.as_str())
///     .collect();
/// assert_eq!(order, vec!["A", "B"]);
/// ```
pub fn resolve(courses: &[CourseNode]) -> Result<Vec<&CourseNode>> {
    CourseGraph::build(courses).ordered_courses()
}
