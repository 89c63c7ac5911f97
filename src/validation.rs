//! Input validation for kitchen task lists.
//!
//! The task-construction boundary. Checks structural integrity of tasks
//! before scheduling. Detects:
//! - Duplicate IDs
//! - Zero durations
//! - Blank labels
//! - Dependencies on unknown tasks
//! - Circular dependencies (DAG validation)
//!
//! The scheduler does not read `depends_on`, but a cyclic or dangling
//! dependency list is still malformed input.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{flatten_recipes, AtomicTask, Recipe};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has a zero duration.
    ZeroDuration,
    /// A task has an empty or whitespace-only label.
    BlankLabel,
    /// A task depends on an ID that doesn't exist.
    InvalidDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task list.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. Every duration is positive
/// 3. Every label is non-blank
/// 4. All `depends_on` references point to existing tasks
/// 5. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[AtomicTask]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.duration_minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Task '{}' has a zero duration", task.id),
            ));
        }

        if task.label.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankLabel,
                format!("Task '{}' has no label", task.id),
            ));
        }
    }

    for task in tasks {
        for dep in &task.depends_on {
            if !task_ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDependency,
                    format!("Task '{}' depends on unknown task '{}'", task.id, dep),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates every task across a set of recipes.
pub fn validate_recipes(recipes: &[Recipe]) -> ValidationResult {
    validate_tasks(&flatten_recipes(recipes))
}

/// Detects cycles in the dependency graph using DFS.
///
/// Nodes are visited in input order so the reported task is stable.
fn detect_cycles(tasks: &[AtomicTask]) -> Option<ValidationError> {
    // dependency → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for task in tasks {
        for dep in &task.depends_on {
            adj.entry(dep.as_str()).or_default().push(task.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
