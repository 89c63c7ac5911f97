//! Task and recipe models.
//!
//! An atomic task is one indivisible unit of cooking work performed at a
//! single station. Recipes are upstream containers of tasks; the scheduler
//! only ever sees the flattened task list.

use serde::{Deserialize, Serialize};

use super::Station;

/// One indivisible unit of cooking work.
///
/// # Invariant
/// `duration_minutes > 0`. Enforced by [`crate::validation::validate_tasks`];
/// the scheduler itself places whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicTask {
    /// Unique task identifier within a scheduling run.
    pub id: String,
    /// Human-readable description (e.g., "Dice onions").
    pub label: String,
    /// Wall-clock minutes the task occupies its station.
    pub duration_minutes: u32,
    /// Station the task runs at.
    pub station: Station,
    /// IDs of tasks that must finish before this one starts.
    ///
    /// Carried for API shape; placement does not read it.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Free text, passed through to the scheduled task.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AtomicTask {
    /// Creates a task at the given station.
    pub fn new(id: impl Into<String>, station: impl Into<Station>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            duration_minutes,
            station: station.into(),
            depends_on: Vec::new(),
            notes: None,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.depends_on.push(task_id.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A recipe already decomposed into atomic tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Servings the recipe is written for.
    #[serde(default)]
    pub headcount: u32,
    /// Tasks in recipe order.
    #[serde(default)]
    pub tasks: Vec<AtomicTask>,
    /// Where the recipe came from (URL, "manual", ...).
    #[serde(default)]
    pub source: Option<String>,
}

impl Recipe {
    /// Creates an empty recipe.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            headcount: 0,
            tasks: Vec::new(),
            source: None,
        }
    }

    /// Sets the headcount.
    pub fn with_headcount(mut self, headcount: u32) -> Self {
        self.headcount = headcount;
        self
    }

    /// Appends a task.
    pub fn with_task(mut self, task: AtomicTask) -> Self {
        self.tasks.push(task);
        self
    }

    /// Sets the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Total active minutes across all tasks.
    pub fn total_minutes(&self) -> u64 {
        self.tasks.iter().map(|t| u64::from(t.duration_minutes)).sum()
    }
}

/// Flattens recipes into one task list, preserving recipe and task order.
pub fn flatten_recipes(recipes: &[Recipe]) -> Vec<AtomicTask> {
    recipes.iter().flat_map(|r| r.tasks.iter().cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = AtomicTask::new("t1", "stove", 10)
            .with_label("Sauté onions")
            .with_dependency("t0")
            .with_notes("medium heat");

        assert_eq!(task.id, "t1");
        assert_eq!(task.station, Station::Stove);
        assert_eq!(task.duration_minutes, 10);
        assert_eq!(task.depends_on, vec!["t0"]);
        assert_eq!(task.notes.as_deref(), Some("medium heat"));
    }

    #[test]
    fn test_task_deserialize_defaults() {
        let json = r#"{"id":"t1","label":"Rest","duration_minutes":15,"station":"passive"}"#;
        let task: AtomicTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.station, Station::Passive);
        assert!(task.depends_on.is_empty());
        assert!(task.notes.is_none());
    }

    #[test]
    fn test_flatten_preserves_order() {
        let r1 = Recipe::new("r1", "Roast Chicken")
            .with_task(AtomicTask::new("a", "oven", 60))
            .with_task(AtomicTask::new("b", "prep", 5));
        let r2 = Recipe::new("r2", "Mash").with_task(AtomicTask::new("c", "stove", 20));

        let ids: Vec<String> = flatten_recipes(&[r1.clone(), r2])
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(r1.total_minutes(), 65);
    }

    #[test]
    fn test_total_minutes_long_recipe() {
        let recipe = Recipe::new("r1", "Cured Ham")
            .with_task(AtomicTask::new("cure", "passive", u32::MAX))
            .with_task(AtomicTask::new("smoke", "passive", u32::MAX));
        assert_eq!(recipe.total_minutes(), 2 * u64::from(u32::MAX));
    }
}
