//! Generic load/refetch state machine and categorical filters for the
//! entity list pages.
//!
//! DESIGN
//! ======
//! Users and students share one fetch/filter/mutate cycle; keeping the
//! machine generic means the pages only supply endpoints, columns, and
//! forms instead of re-implementing the lifecycle per entity.

#[cfg(test)]
#[path = "entity_list_test.rs"]
mod entity_list_test;

/// Load lifecycle for a remote collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Static operator-facing message; the raw error is only logged.
    Failed(String),
}

/// In-memory mirror of one remote collection plus its load phase.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityList<E> {
    pub items: Vec<E>,
    pub phase: LoadPhase,
}

impl<E> Default for EntityList<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
        }
    }
}

impl<E> EntityList<E> {
    /// Enter `Loading`; runs on mount and again before every refetch.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Replace the collection after a successful fetch.
    pub fn loaded(&mut self, items: Vec<E>) {
        self.items = items;
        self.phase = LoadPhase::Loaded;
    }

    /// Record a failed fetch. Rows already on screen are kept.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One categorical equality filter: a field accessor plus the selected
/// value. An empty selection imposes no constraint.
pub struct FieldFilter<E> {
    pub field: fn(&E) -> &str,
    pub selected: String,
}

/// Records passing every active filter, in input order.
pub fn apply_filters<E: Clone>(items: &[E], filters: &[FieldFilter<E>]) -> Vec<E> {
    items
        .iter()
        .filter(|item| {
            filters
                .iter()
                .all(|filter| filter.selected.is_empty() || (filter.field)(item) == filter.selected)
        })
        .cloned()
        .collect()
}
