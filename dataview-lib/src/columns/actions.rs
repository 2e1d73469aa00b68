//! Row action configuration

use std::fmt;
use std::sync::Arc;

/// Callback invoked with the record of the row an action was triggered on.
pub type RowCallback<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// A host-defined row action.
pub struct CustomAction<R> {
    /// Action id, used to invoke it.
    pub id: String,
    /// Menu label.
    pub label: String,
    /// The callback.
    pub callback: RowCallback<R>,
}

impl<R> Clone for CustomAction<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<R> fmt::Debug for CustomAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Which row action to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction<'a> {
    /// The view callback.
    View,
    /// The per-row delete callback.
    Delete,
    /// A custom action by id.
    Custom(&'a str),
}

/// Row actions shown in the trailing actions column.
///
/// The actions column only exists when at least one action is configured.
///
/// # Example
///
/// ```
/// use dataview_lib::columns::ActionConfig;
/// use dataview_lib::model::Record;
///
/// let actions = ActionConfig::new()
///     .on_view(|record: &Record| println!("open {:?}", record))
///     .custom("duplicate", "Duplicate", |_: &Record| {});
/// assert!(actions.has_actions());
/// ```
pub struct ActionConfig<R> {
    /// Opens the row's detail view.
    pub view: Option<RowCallback<R>>,
    /// Deletes the single row.
    pub delete: Option<RowCallback<R>>,
    /// Additional actions.
    pub custom: Vec<CustomAction<R>>,
}

impl<R> Default for ActionConfig<R> {
    fn default() -> Self {
        Self {
            view: None,
            delete: None,
            custom: Vec::new(),
        }
    }
}

impl<R> ActionConfig<R> {
    /// Creates an empty action config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the view callback.
    pub fn on_view<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.view = Some(Arc::new(f));
        self
    }

    /// Sets the per-row delete callback.
    pub fn on_delete<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.delete = Some(Arc::new(f));
        self
    }

    /// Adds a custom action.
    pub fn custom<F>(mut self, id: impl Into<String>, label: impl Into<String>, f: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.custom.push(CustomAction {
            id: id.into(),
            label: label.into(),
            callback: Arc::new(f),
        });
        self
    }

    /// Returns `true` if any action is configured.
    pub fn has_actions(&self) -> bool {
        self.view.is_some() || self.delete.is_some() || !self.custom.is_empty()
    }

    /// Returns the callback for an action, if configured.
    pub fn callback(&self, action: RowAction<'_>) -> Option<&RowCallback<R>> {
        match action {
            RowAction::View => self.view.as_ref(),
            RowAction::Delete => self.delete.as_ref(),
            RowAction::Custom(id) => self.custom.iter().find(|a| a.id == id).map(|a| &a.callback),
        }
    }
}

impl<R> Clone for ActionConfig<R> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            delete: self.delete.clone(),
            custom: self.custom.clone(),
        }
    }
}

impl<R> fmt::Debug for ActionConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("view", &self.view.is_some())
            .field("delete", &self.delete.is_some())
            .field("custom", &self.custom)
            .finish()
    }
}
