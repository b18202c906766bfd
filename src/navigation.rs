//! The two storefront destinations and a simple back stack.

use serde::{Deserialize, Serialize};

pub const LIST_TITLE: &str = "List";
pub const DETAIL_TITLE: &str = "Detail";

/// A navigable destination and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "PascalCase")]
pub enum Route {
    List,
    #[serde(rename_all = "camelCase")]
    Detail { item_id: i64, item_title: String },
}

impl Route {
    pub fn detail(item_id: i64, item_title: impl Into<String>) -> Self {
        Route::Detail {
            item_id,
            item_title: item_title.into(),
        }
    }

    /// Parameters used when the detail destination is opened without any.
    pub fn detail_default() -> Self {
        Route::detail(0, DETAIL_TITLE)
    }

    /// Title shown in the destination's header.
    pub fn header(&self) -> &str {
        match self {
            Route::List => LIST_TITLE,
            Route::Detail { item_title, .. } => item_title,
        }
    }
}

/// Back stack rooted at [`Route::List`].
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(header = route.header(), "navigate");
        self.stack.push(route);
    }

    /// Pop the current destination. The root is never popped.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
