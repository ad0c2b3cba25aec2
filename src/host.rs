//! Host layout seam.
//!
//! The carousel never touches a DOM directly. At mount it asks the host for
//! the view element (width, container, panel count) and whether touch input
//! is available; after that the host only pushes events in.

use serde::{Deserialize, Serialize};

/// Container holding the carousel panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerElement {
    /// Number of panel elements inside the container
    pub panel_count: usize,
}

/// The view element pointer events are bound to
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewElement {
    pub client_width: f32,
    pub container: Option<ContainerElement>,
}

impl ViewElement {
    /// Panels found under the container; a missing container counts as none.
    pub fn panel_count(&self) -> usize {
        self.container.map_or(0, |c| c.panel_count)
    }
}

/// Read-only view of the host UI layer used at mount time.
pub trait Host {
    /// Look up an element by id
    fn element_by_id(&self, id: &str) -> Option<ViewElement>;

    /// Whether the platform delivers touch events
    fn supports_touch(&self) -> bool;
}

/// In-memory host with a single view element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticHost {
    pub view_id: String,
    pub view: Option<ViewElement>,
    pub touch: bool,
}

impl StaticHost {
    /// Mouse host whose view has `panel_count` panels and the given width.
    pub fn new(view_id: impl Into<String>, client_width: f32, panel_count: usize) -> Self {
        Self {
            view_id: view_id.into(),
            view: Some(ViewElement {
                client_width,
                container: Some(ContainerElement { panel_count }),
            }),
            touch: false,
        }
    }

    /// Host without any view element.
    pub fn empty() -> Self {
        Self {
            view_id: String::new(),
            view: None,
            touch: false,
        }
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    /// Drop the container, leaving the view element in place.
    pub fn without_container(mut self) -> Self {
        if let Some(view) = self.view.as_mut() {
            view.container = None;
        }
        self
    }
}

impl Host for StaticHost {
    fn element_by_id(&self, id: &str) -> Option<ViewElement> {
        if id == self.view_id { self.view } else { None }
    }

    fn supports_touch(&self) -> bool {
        self.touch
    }
}
