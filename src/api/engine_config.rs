use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Explicit value-axis maximum. When absent (or degenerate) the
    /// scale is derived from the largest stacked column total.
    #[serde(default)]
    pub max_value: Option<f64>,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            max_value: None,
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            max_value: None,
        }
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 400)
}
