// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Paging bounds for one grid instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridLimits {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub max_page_size: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            page_size_options: vec![10, 25, 50, 100],
            max_page_size: 100,
        }
    }
}

impl GridLimits {
    /// Clamp a requested page size into the configured bounds.
    #[must_use]
    pub fn clamp_page_size(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_page_size)
    }
}
