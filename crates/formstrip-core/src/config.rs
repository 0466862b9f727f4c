//! Tab strip configuration

use serde::{Deserialize, Serialize};

use formstrip_gesture::DEFAULT_HORIZONTAL_BIAS;
use formstrip_overlay::DEFAULT_MENU_OFFSET;
use formstrip_tabs::{DEFAULT_COPY_SUFFIX, DEFAULT_NEW_TITLE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripConfig {
    /// Drag gate bias: movement reorders when `dx > dy / horizontal_bias`
    pub horizontal_bias: f32,
    /// Title for freshly added tabs
    pub new_tab_title: String,
    /// Suffix appended to duplicated tab titles
    pub copy_suffix: String,
    /// Gap in px between a tab's anchor and the context menu
    pub menu_offset: f32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            horizontal_bias: DEFAULT_HORIZONTAL_BIAS,
            new_tab_title: DEFAULT_NEW_TITLE.to_string(),
            copy_suffix: DEFAULT_COPY_SUFFIX.to_string(),
            menu_offset: DEFAULT_MENU_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StripConfig::default();
        assert_eq!(config.horizontal_bias, 1.2);
        assert_eq!(config.new_tab_title, "New Tab");
        assert_eq!(config.copy_suffix, " (Copy)");
        assert_eq!(config.menu_offset, 8.0);
    }
}
