use serde::{Deserialize, Serialize};

/// Editor behaviour settings.
///
/// `snap_x`/`snap_y` are the grid steps applied to pointer coordinates
/// when `snap_to_grid` is on. `default_is_filled` seeds the fill flag of
/// fillable shapes the tools create. `hit_threshold` is the default hit
/// radius hosts pass to the bounds queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    pub snap_to_grid: bool,
    pub snap_x: f64,
    pub snap_y: f64,
    pub default_is_filled: bool,
    pub hit_threshold: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            snap_x: 15.0,
            snap_y: 15.0,
            default_is_filled: false,
            hit_threshold: 6.0,
        }
    }
}
