use bitedit::{EditorConfig, ToolMode};

/// Screen geometry of the thumbnail and the tool buttons to the right of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub mini_left: i32,
    pub mini_top: i32,
    pub mini_side: i32,
    pub radius: i32,
    centers: [(i32, i32); 7],
}

impl Palette {
    pub fn new(config: &EditorConfig) -> Self {
        let border = config.border as i32;
        let side = config.cells_side as i32;
        let grid_extent = config.layout().grid_extent() as i32;
        let mini_left = 2 * border + grid_extent;
        let half = side / 2;

        let mut centers = [(0, 0); 7];
        for (i, center) in centers.iter_mut().enumerate() {
            let i = i as i32;
            // buttons come in pairs, each pair one border further down
            *center = (mini_left + half, (i / 2 + 1) * border + (2 * i + 1) * half);
        }

        Self {
            mini_left,
            mini_top: (config.window as i32 - side) / 2,
            mini_side: side,
            radius: half,
            centers,
        }
    }

    pub fn center_of(&self, tool: ToolMode) -> (i32, i32) {
        self.centers[tool.index()]
    }

    /// The first tool whose button contains the point, edge included.
    pub fn tool_at(&self, x: i32, y: i32) -> Option<ToolMode> {
        let r = self.radius as i64;
        ToolMode::ALL.into_iter().find(|&tool| {
            let (cx, cy) = self.center_of(tool);
            let dx = (x - cx) as i64;
            let dy = (y - cy) as i64;
            dx * dx + dy * dy <= r * r
        })
    }

    /// Corners of the arrow drawn next to the active tool's button.
    pub fn highlight(&self, tool: ToolMode) -> [(i32, i32); 3] {
        let (cx, y) = self.center_of(tool);
        let x = cx + 8;
        [(x, y), (x + 14, y + 7), (x + 14, y - 7)]
    }
}
