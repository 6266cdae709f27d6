//! Turn a recorded draw list into per-mesh instance arrays

use game_core::{DrawCmd, DrawList};
use glam::Vec2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// Text to place over the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
}

/// One frame's worth of instances, in draw order within each mesh
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
    pub texts: Vec<TextItem>,
}

impl FrameBatch {
    pub fn from_draw_list(list: &DrawList) -> Self {
        let mut batch = Self::default();
        for cmd in list.iter() {
            match cmd {
                DrawCmd::Rect { pos, size, color } => batch.rects.push(InstanceData {
                    transform: [pos.x, pos.y, size.x, size.y],
                    tint: color.to_f32_array(),
                }),
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => batch.circles.push(InstanceData {
                    transform: [center.x, center.y, *radius, *radius],
                    tint: color.to_f32_array(),
                }),
                DrawCmd::Text { text, pos } => batch.texts.push(TextItem {
                    text: text.clone(),
                    pos: *pos,
                }),
            }
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{draw_frame, Config, GameRng, GameState};

    #[test]
    fn test_game_scene_batches() {
        let config = Config::new();
        let mut state = GameState::new(&config, &mut GameRng::default());
        state.reset(&config);
        let mut list = DrawList::new();
        draw_frame(&state, &config, &mut list);

        let batch = FrameBatch::from_draw_list(&list);

        assert_eq!(batch.rects.len(), 3, "Background and two paddles");
        assert_eq!(batch.circles.len(), 1, "Ball");
        assert_eq!(batch.texts.len(), 1, "Score line");

        assert_eq!(batch.rects[0].transform, [0.0, 0.0, 640.0, 480.0]);
        assert_eq!(batch.rects[0].tint, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(batch.rects[1].transform, [0.0, 205.0, 10.0, 70.0]);
        assert_eq!(batch.circles[0].transform, [320.0, 240.0, 5.0, 5.0]);
        assert_eq!(batch.texts[0].pos, Vec2::new(230.0, 20.0));
    }

    #[test]
    fn test_instance_data_layout() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
