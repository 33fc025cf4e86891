use glam::Vec2;

/// Pointer state shared between the input listeners and the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub last_spawn: Vec2,
    pub moved: bool,
    /// False until the first movement after creation or a reset; that
    /// movement only anchors `last_spawn`.
    pub anchored: bool,
}

impl CursorState {
    pub fn centered(size: Vec2) -> Self {
        let mut c = Self::default();
        c.reset(size);
        c
    }

    #[inline]
    pub fn move_to(&mut self, position: Vec2) {
        if !self.anchored {
            self.last_spawn = position;
            self.anchored = true;
        }
        self.position = position;
        self.moved = true;
    }

    /// Pointer left the surface: park at the center of `size`.
    pub fn reset(&mut self, size: Vec2) {
        let center = size * 0.5;
        self.position = center;
        self.last_spawn = center;
        self.moved = false;
        self.anchored = false;
    }

    #[inline]
    pub fn distance_since_spawn(&self) -> f32 {
        self.position.distance(self.last_spawn)
    }
}
