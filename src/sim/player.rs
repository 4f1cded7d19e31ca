//! The player avatar
//!
//! The player only moves horizontally along a fixed row near the bottom of
//! the screen, steered by which half of the screen is being touched.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which half of the screen is touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchSide {
    #[default]
    None,
    Left,
    Right,
}

impl TouchSide {
    /// Right half is strictly past the middle column
    pub fn from_touch(touch: Option<(i32, i32)>) -> Self {
        match touch {
            Some((x, _)) if x > SCREEN_WIDTH / 2 => TouchSide::Right,
            Some(_) => TouchSide::Left,
            None => TouchSide::None,
        }
    }

    /// Horizontal direction: -1, 0 or 1
    pub fn direction(self) -> i32 {
        match self {
            TouchSide::None => 0,
            TouchSide::Left => -1,
            TouchSide::Right => 1,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
        }
    }
}

impl Player {
    /// Leftmost allowed center
    pub const MIN_X: i32 = PLAYER_RADIUS + 1;
    /// Rightmost allowed center
    pub const MAX_X: i32 = SCREEN_WIDTH - PLAYER_RADIUS - 2;
    /// Fixed row of the player center
    pub const Y: i32 = SCREEN_HEIGHT - PLAYER_RADIUS - PLAYER_Y_HEIGHT;

    /// Step toward the touched side, never leaving the screen
    pub fn update_position(&mut self, side: TouchSide) {
        let x = self.x + side.direction() * PLAYER_STEP;
        self.x = x.clamp(Self::MIN_X, Self::MAX_X);
    }

    /// Center used for drawing and collisions
    pub fn anchor(&self) -> (i32, i32) {
        (self.x, Self::Y)
    }

    pub fn anchor_point(&self) -> Vec2 {
        Vec2::new(self.x as f32, Self::Y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touch_side_from_touch() {
        assert_eq!(TouchSide::from_touch(None), TouchSide::None);
        assert_eq!(TouchSide::from_touch(Some((0, 100))), TouchSide::Left);
        assert_eq!(TouchSide::from_touch(Some((160, 10))), TouchSide::Left);
        assert_eq!(TouchSide::from_touch(Some((161, 10))), TouchSide::Right);
        assert_eq!(TouchSide::from_touch(Some((319, 239))), TouchSide::Right);
    }

    #[test]
    fn test_anchor_row() {
        let player = Player::default();
        assert_eq!(player.anchor(), (160, 228));
        assert_eq!(player.anchor_point(), Vec2::new(160.0, 228.0));
    }

    #[test]
    fn test_move_right_five_ticks() {
        let mut player = Player::default();
        for _ in 0..5 {
            player.update_position(TouchSide::Right);
        }
        assert_eq!(player.x, 170);
    }

    #[test]
    fn test_no_touch_stays_put() {
        let mut player = Player::default();
        player.update_position(TouchSide::None);
        assert_eq!(player.x, 160);
    }

    #[test]
    fn test_clamps_at_edges() {
        let mut player = Player::default();
        for _ in 0..500 {
            player.update_position(TouchSide::Left);
        }
        assert_eq!(player.x, Player::MIN_X);

        for _ in 0..500 {
            player.update_position(TouchSide::Right);
        }
        assert_eq!(player.x, Player::MAX_X);
        assert_eq!(Player::MAX_X, 312);
    }

    proptest! {
        #[test]
        fn prop_position_always_on_screen(moves in proptest::collection::vec(0u8..3, 0..1_000)) {
            let mut player = Player::default();
            for m in moves {
                let side = match m {
                    0 => TouchSide::None,
                    1 => TouchSide::Left,
                    _ => TouchSide::Right,
                };
                player.update_position(side);
                prop_assert!(player.x >= PLAYER_RADIUS + 1);
                prop_assert!(player.x <= SCREEN_WIDTH - PLAYER_RADIUS - 2);
            }
        }
    }
}
