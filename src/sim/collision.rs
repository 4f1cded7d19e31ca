//! Circle-circle collision between the player and the meteorites

use glam::Vec2;

use super::meteorite::Meteorite;
use super::player::Player;
use crate::consts::PLAYER_RADIUS;

/// True if two circles touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) <= a_radius + b_radius
}

/// True if any live meteorite touches the player.
///
/// Dead meteorites keep their last coordinates but are ignored.
pub fn collides(player: &Player, meteorites: &[Meteorite]) -> bool {
    let anchor = player.anchor_point();
    meteorites
        .iter()
        .filter(|m| m.is_alive())
        .any(|m| circles_overlap(anchor, PLAYER_RADIUS as f32, m.position(), m.radius as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PcgRandom;
    use crate::sim::test_support::FixedRandom;
    use crate::consts::*;

    fn meteorite_at(x: i32, y: f32, radius: i32) -> Meteorite {
        let mut m = Meteorite::new(SPEED_START, &mut FixedRandom::min());
        m.x = x;
        m.y = y;
        m.radius = radius;
        m
    }

    /// Kill a meteorite by dropping it onto the bottom edge
    fn kill(m: &mut Meteorite) {
        m.y = SCREEN_HEIGHT as f32;
        assert!(m.tick(SPEED_START, &mut FixedRandom::mid()));
        assert!(!m.is_alive());
    }

    #[test]
    fn test_circles_overlap_boundary() {
        assert!(circles_overlap(Vec2::ZERO, 3.0, Vec2::new(5.0, 0.0), 2.0));
        assert!(!circles_overlap(Vec2::ZERO, 3.0, Vec2::new(5.1, 0.0), 2.0));
    }

    #[test]
    fn test_collides_with_live_meteorite() {
        let player = Player::default();
        let (px, py) = player.anchor();
        // Radii sum to 10, centers 5 apart
        let near = meteorite_at(px + 3, py as f32 - 4.0, 4);
        let far = meteorite_at(20, 20.0, 8);
        let mut meteorites = vec![far, near];
        assert!(collides(&player, &meteorites));

        kill(&mut meteorites[1]);
        // Stale coordinates no longer count
        meteorites[1].x = px;
        meteorites[1].y = py as f32;
        assert!(!collides(&player, &meteorites));
    }

    #[test]
    fn test_no_collision_when_all_dead() {
        let player = Player::default();
        let (px, py) = player.anchor();
        let mut meteorites: Vec<_> = (0..5).map(|_| meteorite_at(px, py as f32, 10)).collect();
        for m in &mut meteorites {
            kill(m);
            m.x = px;
            m.y = py as f32;
        }
        assert!(!collides(&player, &meteorites));
    }

    #[test]
    fn test_waiting_meteorite_counts_as_alive() {
        // Meteorites still in their start delay are collidable; they normally
        // sit at the top row, far from the player.
        let player = Player::default();
        let mut m = Meteorite::new(SPEED_START, &mut FixedRandom::max());
        assert!(m.start_delay() > 0);
        assert!(m.is_alive());
        assert!(!collides(&player, std::slice::from_ref(&m)));

        let (px, py) = player.anchor();
        m.x = px;
        m.y = py as f32;
        assert!(collides(&player, std::slice::from_ref(&m)));
    }

    #[test]
    fn test_fresh_field_never_collides_at_spawn() {
        let player = Player::default();
        let mut rng = PcgRandom::new(77);
        let meteorites: Vec<_> = (0..50).map(|_| Meteorite::new(SPEED_START, &mut rng)).collect();
        assert!(!collides(&player, &meteorites));
    }

    #[test]
    fn test_empty_field() {
        assert!(!collides(&Player::default(), &[]));
    }
}
