//! Fixed per-frame step
//!
//! Order matters: move first, then test the walls against the moved position
//! and flip the offending velocity components. The position is never pulled
//! back inside the arena, so a fast ball can overlap a wall for one frame
//! before it heads back in.

use super::collision::{WallContact, wall_contact};
use super::state::{Arena, Ball};

/// Advance the ball one frame and reflect off any wall it now crosses
///
/// Returns which axes were reflected.
pub fn tick(ball: &mut Ball, arena: &Arena) -> WallContact {
    ball.pos += ball.vel;

    let contact = wall_contact(ball.pos, ball.radius(), arena);
    if contact.x {
        ball.vel.x = -ball.vel.x;
    }
    if contact.y {
        ball.vel.y = -ball.vel.y;
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(dx, dy), 20.0, Color::RED)
    }

    #[test]
    fn test_open_space_moves_without_reflecting() {
        let arena = Arena::new(800, 600);
        let mut ball = ball_at(400.0, 300.0, 5.0, 5.0);

        let contact = tick(&mut ball, &arena);

        assert!(!contact.any());
        assert_eq!(ball.pos, Vec2::new(405.0, 305.0));
        assert_eq!(ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_right_wall_flips_x_only() {
        let arena = Arena::new(800, 600);
        let mut ball = ball_at(785.0, 300.0, 5.0, 5.0);

        let contact = tick(&mut ball, &arena);

        // 790 + 20 > 800
        assert_eq!(contact, WallContact { x: true, y: false });
        assert_eq!(ball.pos, Vec2::new(790.0, 305.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let arena = Arena::new(800, 600);
        let mut ball = ball_at(15.0, 15.0, -5.0, -5.0);

        let contact = tick(&mut ball, &arena);

        assert_eq!(contact, WallContact { x: true, y: true });
        assert_eq!(ball.pos, Vec2::new(10.0, 10.0));
        assert_eq!(ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_position_is_not_clamped() {
        let arena = Arena::new(800, 600);
        let mut ball = ball_at(790.0, 300.0, 50.0, 0.0);

        tick(&mut ball, &arena);

        // Center past the wall, left there for this frame
        assert_eq!(ball.pos.x, 840.0);
        assert_eq!(ball.vel.x, -50.0);

        tick(&mut ball, &arena);
        assert_eq!(ball.pos.x, 790.0);
        // Still overlapping the wall, so it flips again
        assert_eq!(ball.vel.x, 50.0);
    }

    #[test]
    fn test_bounces_stay_near_arena_over_many_frames() {
        let arena = Arena::default();
        let mut ball = Ball::default();
        let mut bounces = 0;

        for _ in 0..10_000 {
            if tick(&mut ball, &arena).any() {
                bounces += 1;
            }
            assert!(ball.pos.x > -5.0 && ball.pos.x < 805.0);
            assert!(ball.pos.y > -5.0 && ball.pos.y < 605.0);
            assert_eq!(ball.vel.abs(), Vec2::new(5.0, 5.0));
        }

        assert!(bounces > 0);
    }

    proptest! {
        #[test]
        fn prop_position_advances_by_velocity(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            dx in -100.0f32..100.0,
            dy in -100.0f32..100.0,
        ) {
            let arena = Arena::new(800, 600);
            let mut ball = ball_at(x, y, dx, dy);
            let expected = Vec2::new(x, y) + Vec2::new(dx, dy);

            tick(&mut ball, &arena);

            prop_assert_eq!(ball.pos, expected);
        }

        #[test]
        fn prop_reflection_matches_wall_test_per_axis(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            dx in -100.0f32..100.0,
            dy in -100.0f32..100.0,
            radius in 0.5f32..100.0,
        ) {
            let arena = Arena::new(800, 600);
            let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(dx, dy), radius, Color::RED);

            tick(&mut ball, &arena);

            let moved = ball.pos;
            let hit_x = moved.x + radius > 800.0 || moved.x - radius < 0.0;
            let hit_y = moved.y + radius > 600.0 || moved.y - radius < 0.0;
            prop_assert_eq!(ball.vel.x, if hit_x { -dx } else { dx });
            prop_assert_eq!(ball.vel.y, if hit_y { -dy } else { dy });
        }

        #[test]
        fn prop_radius_and_color_never_change(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            dx in -50.0f32..50.0,
            dy in -50.0f32..50.0,
            frames in 1usize..500,
        ) {
            let arena = Arena::new(800, 600);
            let color: Color = "#336699".parse().unwrap();
            let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(dx, dy), 12.5, color);

            for _ in 0..frames {
                tick(&mut ball, &arena);
            }

            prop_assert_eq!(ball.radius(), 12.5);
            prop_assert_eq!(ball.color(), color);
        }
    }
}
