//! Press/release gesture handling for interactive frontends.
//!
//! Frontends feed raw pointer events through [`dispatch`] together with the
//! active tool and the current gesture state; the machine mutates the world
//! through its public API and returns the next state. The machine is
//! explicit so a half-finished gesture (pressed but not yet released) is a
//! visible state, not a hidden flag in the frontend.
//!
//! ```text
//!             AddBody                        Throw
//!
//!   Idle --Press(p)--> SizingRadius   Idle --Press on body--> Aiming
//!     ^                    |            ^                       |
//!     +----Release(p)------+            +------Release(p)-------+
//!        set_radius(id, p)                set_velocity(id, p)
//! ```
//!
//! Delete is a single press: remove the body under the pointer, if any.

use crate::types::{constants, EngineError, Point2};
use crate::world::World;

/// The active editing tool, chosen by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Place and size a new body in the given collision group.
    AddBody { group: u32 },
    /// Grab an existing body and set its velocity by dragging.
    Throw,
    /// Remove the body under the pointer.
    Delete,
}

/// Where the machine is inside a press/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    /// A body was placed at the press point; the release point fixes its
    /// radius.
    SizingRadius { id: usize },
    /// A body was grabbed at the press point; the release point fixes its
    /// velocity.
    Aiming { id: usize },
}

/// A raw pointer event in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(Point2),
    Release(Point2),
}

/// Advance the gesture machine by one event, mutating `world` as needed.
///
/// Unexpected combinations (a release with no pending gesture, a press while
/// one is already pending) abandon the gesture and return to idle rather
/// than erroring; stale body ids surface as [`EngineError::InvalidIndex`].
pub fn dispatch(
    tool: Tool,
    state: GestureState,
    event: InputEvent,
    world: &mut World,
) -> Result<GestureState, EngineError> {
    match (tool, state, event) {
        (Tool::AddBody { group }, GestureState::Idle, InputEvent::Press(point)) => {
            let id = world.add_body(point, group);
            Ok(GestureState::SizingRadius { id })
        }
        (Tool::AddBody { .. }, GestureState::SizingRadius { id }, InputEvent::Release(point)) => {
            world.set_radius(id, point)?;
            Ok(GestureState::Idle)
        }

        (Tool::Throw, GestureState::Idle, InputEvent::Press(point)) => {
            match world.find_body_at(point) {
                Some(id) => Ok(GestureState::Aiming { id }),
                None => Ok(GestureState::Idle),
            }
        }
        (Tool::Throw, GestureState::Aiming { id }, InputEvent::Release(point)) => {
            world.set_velocity(id, point, constants::DRAG_TIME_SCALE)?;
            Ok(GestureState::Idle)
        }

        (Tool::Delete, GestureState::Idle, InputEvent::Press(point)) => {
            if let Some(id) = world.find_body_at(point) {
                world.delete_body(id)?;
            }
            Ok(GestureState::Idle)
        }

        // Tool switched mid-gesture, double press, or a stray release:
        // abandon the pending gesture.
        _ => Ok(GestureState::Idle),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;

    #[test]
    fn test_add_body_cycle() {
        let mut world = World::default();
        let tool = Tool::AddBody { group: 2 };

        let state = dispatch(
            tool,
            GestureState::Idle,
            InputEvent::Press(Point2::new(100.0, 100.0)),
            &mut world,
        )
        .unwrap();
        let id = match state {
            GestureState::SizingRadius { id } => id,
            other => panic!("expected SizingRadius, got {:?}", other),
        };

        // Mid-gesture the body exists but is unsized
        assert_eq!(world.body(id).unwrap().radius, 0.0);
        assert_eq!(world.body(id).unwrap().group, 2);

        let state = dispatch(
            tool,
            state,
            InputEvent::Release(Point2::new(125.0, 100.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Idle);
        assert!((world.body(id).unwrap().radius - 25.0).abs() < constants::EPSILON);
    }

    #[test]
    fn test_throw_cycle() {
        let mut world = World::default();
        let id = world.insert_body(Point2::new(100.0, 100.0), 20.0, Vec2::ZERO, 0);

        let state = dispatch(
            Tool::Throw,
            GestureState::Idle,
            InputEvent::Press(Point2::new(105.0, 100.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Aiming { id });

        // Release 60 right / 30 up of center: velocity = offset / 30
        let state = dispatch(
            Tool::Throw,
            state,
            InputEvent::Release(Point2::new(160.0, 130.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Idle);
        let velocity = world.body(id).unwrap().velocity;
        assert!((velocity.x - 2.0).abs() < constants::EPSILON);
        assert!((velocity.y - 1.0).abs() < constants::EPSILON);
    }

    #[test]
    fn test_throw_press_on_empty_space_stays_idle() {
        let mut world = World::default();
        world.insert_body(Point2::new(100.0, 100.0), 10.0, Vec2::ZERO, 0);

        let state = dispatch(
            Tool::Throw,
            GestureState::Idle,
            InputEvent::Press(Point2::new(500.0, 500.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_delete_press() {
        let mut world = World::default();
        world.insert_body(Point2::new(100.0, 100.0), 10.0, Vec2::ZERO, 0);

        let state = dispatch(
            Tool::Delete,
            GestureState::Idle,
            InputEvent::Press(Point2::new(100.0, 100.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Idle);
        assert!(world.is_empty());

        // Pressing empty space deletes nothing and does not error
        let state = dispatch(
            Tool::Delete,
            GestureState::Idle,
            InputEvent::Press(Point2::new(100.0, 100.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_tool_switch_abandons_pending_gesture() {
        let mut world = World::default();
        let state = dispatch(
            Tool::AddBody { group: 0 },
            GestureState::Idle,
            InputEvent::Press(Point2::new(100.0, 100.0)),
            &mut world,
        )
        .unwrap();

        // Releasing with a different tool abandons sizing; the body stays
        // in its unsized state.
        let state = dispatch(
            Tool::Throw,
            state,
            InputEvent::Release(Point2::new(150.0, 100.0)),
            &mut world,
        )
        .unwrap();
        assert_eq!(state, GestureState::Idle);
        assert_eq!(world.body(0).unwrap().radius, 0.0);
    }

    #[test]
    fn test_stale_id_surfaces_error() {
        let mut world = World::default();
        let id = world.insert_body(Point2::new(100.0, 100.0), 20.0, Vec2::ZERO, 0);
        let state = GestureState::Aiming { id };

        // The aimed body vanished before the release
        world.delete_body(id).unwrap();
        let result = dispatch(
            Tool::Throw,
            state,
            InputEvent::Release(Point2::new(150.0, 100.0)),
            &mut world,
        );
        assert_eq!(result, Err(EngineError::InvalidIndex(id)));
    }
}
