use std::collections::HashSet;

use blockworld_common::BlockId;
use glam::{Vec2, Vec3};

/// Keys the core polls, decoupled from any window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
}

impl Key {
    /// Palette slot for a number key, 1-based.
    fn palette_slot(self) -> Option<u8> {
        match self {
            Key::Num1 => Some(1),
            Key::Num2 => Some(2),
            Key::Num3 => Some(3),
            Key::Num4 => Some(4),
            Key::Num5 => Some(5),
            Key::Num6 => Some(6),
            Key::Num7 => Some(7),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// A block edit requested this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Remove,
    Place,
}

/// Everything the simulation needs to know about input for one frame.
///
/// Produced once per frame by [`InputState::resolve`] and passed into the
/// update/edit calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    /// Horizontal movement wish direction in world space. Zero when no
    /// movement key is held.
    pub wish_dir: Vec3,
    pub jump: bool,
    pub select_block: Option<BlockId>,
    pub edit: Option<EditAction>,
    /// Mouse movement accumulated since the previous resolve.
    pub look_delta: Vec2,
}

/// Held-key and mouse-button state polled between frames.
///
/// Mouse edits are edge-triggered: a button produces one action on the frame
/// it goes down and nothing more until it is released.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    left_down: bool,
    right_down: bool,
    left_latched: bool,
    right_latched: bool,
    pending_look: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn set_mouse(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.left_down = down,
            MouseButton::Right => self.right_down = down,
        }
    }

    /// Record mouse movement; drained by the next [`resolve`](Self::resolve).
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.pending_look += Vec2::new(dx, dy);
    }

    /// Resolve the current state into this frame's input, given the camera
    /// basis the movement keys are relative to.
    pub fn resolve(&mut self, forward: Vec3, right: Vec3) -> FrameInput {
        let input = FrameInput {
            wish_dir: self.wish_direction(forward, right),
            jump: self.is_held(Key::Space),
            select_block: self.selected_slot(),
            edit: self.edge_triggered_edit(),
            look_delta: std::mem::take(&mut self.pending_look),
        };
        tracing::trace!(?input.wish_dir, jump = input.jump, "frame input resolved");
        input
    }

    /// Movement direction from held WASD against the camera basis.
    ///
    /// Diagonals use the normalized combined basis vector; single keys use
    /// the raw basis component. Only the horizontal part drives movement.
    fn wish_direction(&self, forward: Vec3, right: Vec3) -> Vec3 {
        let (w, a, s, d) = (
            self.is_held(Key::W),
            self.is_held(Key::A),
            self.is_held(Key::S),
            self.is_held(Key::D),
        );

        let mut wish = if w && d {
            (forward + right).normalize()
        } else if w && a {
            (forward - right).normalize()
        } else if s && a {
            (-forward - right).normalize()
        } else if s && d {
            (-forward + right).normalize()
        } else {
            let mut dir = Vec3::ZERO;
            if w {
                dir += forward;
            }
            if s {
                dir -= forward;
            }
            if a {
                dir -= right;
            }
            if d {
                dir += right;
            }
            dir
        };
        wish.y = 0.0;
        wish
    }

    /// Lowest-numbered held palette key wins.
    fn selected_slot(&self) -> Option<BlockId> {
        let slot = self.held.iter().filter_map(|k| k.palette_slot()).min()?;
        BlockId::from_slot(slot)
    }

    fn edge_triggered_edit(&mut self) -> Option<EditAction> {
        let mut action = None;
        if self.left_down && !self.left_latched {
            self.left_latched = true;
            action = Some(EditAction::Remove);
        } else if self.right_down && !self.right_latched {
            self.right_latched = true;
            action = Some(EditAction::Place);
        }
        if !self.left_down {
            self.left_latched = false;
        }
        if !self.right_down {
            self.right_latched = false;
        }
        action
    }
}
