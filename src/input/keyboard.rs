// Keyboard input mapping module
//
// Maps host keyboard state onto the two NES controllers. The window shell
// feeds key press/release events in; the emulator pulls packed controller
// states out once per frame.

use super::{Button, Controller};
use std::collections::HashSet;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Represents which player's controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Player 1
    One,
    /// Player 2
    Two,
}

/// Keyboard mapping for a single player
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    /// Key for the A button
    pub button_a: KeyCode,
    /// Key for the B button
    pub button_b: KeyCode,
    /// Key for Select
    pub select: KeyCode,
    /// Key for Start
    pub start: KeyCode,
    /// Key for Up
    pub up: KeyCode,
    /// Key for Down
    pub down: KeyCode,
    /// Key for Left
    pub left: KeyCode,
    /// Key for Right
    pub right: KeyCode,
}

impl KeyboardMapping {
    /// Default Player 1 mapping: arrows + X/Z + Enter/Right Shift
    pub fn player1_default() -> Self {
        Self {
            button_a: KeyCode::KeyX,
            button_b: KeyCode::KeyZ,
            select: KeyCode::ShiftRight,
            start: KeyCode::Enter,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// Default Player 2 mapping: WASD + K/J + Y/U
    pub fn player2_default() -> Self {
        Self {
            button_a: KeyCode::KeyK,
            button_b: KeyCode::KeyJ,
            select: KeyCode::KeyU,
            start: KeyCode::KeyY,
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }

    /// The button a key is bound to, if any
    fn button_for(&self, key: KeyCode) -> Option<Button> {
        match key {
            k if k == self.button_a => Some(Button::A),
            k if k == self.button_b => Some(Button::B),
            k if k == self.select => Some(Button::Select),
            k if k == self.start => Some(Button::Start),
            k if k == self.up => Some(Button::Up),
            k if k == self.down => Some(Button::Down),
            k if k == self.left => Some(Button::Left),
            k if k == self.right => Some(Button::Right),
            _ => None,
        }
    }
}

/// Tracks pressed keys and converts them to controller states
pub struct KeyboardHandler {
    player1: KeyboardMapping,
    player2: KeyboardMapping,
    pressed: HashSet<KeyCode>,
}

impl KeyboardHandler {
    /// Create a handler with the default mappings for both players
    pub fn new() -> Self {
        KeyboardHandler {
            player1: KeyboardMapping::player1_default(),
            player2: KeyboardMapping::player2_default(),
            pressed: HashSet::new(),
        }
    }

    /// Record a key press
    pub fn handle_key_press(&mut self, key: PhysicalKey) {
        if let PhysicalKey::Code(code) = key {
            self.pressed.insert(code);
        }
    }

    /// Record a key release
    pub fn handle_key_release(&mut self, key: PhysicalKey) {
        if let PhysicalKey::Code(code) = key {
            self.pressed.remove(&code);
        }
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Build the controller state for one player from the held keys
    pub fn controller_state(&self, player: Player) -> Controller {
        let mapping = match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        };

        let mut controller = Controller::new();
        for &key in &self.pressed {
            if let Some(button) = mapping.button_for(key) {
                controller.set_button(button, true);
            }
        }
        controller
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}
