use nalgebra::{Point2, Vector2};
use num_traits::Zero;
use std::collections::HashMap;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub type KeyState = ElementState;

pub struct InputManager {
    key_states: HashMap<KeyCode, KeyState>,
    key_just_updated: Vec<KeyCode>,
    button_states: HashMap<MouseButton, ElementState>,
    button_just_updated: Vec<MouseButton>,
    mouse_wheel_delta: f32,
    mouse_pos: Point2<f32>,
    mouse_delta: Vector2<f32>,
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager {
            key_states: HashMap::default(),
            key_just_updated: Vec::new(),
            button_states: HashMap::default(),
            button_just_updated: Vec::new(),
            mouse_wheel_delta: 0.0,
            mouse_pos: Point2::origin(),
            mouse_delta: Vector2::zero(),
        }
    }
}

impl InputManager {
    pub fn process_event(&mut self, window_event: &WindowEvent) {
        match window_event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.set_key_state(code, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.set_mouse_position(position),
            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y,
                };
                self.add_wheel_delta(y as f32);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.set_button_state(*button, *state);
            }
            _ => {}
        }
    }

    pub fn set_key_state(&mut self, code: KeyCode, state: KeyState) {
        if !state.is_pressed() || !self.is_key_pressed(code) {
            self.key_just_updated.push(code);
        }

        self.key_states.insert(code, state);
    }

    pub fn set_button_state(&mut self, button: MouseButton, state: ElementState) {
        if !state.is_pressed() || !self.is_button_pressed(button) {
            self.button_just_updated.push(button);
        }
        self.button_states.insert(button, state);
    }

    #[inline]
    pub fn set_mouse_position(&mut self, position: &PhysicalPosition<f64>) {
        let position = Point2::new(position.x as f32, position.y as f32);
        self.mouse_delta += position - self.mouse_pos;
        self.mouse_pos = position;
    }

    pub fn add_wheel_delta(&mut self, delta: f32) {
        self.mouse_wheel_delta += delta;
    }

    pub fn get_key_state(&self, key_code: KeyCode) -> KeyState {
        *self.key_states.get(&key_code).unwrap_or(&KeyState::Released)
    }

    // Only is true if the key was JUST pressed
    pub fn is_key_down(&self, key_code: KeyCode) -> bool {
        self.get_key_state(key_code) == KeyState::Pressed && self.key_just_updated.contains(&key_code)
    }

    // true if the key was JUST pressed or is being held
    pub fn is_key_pressed(&self, key_code: KeyCode) -> bool {
        self.get_key_state(key_code) == KeyState::Pressed
    }

    // Only is true if the key was JUST released
    pub fn is_key_released(&self, key_code: KeyCode) -> bool {
        self.get_key_state(key_code) == KeyState::Released && self.key_just_updated.contains(&key_code)
    }

    pub fn get_button_state(&self, button: MouseButton) -> ElementState {
        *self.button_states.get(&button).unwrap_or(&ElementState::Released)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.get_button_state(button) == ElementState::Pressed && self.button_just_updated.contains(&button)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.get_button_state(button) == ElementState::Pressed
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.get_button_state(button) == ElementState::Released && self.button_just_updated.contains(&button)
    }

    /// Cursor position in window pixels, origin top left.
    pub fn mouse_position(&self) -> Point2<f32> {
        self.mouse_pos
    }

    pub fn mouse_delta(&self) -> Vector2<f32> {
        self.mouse_delta
    }

    pub fn wheel_delta(&self) -> f32 {
        self.mouse_wheel_delta
    }

    pub fn next_frame(&mut self) {
        self.key_just_updated.clear();
        self.button_just_updated.clear();
        self.mouse_delta = Vector2::zero();
        self.mouse_wheel_delta = 0.0;
    }
}
