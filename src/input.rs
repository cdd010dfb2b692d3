use bitedit::ToolMode;
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_keyboard_input(&self, input: &KeyboardInput) -> InputAction {
        match (input.state, input.virtual_keycode) {
            (ElementState::Pressed, Some(key_code)) => Self::handle_key_press(key_code),
            _ => InputAction::None,
        }
    }

    fn handle_key_press(key_code: VirtualKeyCode) -> InputAction {
        let slot = match key_code {
            VirtualKeyCode::Escape => return InputAction::Quit,
            VirtualKeyCode::Key1 | VirtualKeyCode::Numpad1 => 0,
            VirtualKeyCode::Key2 | VirtualKeyCode::Numpad2 => 1,
            VirtualKeyCode::Key3 | VirtualKeyCode::Numpad3 => 2,
            VirtualKeyCode::Key4 | VirtualKeyCode::Numpad4 => 3,
            VirtualKeyCode::Key5 | VirtualKeyCode::Numpad5 => 4,
            VirtualKeyCode::Key6 | VirtualKeyCode::Numpad6 => 5,
            VirtualKeyCode::Key7 | VirtualKeyCode::Numpad7 => 6,
            _ => return InputAction::None,
        };
        InputAction::SelectTool(ToolMode::ALL[slot])
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    SelectTool(ToolMode),
    Quit,
}
