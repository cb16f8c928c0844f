//! Keyboard and window events -> normalized simulation input.

use orrery_core::SimInput;
use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Which physical key drives each control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub pause: KeyCode,
    pub speed_up: KeyCode,
    pub speed_down: KeyCode,
    pub cancel: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pause: KeyCode::Space,
            speed_up: KeyCode::ArrowUp,
            speed_down: KeyCode::ArrowDown,
            cancel: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    /// Only fresh key presses count; releases, auto-repeat and unbound keys
    /// map to `None`.
    pub fn translate_key(&self, code: KeyCode, state: ElementState, repeat: bool) -> Option<SimInput> {
        if state != ElementState::Pressed || repeat {
            return None;
        }
        if code == self.pause {
            Some(SimInput::TogglePause)
        } else if code == self.speed_up {
            Some(SimInput::SpeedUp)
        } else if code == self.speed_down {
            Some(SimInput::SpeedDown)
        } else if code == self.cancel {
            Some(SimInput::Cancel)
        } else {
            None
        }
    }

    pub fn translate(&self, event: &WindowEvent) -> Option<SimInput> {
        match event {
            WindowEvent::CloseRequested => Some(SimInput::Quit),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.translate_key(code, event.state, event.repeat),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Help text block shown in the top-left corner.
    pub fn help_lines(&self) -> Vec<String> {
        vec![
            format!("{}: Pause/Resume", key_label(self.pause)),
            format!(
                "{}/{}: Increase/Decrease speed",
                key_label(self.speed_up),
                key_label(self.speed_down)
            ),
            format!("{}: Quit", key_label(self.cancel)),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Space => "SPACE".to_string(),
        KeyCode::ArrowUp => "UP".to_string(),
        KeyCode::ArrowDown => "DOWN".to_string(),
        KeyCode::ArrowLeft => "LEFT".to_string(),
        KeyCode::ArrowRight => "RIGHT".to_string(),
        KeyCode::Escape => "ESC".to_string(),
        KeyCode::Enter => "ENTER".to_string(),
        other => {
            let name = format!("{other:?}");
            name.trim_start_matches("Key")
                .trim_start_matches("Digit")
                .to_uppercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        let press = |code| keys.translate_key(code, ElementState::Pressed, false);
        assert_eq!(press(KeyCode::Space), Some(SimInput::TogglePause));
        assert_eq!(press(KeyCode::ArrowUp), Some(SimInput::SpeedUp));
        assert_eq!(press(KeyCode::ArrowDown), Some(SimInput::SpeedDown));
        assert_eq!(press(KeyCode::Escape), Some(SimInput::Cancel));
    }

    #[test]
    fn test_unbound_and_released_keys_ignored() {
        let keys = KeyBindings::default();
        assert_eq!(keys.translate_key(KeyCode::KeyQ, ElementState::Pressed, false), None);
        assert_eq!(keys.translate_key(KeyCode::Space, ElementState::Released, false), None);
        assert_eq!(keys.translate_key(KeyCode::ArrowUp, ElementState::Pressed, true), None);
    }

    #[test]
    fn test_close_request_quits() {
        let keys = KeyBindings::default();
        assert_eq!(keys.translate(&WindowEvent::CloseRequested), Some(SimInput::Quit));
        assert_eq!(keys.translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn test_help_lines() {
        assert_eq!(
            KeyBindings::default().help_lines(),
            vec![
                "SPACE: Pause/Resume".to_string(),
                "UP/DOWN: Increase/Decrease speed".to_string(),
                "ESC: Quit".to_string(),
            ]
        );
    }

    #[test]
    fn test_rebound_help_labels() {
        let keys = KeyBindings {
            pause: KeyCode::KeyP,
            ..KeyBindings::default()
        };
        assert_eq!(keys.help_lines()[0], "P: Pause/Resume");
        assert_eq!(
            keys.translate_key(KeyCode::KeyP, ElementState::Pressed, false),
            Some(SimInput::TogglePause)
        );
    }
}
