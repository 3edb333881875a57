use std::time::Instant;

use custom_error::custom_error;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use minipaint_core::models::canvas::{Canvas, Coordinate};
use minipaint_core::models::pixel::Pixel;

use crate::dispatch::input::{Frontend, InputEvent, KeyAction};

custom_error! {pub WindowError
    FailedToOpen {description: String} = "Failed to open window: {description}",
}

pub struct WindowFrontend {
    window: Window,
    title: String,
    width: usize,
    height: usize,
    pointer_was_down: bool,
    started: Instant,
    prev_second: u64,
    prev_second_updates: u32,
}

impl WindowFrontend {

    pub fn open(title: &str, width: usize, height: usize) -> Result<Self, WindowError> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|err| WindowError::FailedToOpen { description: err.to_string() })?;
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600))); // 60fps max

        Ok(WindowFrontend {
            window,
            title: title.to_string(),
            width,
            height,
            pointer_was_down: false,
            started: Instant::now(),
            prev_second: 0,
            prev_second_updates: 0,
        })
    }

    fn update_title(&mut self) {
        let elapsed = (Instant::now() - self.started).as_secs();
        if elapsed == self.prev_second {
            self.prev_second_updates += 1;
        } else {
            self.window.set_title(format!("{}, fps: {}", self.title, self.prev_second_updates).as_str());
            self.prev_second_updates = 1;
            self.prev_second = elapsed;
        }
    }
}

impl Frontend for WindowFrontend {

    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn pointer_position(&self) -> Option<Coordinate> {
        self.window.get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Coordinate::new(x as i32, y as i32))
    }

    fn is_pointer_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let pointer_down = self.is_pointer_down();
        if self.pointer_was_down && !pointer_down {
            events.push(InputEvent::PointerReleased);
        }
        self.pointer_was_down = pointer_down;

        if let Some(keys) = self.window.get_keys_released() {
            events.extend(keys.into_iter().filter_map(key_action).map(InputEvent::Key));
        }

        events
    }

    fn present(&mut self, canvas: &Canvas) {
        self.update_title();

        let buffer = canvas.to_frame_buffer();
        if let Err(err) = self.window.update_with_buffer(&buffer, self.width, self.height) {
            error!("failed to update window: {}", err);
        }
    }
}

pub fn key_action(key: Key) -> Option<KeyAction> {
    Some(match key {
        Key::Z => KeyAction::Undo,
        Key::Y => KeyAction::Redo,
        Key::Space => KeyAction::Fill,
        Key::Escape => KeyAction::Quit,
        Key::Key1 => KeyAction::SelectColor(Pixel::black()),
        Key::Key2 => KeyAction::SelectColor(Pixel::white()),
        Key::Key3 => KeyAction::SelectColor(Pixel::red()),
        Key::Key4 => KeyAction::SelectColor(Pixel::green()),
        Key::Key5 => KeyAction::SelectColor(Pixel::blue()),
        Key::Key6 => KeyAction::SelectColor(Pixel::yellow()),
        Key::Key7 => KeyAction::SelectColor(Pixel::magenta()),
        Key::Key8 => KeyAction::SelectColor(Pixel::cyan()),
        Key::E => KeyAction::Eraser,
        Key::S => KeyAction::SetRadius(1),
        Key::M => KeyAction::SetRadius(3),
        Key::B => KeyAction::SetRadius(5),
        Key::LeftBracket => KeyAction::ShrinkRadius,
        Key::RightBracket => KeyAction::GrowRadius,
        _ => return None,
    })
}
