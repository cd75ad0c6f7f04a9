// File: ./src/gui/subscription.rs
use crate::geometry::{Point, Size};
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use iced::{Event, Subscription, event, keyboard, mouse, window};

pub fn subscription(_app: &GuiApp) -> Subscription<Message> {
    // Captured events are wanted too: the entry swallows Escape and clicks,
    // and the window must still react to both.
    event::listen_with(to_message)
}

fn to_message(event: Event, _status: event::Status, id: window::Id) -> Option<Message> {
    use iced::keyboard::key;

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(point(position)))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => Some(Message::LeftPressed),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::LeftReleased)
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
            Some(Message::RightPressed)
        }
        Event::Window(window::Event::Opened { position, size }) => Some(Message::WindowOpened {
            id,
            position: position.map(point),
            size: Size::new(size.width, size.height),
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved(point(position))),
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(Size::new(size.width, size.height)))
        }
        _ => None,
    }
}

fn point(p: iced::Point) -> Point {
    Point::new(p.x, p.y)
}
