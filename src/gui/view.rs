// File: ./src/gui/view.rs
use crate::config::LayoutConfig;
use crate::geometry::Point;
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::menu::MenuItem;
use crate::theme::{Palette, Rgb};
use iced::alignment::Vertical;
use iced::widget::{Column, button, column, container, stack, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

pub fn view(app: &GuiApp) -> Element<'_, Message> {
    let palette = app.palette;
    let layout = app.controller.layout();

    let entry = container(
        text_input("", app.controller.input())
            .id(app.input_id.clone())
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .size(layout.font_size)
            .padding(4)
            .style(move |_theme, _status| text_input::Style {
                background: Background::Color(color(palette.surface)),
                border: Border {
                    color: color(palette.surface),
                    width: 1.0,
                    radius: 0.0.into(),
                },
                icon: color(palette.text),
                placeholder: color(palette.highlight),
                value: color(palette.text),
                selection: color(palette.highlight),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout.entry_height));

    // One fixed-height row per task; the controller hit-tests against the
    // same heights, so they must not wrap or grow.
    let rows = app.controller.tasks().iter().map(|task| {
        container(text(task.as_str()).size(layout.font_size))
            .width(Length::Fill)
            .height(Length::Fixed(layout.row_height))
            .padding([0, 4])
            .align_y(Vertical::Center)
            .clip(true)
            .into()
    });

    let list = container(Column::with_children(rows))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(move |_theme| surface(palette));

    let body: Element<'_, Message> = column![entry, list].into();
    let content = match app.controller.menu_anchor() {
        Some(anchor) => stack![body, context_menu(anchor, palette, layout)].into(),
        None => body,
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(color(palette.background))),
            text_color: Some(color(palette.text)),
            ..container::Style::default()
        })
        .into()
}

fn context_menu<'a>(anchor: Point, palette: Palette, layout: &LayoutConfig) -> Element<'a, Message> {
    let items = MenuItem::ALL.into_iter().map(|item| {
        button(text(item.label()).size(layout.font_size))
            .on_press(Message::MenuSelected(item))
            .width(Length::Fill)
            .height(Length::Fixed(layout.menu_item_height))
            .padding([2, 8])
            .style(move |_theme, status| menu_item(palette, status))
            .into()
    });

    let menu = container(Column::with_children(items))
        .width(Length::Fixed(layout.menu_width))
        .style(move |_theme| surface(palette));

    container(menu)
        .padding(Padding {
            top: anchor.y,
            right: 0.0,
            bottom: 0.0,
            left: anchor.x,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn surface(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(color(palette.surface))),
        text_color: Some(color(palette.text)),
        ..container::Style::default()
    }
}

fn menu_item(palette: Palette, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.highlight,
        _ => palette.surface,
    };
    button::Style {
        background: Some(Background::Color(color(background))),
        text_color: color(palette.text),
        border: Border::default(),
        ..button::Style::default()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.r, rgb.g, rgb.b)
}
