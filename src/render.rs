use raylib::prelude::*;
use crate::chrome::{Chrome, ChromeLayout, Rect};
use crate::constants::*;
use crate::presenter::Presenter;
use crate::slide::SlideView;

const ACCENT: Color = Color::new(33, 128, 141, 255);
const BUTTON: Color = Color::new(52, 58, 64, 255);
const BUTTON_DISABLED: Color = Color::new(40, 42, 46, 255);
const SHADE: Color = Color::new(0, 0, 0, 200);

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rect, label: &str, enabled: bool) {
    let fill = if enabled { BUTTON } else { BUTTON_DISABLED };
    let text_color = if enabled { Color::RAYWHITE } else { Color::GRAY };
    d.draw_rectangle_rec(to_rectangle(rect), fill);

    let text_width = measure_text(label, CHROME_FONT_SIZE) as f32;
    let x = rect.x + (rect.width - text_width) * 0.5;
    let y = rect.y + (rect.height - CHROME_FONT_SIZE as f32) * 0.5;
    d.draw_text(label, x as i32, y as i32, CHROME_FONT_SIZE, text_color);
}

fn draw_modal(d: &mut RaylibDrawHandle, text: &str) {
    let sw = d.get_screen_width();
    let sh = d.get_screen_height();
    d.draw_rectangle(0, 0, sw, sh, SHADE);

    let lines: Vec<&str> = text.lines().collect();
    let line_height = CHROME_FONT_SIZE + 8;
    let widest = lines.iter().map(|l| measure_text(l, CHROME_FONT_SIZE)).max().unwrap_or(0);
    let height = line_height * lines.len() as i32;
    let x = (sw - widest) / 2;
    let mut y = (sh - height) / 2;

    d.draw_rectangle(x - 24, y - 24, widest + 48, height + 48, BUTTON);
    for line in lines {
        d.draw_text(line, x, y, CHROME_FONT_SIZE, Color::RAYWHITE);
        y += line_height;
    }
}

fn draw_chrome(d: &mut RaylibDrawHandle, chrome: &Chrome, layout: &ChromeLayout) {
    let sw = d.get_screen_width();
    let sh = d.get_screen_height();

    // Progress bar along the bottom edge
    let progress_width = (sw as f32 * chrome.progress.fraction()) as i32;
    d.draw_rectangle(0, sh - PROGRESS_BAR_HEIGHT, progress_width, PROGRESS_BAR_HEIGHT, ACCENT);

    let controls = &chrome.controls;
    draw_button(d, layout.previous, PREV_LABEL, !controls.prev_disabled);
    draw_button(d, layout.next, controls.next_label, !controls.next_disabled);
    draw_button(d, layout.help, HELP_LABEL, true);
    draw_button(d, layout.fullscreen, chrome.fullscreen.label(), true);

    let (cx, cy) = layout.counter;
    d.draw_text(&controls.counter, cx as i32, cy as i32, CHROME_FONT_SIZE, Color::GRAY);
}

pub fn draw_frame(d: &mut RaylibDrawHandle, presenter: &Presenter, views: &[SlideView], layout: &ChromeLayout) {
    d.clear_background(Color::new(19, 52, 59, 255));

    for view in views {
        view.draw(d);
    }

    let chrome = presenter.chrome();
    draw_chrome(d, chrome, layout);

    if chrome.help.is_open() {
        draw_modal(d, chrome.help.text());
    }
    if presenter.leave_prompt_open() {
        draw_modal(d, LEAVE_PROMPT);
    }
}
