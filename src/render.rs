//! raylib drawing of the widget.
//!
//! Reads the element tree and background slot each frame; all state
//! changes happen in the core, never here.

use raylib::prelude::*;

use crate::accordion::{Accordion, BackgroundSlot};
use crate::constants::*;
use crate::layout::Layout;

const TITLE_BAR: Color = Color { r: 24, g: 24, b: 24, a: 200 };
const TITLE_BAR_HOVER: Color = Color { r: 60, g: 60, b: 60, a: 220 };
const TITLE_BAR_SELECTED: Color = Color { r: 96, g: 64, b: 24, a: 230 };
const PANEL: Color = Color { r: 12, g: 12, b: 12, a: 215 };
const GLYPH_TEXT: Color = Color { r: 24, g: 24, b: 24, a: 255 };

pub fn draw(
    d: &mut RaylibDrawHandle,
    accordion: &Accordion,
    layout: &Layout,
    background: Option<&Texture2D>,
    slide_textures: &[Option<Texture2D>],
) {
    d.clear_background(Color::BLACK);

    let texture = match accordion.background() {
        BackgroundSlot::Main => background,
        BackgroundSlot::Slide(ix) => slide_textures
            .get(ix)
            .and_then(Option::as_ref)
            .or(background),
    };
    if let Some(texture) = texture {
        draw_stretched(d, texture, layout.container);
    }

    for (ix, el) in accordion.slides().iter().enumerate() {
        let Some(rects) = layout.slides.get(ix) else {
            continue;
        };

        let bar = if el.title.has_class("selected") {
            TITLE_BAR_SELECTED
        } else if el.title.has_class("hover") {
            TITLE_BAR_HOVER
        } else {
            TITLE_BAR
        };
        d.draw_rectangle_rec(rects.title, bar);

        if let Some(label) = &el.wrap.html {
            let text_y = rects.title.y + (rects.title.height - TITLE_FONT_SIZE as f32) / 2.0;
            d.draw_text(
                label,
                (rects.title.x + PANEL_PADDING) as i32,
                text_y as i32,
                TITLE_FONT_SIZE,
                Color::WHITE,
            );
        }

        draw_glyph(d, rects.plus, &el.plus);
        draw_glyph(d, rects.close_mobile, &el.close_mobile);

        if el.info.visible() && rects.info.height > 0.0 {
            d.draw_rectangle_rec(rects.info, PANEL);
            draw_glyph(d, rects.close_desktop, &el.close_desktop);
            if let Some(body) = &el.content.html {
                draw_content(d, rects.content, body);
            }
        }
    }
}

fn draw_stretched(d: &mut RaylibDrawHandle, texture: &Texture2D, dest: Rectangle) {
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn draw_glyph(d: &mut RaylibDrawHandle, rect: Rectangle, el: &crate::element::Element) {
    if !el.visible() {
        return;
    }
    let center = Vector2::new(rect.x + GLYPH_RADIUS, rect.y + GLYPH_RADIUS);
    d.draw_circle_v(center, GLYPH_RADIUS, Color::WHITE);
    if let Some(glyph) = &el.html {
        d.draw_text(
            glyph,
            (center.x - TITLE_FONT_SIZE as f32 / 4.0) as i32,
            (center.y - TITLE_FONT_SIZE as f32 / 2.0) as i32,
            TITLE_FONT_SIZE,
            GLYPH_TEXT,
        );
    }
}

fn draw_content(d: &mut RaylibDrawHandle, rect: Rectangle, body: &str) {
    let max_chars = ((rect.width / (CONTENT_FONT_SIZE as f32 * 0.55)) as usize).max(8);
    let mut y = rect.y;
    for line in wrap_text(body, max_chars) {
        if y + CONTENT_LINE_HEIGHT > rect.y + rect.height {
            break;
        }
        d.draw_text(&line, rect.x as i32, y as i32, CONTENT_FONT_SIZE, Color::RAYWHITE);
        y += CONTENT_LINE_HEIGHT;
    }
}

/// Greedy word wrap on a character budget. The body is caller-trusted
/// HTML rendered as-is, one source line at a time.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut line = String::new();
        for word in raw_line.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.chars().count() + 1 + word.chars().count() <= max_chars {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line = word.to_string();
            }
        }
        lines.push(line);
    }
    lines
}
