//! End-to-end selection scenarios against the class surface, driving
//! the widget the way the binary does: layout hit-testing plus the
//! click/hover handlers.

use std::fs;
use std::path::PathBuf;

use accordion::{
    Accordion, AccordionOptions, BackgroundSlot, CloseVariant, Hit, Layout, SlideConfig,
    preload_images,
};
use raylib::prelude::Vector2;
use tempfile::TempDir;

fn write_image(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"image-bytes").unwrap();
    path
}

fn build_widget(slides: Vec<SlideConfig>) -> (Accordion, TempDir) {
    let dir = TempDir::new().unwrap();
    let bg = write_image(&dir, "bg.png");
    let options = AccordionOptions {
        background_image: Some(bg),
        slide_data: Some(slides),
        element: Some("#root".to_string()),
    };
    let mut widget = Accordion::new(options).unwrap();
    let preloaded = preload_images(widget.config());
    widget.build_slides(&preloaded);
    (widget, dir)
}

fn inline_slide(dir: &TempDir, name: &str, title: &str, html: &str) -> SlideConfig {
    SlideConfig {
        title: title.to_string(),
        background_image: write_image(dir, name),
        html: Some(html.to_string()),
        template: None,
    }
}

fn center(rect: raylib::prelude::Rectangle) -> Vector2 {
    Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

#[test]
fn clicking_the_only_title_shows_its_inline_html_synchronously() {
    let dir = TempDir::new().unwrap();
    let slide = inline_slide(&dir, "a.png", "A", "<p>A</p>");
    let bg = write_image(&dir, "bg.png");
    let options = AccordionOptions {
        background_image: Some(bg),
        slide_data: Some(vec![slide]),
        element: Some("#root".to_string()),
    };
    let mut widget = Accordion::new(options).unwrap();

    let preloaded = preload_images(widget.config());
    assert_eq!(preloaded.len(), 2);
    widget.build_slides(&preloaded);
    assert_eq!(widget.slides().len(), 1);

    let layout = Layout::compute(1, None, 800.0, 600.0);
    let hit = widget.hit_at(&layout, center(layout.slides[0].title)).unwrap();
    assert_eq!(hit, Hit::Title(0));
    widget.handle_click(hit);

    assert_eq!(widget.slides()[0].content.html.as_deref(), Some("<p>A</p>"));
    assert!(widget.slides()[0].title.has_class("selected"));
    assert!(widget.slides()[0].info.has_class("selected"));
    assert_eq!(widget.background(), BackgroundSlot::Slide(0));
}

#[test]
fn mobile_close_wins_over_its_title_once_revealed() {
    let dir = TempDir::new().unwrap();
    let slides = vec![
        inline_slide(&dir, "a.png", "A", "<p>A</p>"),
        inline_slide(&dir, "b.png", "B", "<p>B</p>"),
    ];
    let (mut widget, _dir) = build_widget(slides);

    // Collapsed: the glyph is invisible, so the point belongs to the title.
    let layout = Layout::compute(2, None, 800.0, 600.0);
    let glyph_point = center(layout.slides[0].close_mobile);
    assert_eq!(widget.hit_at(&layout, glyph_point), Some(Hit::Title(0)));

    widget.select(0);
    let layout = Layout::compute(2, Some(0), 800.0, 600.0);
    let glyph_point = center(layout.slides[0].close_mobile);
    assert_eq!(
        widget.hit_at(&layout, glyph_point),
        Some(Hit::Close(CloseVariant::Mobile, 0))
    );

    // The consumed click deselects instead of re-selecting.
    widget.handle_click(widget.hit_at(&layout, glyph_point).unwrap());
    assert_eq!(widget.selected(), None);
    assert_eq!(widget.background(), BackgroundSlot::Main);
}

#[test]
fn desktop_close_in_the_open_panel_deselects() {
    let dir = TempDir::new().unwrap();
    let slides = vec![
        inline_slide(&dir, "a.png", "A", "<p>A</p>"),
        inline_slide(&dir, "b.png", "B", "<p>B</p>"),
    ];
    let (mut widget, _dir) = build_widget(slides);

    widget.select(1);
    let layout = Layout::compute(2, Some(1), 800.0, 600.0);
    let hit = widget
        .hit_at(&layout, center(layout.slides[1].close_desktop))
        .unwrap();
    assert_eq!(hit, Hit::Close(CloseVariant::Desktop, 1));
    widget.handle_click(hit);

    assert_eq!(widget.selected(), None);
    assert!(!widget.root().has_class("slide_selected"));
    assert!(!widget.slides()[1].info.visible());
}

#[test]
fn switching_selection_moves_the_single_selected_pair() {
    let dir = TempDir::new().unwrap();
    let slides = vec![
        inline_slide(&dir, "a.png", "A", "<p>A</p>"),
        inline_slide(&dir, "b.png", "B", "<p>B</p>"),
        inline_slide(&dir, "c.png", "C", "<p>C</p>"),
    ];
    let (mut widget, _dir) = build_widget(slides);

    widget.select(0);
    widget.select(2);
    widget.select(1);

    let selected: Vec<usize> = widget
        .slides()
        .iter()
        .enumerate()
        .filter(|(_, el)| el.title.has_class("selected") || el.info.has_class("selected"))
        .map(|(ix, _)| ix)
        .collect();
    assert_eq!(selected, vec![1]);
    assert_eq!(widget.background(), BackgroundSlot::Slide(1));
    assert_eq!(widget.slides()[1].content.html.as_deref(), Some("<p>B</p>"));
}

#[test]
fn hover_follows_the_pointer_across_title_bars() {
    let dir = TempDir::new().unwrap();
    let slides = vec![
        inline_slide(&dir, "a.png", "A", "<p>A</p>"),
        inline_slide(&dir, "b.png", "B", "<p>B</p>"),
    ];
    let (mut widget, _dir) = build_widget(slides);
    let layout = Layout::compute(2, None, 800.0, 600.0);

    widget.update_hover(layout.title_at(center(layout.slides[0].title)));
    assert!(widget.slides()[0].title.has_class("hover"));

    // Moving onto the glyph stays inside the title rectangle.
    widget.update_hover(layout.title_at(center(layout.slides[0].plus)));
    assert!(widget.slides()[0].title.has_class("hover"));

    widget.update_hover(layout.title_at(center(layout.slides[1].title)));
    assert!(!widget.slides()[0].title.has_class("hover"));
    assert!(widget.slides()[1].title.has_class("hover"));

    // Below the last bar there is no title.
    widget.update_hover(layout.title_at(Vector2::new(10.0, 400.0)));
    assert!(!widget.slides()[1].title.has_class("hover"));
}

#[test]
fn slide_with_neither_html_nor_template_stays_empty() {
    let dir = TempDir::new().unwrap();
    let slides = vec![SlideConfig {
        title: "Empty".to_string(),
        background_image: write_image(&dir, "a.png"),
        html: None,
        template: None,
    }];
    let (mut widget, _dir) = build_widget(slides);

    widget.select(0);
    assert!(widget.slides()[0].content.html.is_none());
    assert!(widget.template(0).is_none());
    assert_eq!(widget.selected(), Some(0));
}
