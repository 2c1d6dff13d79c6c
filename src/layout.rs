//! Widget geometry.
//!
//! Pure rectangle math for a vertical accordion: title bars stacked in
//! slide order, with the selected slide's info panel expanded directly
//! below its title. Glyph rectangles are laid out inside their parent
//! bar/panel, which is what makes the hover containment check work.

use raylib::prelude::*;

use crate::constants::*;

/// Rectangles for one slide's elements.
#[derive(Debug, Clone)]
pub struct SlideRects {
    pub title: Rectangle,
    pub plus: Rectangle,
    pub close_mobile: Rectangle,
    pub info: Rectangle,
    pub close_desktop: Rectangle,
    pub content: Rectangle,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub container: Rectangle,
    pub slides: Vec<SlideRects>,
}

fn glyph_square(center_x: f32, center_y: f32) -> Rectangle {
    Rectangle::new(
        center_x - GLYPH_RADIUS,
        center_y - GLYPH_RADIUS,
        GLYPH_RADIUS * 2.0,
        GLYPH_RADIUS * 2.0,
    )
}

impl Layout {
    pub fn compute(slide_count: usize, selected: Option<usize>, width: f32, height: f32) -> Self {
        let container = Rectangle::new(0.0, 0.0, width, height);
        let titles_total = slide_count as f32 * TITLE_BAR_HEIGHT;
        let panel_height = (height - titles_total).max(0.0);

        let mut slides = Vec::with_capacity(slide_count);
        let mut y = 0.0;
        for ix in 0..slide_count {
            let title = Rectangle::new(0.0, y, width, TITLE_BAR_HEIGHT);
            y += TITLE_BAR_HEIGHT;

            let title_mid = title.y + title.height / 2.0;
            let plus_x = title.x + title.width - GLYPH_MARGIN - GLYPH_RADIUS;
            let plus = glyph_square(plus_x, title_mid);
            let close_mobile =
                glyph_square(plus_x - GLYPH_RADIUS * 2.0 - GLYPH_MARGIN, title_mid);

            let expanded = selected == Some(ix);
            let info = if expanded {
                let rect = Rectangle::new(0.0, y, width, panel_height);
                y += panel_height;
                rect
            } else {
                Rectangle::new(0.0, y, width, 0.0)
            };

            let close_desktop = glyph_square(
                info.x + info.width - GLYPH_MARGIN - GLYPH_RADIUS,
                info.y + GLYPH_MARGIN + GLYPH_RADIUS,
            );
            let content = Rectangle::new(
                info.x + PANEL_PADDING,
                info.y + GLYPH_MARGIN + GLYPH_RADIUS * 2.0 + PANEL_PADDING,
                (info.width - PANEL_PADDING * 2.0).max(0.0),
                (info.height - GLYPH_MARGIN - GLYPH_RADIUS * 2.0 - PANEL_PADDING * 2.0).max(0.0),
            );

            slides.push(SlideRects {
                title,
                plus,
                close_mobile,
                info,
                close_desktop,
                content,
            });
        }

        Self { container, slides }
    }

    /// Index of the title bar under the pointer, if any.
    pub fn title_at(&self, point: Vector2) -> Option<usize> {
        self.slides
            .iter()
            .position(|s| s.title.check_collision_point_rec(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(outer: &Rectangle, inner: &Rectangle) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.x + inner.width <= outer.x + outer.width
            && inner.y + inner.height <= outer.y + outer.height
    }

    #[test]
    fn titles_and_panels_interleave_in_order() {
        let layout = Layout::compute(3, Some(1), 800.0, 600.0);
        let s = &layout.slides;
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].title.y, 0.0);
        // collapsed panel takes no space
        assert_eq!(s[0].info.height, 0.0);
        assert_eq!(s[1].title.y, TITLE_BAR_HEIGHT);
        // expanded panel sits right under its title and pushes slide 2 down
        assert!(s[1].info.height > 0.0);
        assert_eq!(s[1].info.y, s[1].title.y + s[1].title.height);
        assert_eq!(s[2].title.y, s[1].info.y + s[1].info.height);
    }

    #[test]
    fn nothing_expanded_without_selection() {
        let layout = Layout::compute(2, None, 800.0, 600.0);
        assert!(layout.slides.iter().all(|s| s.info.height == 0.0));
    }

    #[test]
    fn glyphs_sit_inside_their_title_bar() {
        let layout = Layout::compute(2, Some(0), 800.0, 600.0);
        for s in &layout.slides {
            assert!(contains(&s.title, &s.plus));
            assert!(contains(&s.title, &s.close_mobile));
        }
        let open = &layout.slides[0];
        assert!(contains(&open.info, &open.close_desktop));
        assert!(contains(&open.info, &open.content));
    }

    #[test]
    fn title_at_resolves_bars_and_misses_gaps() {
        let layout = Layout::compute(2, None, 800.0, 600.0);
        let inside = Vector2::new(10.0, TITLE_BAR_HEIGHT + 5.0);
        assert_eq!(layout.title_at(inside), Some(1));
        let below = Vector2::new(10.0, TITLE_BAR_HEIGHT * 2.0 + 5.0);
        assert_eq!(layout.title_at(below), None);
    }

    #[test]
    fn mobile_close_overlaps_title_not_plus() {
        let layout = Layout::compute(1, None, 800.0, 600.0);
        let s = &layout.slides[0];
        assert!(s.close_mobile.x + s.close_mobile.width <= s.plus.x);
    }
}
