//! The accordion widget core.
//!
//! Owns the element tree, the single-selection state, the template
//! cache and the fetch plumbing. Everything here is renderer-agnostic;
//! the raylib side only reads element classes and the background slot.
//!
//! Control flow: construct → validate → init → preload images → build
//! slides → (on click) resolve template → cache.

use tracing::{debug, warn};

use crate::config::{AccordionConfig, AccordionOptions};
use crate::element::{Element, ElementSpec, create_element};
use crate::error::Result;
use crate::layout::Layout;
use crate::template::{FetchResult, TemplateFetcher, TemplateStore};
use crate::texture_loader::PreloadedImages;

use raylib::prelude::Vector2;

const SELECTED: &str = "selected";
const INVISIBLE: &str = "invisible";
const HOVER: &str = "hover";
const SLIDE_SELECTED: &str = "slide_selected";

/// Which preloaded image the container currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundSlot {
    #[default]
    Main,
    Slide(usize),
}

/// The two close controls. The mobile variant lives inside the title
/// bar and consumes its click; the desktop variant lives inside the
/// info panel and relies on ordinary dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseVariant {
    Desktop,
    Mobile,
}

/// What a click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Title(usize),
    Close(CloseVariant, usize),
}

/// Element handles for one slide, in the tree shape the renderer walks:
/// title bar (wrap label, `+` glyph, mobile close) interleaved with the
/// info panel (desktop close, content container).
#[derive(Debug)]
pub struct SlideElements {
    pub title: Element,
    pub wrap: Element,
    pub plus: Element,
    pub close_mobile: Element,
    pub info: Element,
    pub close_desktop: Element,
    pub content: Element,
}

pub struct Accordion {
    config: AccordionConfig,
    root: Element,
    slides: Vec<SlideElements>,
    selected: Option<usize>,
    hovered: Option<usize>,
    background: BackgroundSlot,
    loaded: Vec<bool>,
    templates: TemplateStore,
    fetcher: TemplateFetcher,
}

impl Accordion {
    /// Validate the options and set up the (still slide-less) widget.
    ///
    /// Any missing required field has already been logged individually
    /// by the validation step; the error just halts initialization.
    pub fn new(options: AccordionOptions) -> Result<Self> {
        let config = options.validate()?;
        let root = create_element(ElementSpec {
            tag: Some("div"),
            classes: Some(vec!["accordion"]),
            id: Some(config.element.clone()),
            html: None,
        });
        let slide_count = config.slide_data.len();
        Ok(Self {
            config,
            root,
            slides: Vec::new(),
            selected: None,
            hovered: None,
            background: BackgroundSlot::Main,
            loaded: vec![false; slide_count],
            templates: TemplateStore::new(slide_count),
            fetcher: TemplateFetcher::new(),
        })
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn slides(&self) -> &[SlideElements] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.config.slide_data.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn background(&self) -> BackgroundSlot {
        self.background
    }

    /// Build the slide elements. Called once, only after the image
    /// preload has joined, so no slide exists before every background
    /// is ready.
    pub fn build_slides(&mut self, preloaded: &PreloadedImages) {
        if !self.slides.is_empty() {
            warn!("slides already built, ignoring");
            return;
        }
        for ix in 0..self.config.slide_data.len() {
            self.loaded[ix] = preloaded.has_slide(ix);
        }

        for (ix, slide) in self.config.slide_data.iter().enumerate() {
            let info = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["accordion-info", INVISIBLE]),
                id: Some(format!("accordion-slide-{ix}")),
                html: None,
            });
            let close_desktop = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["circle", "close", "white", "unselected", INVISIBLE]),
                html: Some("x".to_string()),
                ..Default::default()
            });
            let close_mobile = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["circle", "close", "white", "unselected", INVISIBLE]),
                html: Some("x".to_string()),
                ..Default::default()
            });
            let content = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["accordion-content"]),
                ..Default::default()
            });
            let title = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["accordion-title"]),
                id: Some(format!("slide-title-{ix}")),
                html: None,
            });
            let wrap = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["wrap"]),
                html: Some(slide.title.clone()),
                ..Default::default()
            });
            let plus = create_element(ElementSpec {
                tag: Some("div"),
                classes: Some(vec!["circle", "white", "unselected"]),
                html: Some("+".to_string()),
                ..Default::default()
            });

            self.slides.push(SlideElements {
                title,
                wrap,
                plus,
                close_mobile,
                info,
                close_desktop,
                content,
            });
        }
    }

    /// Resolve a click position against the layout, honoring element
    /// visibility. The mobile close sits inside its title bar and wins
    /// over it, so a click there never falls through to selection.
    pub fn hit_at(&self, layout: &Layout, point: Vector2) -> Option<Hit> {
        for (ix, el) in self.slides.iter().enumerate() {
            let rects = layout.slides.get(ix)?;
            if el.close_mobile.visible() && rects.close_mobile.check_collision_point_rec(point) {
                return Some(Hit::Close(CloseVariant::Mobile, ix));
            }
            if el.info.visible()
                && el.close_desktop.visible()
                && rects.close_desktop.check_collision_point_rec(point)
            {
                return Some(Hit::Close(CloseVariant::Desktop, ix));
            }
        }
        for (ix, rects) in layout.slides.iter().enumerate() {
            if rects.title.check_collision_point_rec(point) {
                return Some(Hit::Title(ix));
            }
        }
        None
    }

    pub fn handle_click(&mut self, hit: Hit) {
        match hit {
            Hit::Title(ix) => self.select(ix),
            Hit::Close(variant, ix) => self.deselect(variant, ix),
        }
    }

    /// Selection protocol for a click on title `ix`.
    pub fn select(&mut self, ix: usize) {
        if ix >= self.slides.len() {
            warn!("select({ix}) before slides were built, ignoring");
            return;
        }

        self.root.add_class(SLIDE_SELECTED);

        // Swap to the slide's preloaded image; an absent entry falls
        // back to the main background.
        if self.loaded[ix] {
            self.background = BackgroundSlot::Slide(ix);
        } else {
            debug!("no preloaded image for slide {ix}, keeping main background");
            self.background = BackgroundSlot::Main;
        }

        for el in &mut self.slides {
            el.close_desktop.add_class(INVISIBLE);
            el.close_mobile.add_class(INVISIBLE);
        }
        for el in &mut self.slides {
            el.title.remove_class(SELECTED);
        }
        for el in &mut self.slides {
            el.info.remove_class(SELECTED);
            el.info.add_class(INVISIBLE);
        }

        let el = &mut self.slides[ix];
        el.title.add_class(SELECTED);
        el.info.remove_class(INVISIBLE);
        el.info.add_class(SELECTED);
        el.close_desktop.remove_class(INVISIBLE);
        el.close_mobile.remove_class(INVISIBLE);

        self.selected = Some(ix);
        self.resolve_content(ix);
    }

    /// Deselection protocol for either close control on slide `ix`.
    pub fn deselect(&mut self, variant: CloseVariant, ix: usize) {
        if ix >= self.slides.len() {
            warn!("deselect({ix}) before slides were built, ignoring");
            return;
        }

        self.root.remove_class(SLIDE_SELECTED);

        for el in &mut self.slides {
            el.title.remove_class(SELECTED);
            if variant == CloseVariant::Mobile {
                el.title.remove_class(HOVER);
            }
        }
        for el in &mut self.slides {
            el.info.remove_class(SELECTED);
            el.info.add_class(INVISIBLE);
        }

        let el = &mut self.slides[ix];
        match variant {
            CloseVariant::Desktop => {
                el.close_mobile.add_class(INVISIBLE);
                el.close_desktop.add_class(INVISIBLE);
            }
            CloseVariant::Mobile => {
                el.close_mobile.add_class(INVISIBLE);
            }
        }

        if variant == CloseVariant::Mobile {
            self.hovered = None;
        }
        self.background = BackgroundSlot::Main;
        self.selected = None;
    }

    /// Hover protocol: the pointer entering a title highlights it;
    /// leaving clears the highlight. The glyphs sit inside the title
    /// rectangle, so moving onto them never counts as leaving.
    pub fn update_hover(&mut self, hovered: Option<usize>) {
        if self.hovered == hovered {
            return;
        }
        if let Some(old) = self.hovered {
            if let Some(el) = self.slides.get_mut(old) {
                el.title.remove_class(HOVER);
            }
        }
        if let Some(new) = hovered {
            if let Some(el) = self.slides.get_mut(new) {
                el.title.add_class(HOVER);
            }
        }
        self.hovered = hovered;
    }

    /// Cache hit → inject synchronously. Inline html → cache + inject
    /// synchronously. Template URL → background GET, applied by
    /// [`poll_templates`]. Neither → panel body stays empty.
    ///
    /// [`poll_templates`]: Accordion::poll_templates
    fn resolve_content(&mut self, ix: usize) {
        if let Some(cached) = self.templates.get(ix).map(str::to_string) {
            self.slides[ix].content.set_html(&cached);
            return;
        }
        let slide = self.config.slide_data[ix].clone();
        if let Some(html) = slide.html {
            self.templates.set(ix, html.clone());
            self.slides[ix].content.set_html(&html);
        } else if let Some(url) = slide.template {
            self.fetcher.request(ix, &url);
        }
    }

    /// Drain finished template fetches. Successes populate the cache;
    /// the body is injected only when its slide is still the selected
    /// one, so a stale response never lands in a hidden panel. Failures
    /// leave the cache unset so reselection retries.
    pub fn poll_templates(&mut self) {
        for FetchResult { index, url, result } in self.fetcher.poll() {
            match result {
                Ok(body) => {
                    self.templates.set(index, body.clone());
                    if self.selected == Some(index) {
                        if let Some(el) = self.slides.get_mut(index) {
                            el.content.set_html(&body);
                        }
                    } else {
                        debug!("template {url} resolved after deselection, cached only");
                    }
                }
                Err(e) => {
                    // Already reported at the fetch site; the panel
                    // simply stays without content.
                    debug!("template fetch for {url} failed: {e}");
                }
            }
        }
    }

    /// Cached template for a slide, if any.
    pub fn template(&self, index: usize) -> Option<&str> {
        self.templates.get(index)
    }
}
