//! Accordion slide widget.
//!
//! A list of slides, each a title bar plus an expandable info panel,
//! drawn over a preloaded background image. Selecting a slide swaps the
//! background to that slide's preloaded image and lazily resolves the
//! panel body: an inline HTML string, or an HTML template fetched over
//! HTTP once and cached per slide.
//!
//! The core (config validation, element tree, selection state, template
//! cache, image preloading) is renderer-agnostic; [`render`] and the
//! `accordion` binary put it on screen with raylib.

pub mod accordion;
pub mod config;
pub mod constants;
pub mod element;
pub mod error;
pub mod layout;
pub mod render;
pub mod template;
pub mod texture_loader;

pub use accordion::{Accordion, BackgroundSlot, CloseVariant, Hit, SlideElements};
pub use config::{AccordionConfig, AccordionOptions, SlideConfig};
pub use element::{Element, ElementSpec, create_element};
pub use error::{Error, Result};
pub use layout::Layout;
pub use template::{TemplateFetcher, TemplateStore};
pub use texture_loader::{
    ImageSlot, LoadedImage, PreloadedImages, decode_texture, preload_images,
};
