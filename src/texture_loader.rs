//! Image preloading.
//!
//! Every slide background plus the main background is read in parallel
//! before any slide element is built. Completion is joined by a counter:
//! the preload is done exactly when slide count + 1 loads have reported
//! back, successful or not. A failed load is logged and leaves its slot
//! absent from the set; the selection protocol falls back to the main
//! background for absent slots.
//!
//! Decoding to a GPU texture happens afterwards on the main thread,
//! since raylib textures are bound to the window context.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::thread;

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::config::AccordionConfig;
use crate::error::{Error, Result};

/// Which image a finished load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Background,
    Slide(usize),
}

/// Raw file bytes plus EXIF orientation for one finished load.
#[derive(Debug)]
pub struct LoadedImage {
    pub slot: ImageSlot,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub orientation: u16,
}

/// The joined preload set. Slide entries sit in completion order and are
/// looked up by index.
#[derive(Debug, Default)]
pub struct PreloadedImages {
    background: Option<LoadedImage>,
    slides: Vec<LoadedImage>,
}

impl PreloadedImages {
    /// Number of images that actually loaded (slides + main background).
    pub fn len(&self) -> usize {
        self.slides.len() + usize::from(self.background.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn background(&self) -> Option<&LoadedImage> {
        self.background.as_ref()
    }

    pub fn slide(&self, index: usize) -> Option<&LoadedImage> {
        self.slides.iter().find(|i| i.slot == ImageSlot::Slide(index))
    }

    pub fn has_slide(&self, index: usize) -> bool {
        self.slide(index).is_some()
    }
}

struct LoadMessage {
    slot: ImageSlot,
    path: PathBuf,
    result: std::result::Result<(Vec<u8>, u16), String>,
}

/// Preload all slide backgrounds and the main background in parallel.
///
/// Returns once the completion counter reaches `slide_data.len() + 1`.
pub fn preload_images(config: &AccordionConfig) -> PreloadedImages {
    let (tx, rx) = mpsc::channel();
    let expected = config.slide_data.len() + 1;

    for (ix, slide) in config.slide_data.iter().enumerate() {
        spawn_load(ImageSlot::Slide(ix), slide.background_image.clone(), &tx);
    }
    spawn_load(ImageSlot::Background, config.background_image.clone(), &tx);
    // Only worker clones remain; each sends exactly one message, so the
    // channel closes once every load has reported.
    drop(tx);

    let mut preloaded = PreloadedImages::default();
    let mut num_loaded = 0;
    while num_loaded < expected {
        let Ok(message) = rx.recv() else { break };
        num_loaded += 1;
        match message.result {
            Ok((bytes, orientation)) => {
                debug!("preloaded {:?} ({} bytes)", message.path, bytes.len());
                let loaded = LoadedImage {
                    slot: message.slot,
                    path: message.path,
                    bytes,
                    orientation,
                };
                match loaded.slot {
                    ImageSlot::Background => preloaded.background = Some(loaded),
                    ImageSlot::Slide(_) => preloaded.slides.push(loaded),
                }
            }
            Err(reason) => {
                warn!("failed to preload {:?}: {reason}", message.path);
            }
        }
    }
    preloaded
}

fn spawn_load(slot: ImageSlot, path: PathBuf, tx: &Sender<LoadMessage>) {
    let worker_tx = tx.clone();
    let worker_path = path.clone();
    let spawned = thread::Builder::new()
        .name("accordion-preload".to_string())
        .spawn(move || {
            let result = read_image(&worker_path);
            let _ = worker_tx.send(LoadMessage {
                slot,
                path: worker_path,
                result,
            });
        });
    if let Err(e) = spawned {
        // Report the slot as completed-with-failure so the join still fires.
        let _ = tx.send(LoadMessage {
            slot,
            path,
            result: Err(format!("failed to spawn preload thread: {e}")),
        });
    }
}

fn read_image(path: &Path) -> std::result::Result<(Vec<u8>, u16), String> {
    let bytes = fs::read(path).map_err(|e| format!("failed to read file: {e}"))?;
    let orientation = exif_orientation(path, &bytes);
    Ok((bytes, orientation))
}

/// EXIF orientation tag, read for JPEGs only (as reliably supported).
/// 1 = no rotation.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&value) = values.first() {
                        return value;
                    }
                }
            }
            1
        }
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {e}", path);
            1
        }
    }
}

/// Decode a preloaded image and upload it as a texture, applying the
/// EXIF rotation.
///
/// Orientation values: 1 = normal, 3 = 180°, 6 = 90° clockwise,
/// 8 = 270° clockwise. Flip variants are ignored.
pub fn decode_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    loaded: &LoadedImage,
) -> Result<Texture2D> {
    let extension = loaded
        .path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &loaded.bytes)
        .map_err(|e| Error::Image {
            path: loaded.path.display().to_string(),
            reason: format!("failed to load image data: {e}"),
        })?;

    match loaded.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => {
            image.rotate_cw();
        }
        8 => {
            image.rotate_ccw();
        }
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| Error::Image {
            path: loaded.path.display().to_string(),
            reason: format!("failed to create texture: {e}"),
        })
}
