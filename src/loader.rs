use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Decoded RGBA8 image, ready for texture upload
#[derive(Debug, Clone, PartialEq)]
pub struct PanelImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PanelImage {
    /// Solid-color image, mostly useful as a stand-in texture
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let rgba = color
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self { width, height, rgba }
    }
}

/// Completion notice for one panel texture
#[derive(Debug)]
pub enum LoadEvent {
    Loaded { index: usize, image: PanelImage },
    Failed { index: usize, error: anyhow::Error },
}

/// Decode an image file into RGBA8
pub fn decode_image(path: impl AsRef<Path>) -> Result<PanelImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("Failed to open panel image: {:?}", path))?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("panel image {:?} has zero extent ({}x{})", path, width, height);
    }

    Ok(PanelImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Decodes panel images off the render thread
///
/// Each source gets a worker thread; results come back over a channel
/// that the render thread drains once per frame.
pub struct TextureLoader {
    receiver: Receiver<LoadEvent>,
}

impl TextureLoader {
    /// Start decoding every `(panel index, path)` pair
    pub fn spawn(sources: Vec<(usize, PathBuf)>) -> Self {
        let (sender, loader) = Self::channel();

        for (index, path) in sources {
            let worker = sender.clone();
            let spawned = thread::Builder::new()
                .name(format!("panel-loader-{}", index))
                .spawn(move || {
                    let event = match decode_image(&path) {
                        Ok(image) => {
                            log::debug!(
                                "Decoded panel {} from {:?} ({}x{})",
                                index,
                                path,
                                image.width,
                                image.height
                            );
                            LoadEvent::Loaded { index, image }
                        }
                        Err(error) => LoadEvent::Failed { index, error },
                    };
                    worker.send(event).ok();
                });

            if let Err(e) = spawned {
                sender
                    .send(LoadEvent::Failed {
                        index,
                        error: anyhow::Error::new(e).context("Failed to spawn loader thread"),
                    })
                    .ok();
            }
        }

        loader
    }

    /// Loader fed by hand through the returned sender
    pub fn channel() -> (Sender<LoadEvent>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self { receiver })
    }

    /// Drain every event that arrived since the last poll
    pub fn poll(&self) -> Vec<LoadEvent> {
        self.receiver.try_iter().collect()
    }
}

/// All-or-nothing gate over a fixed number of loads
///
/// Items are released together, once, and only when every slot has
/// completed. A single failure keeps the barrier closed for good.
#[derive(Debug)]
pub struct LoadBarrier<T> {
    slots: Vec<Option<T>>,
    failed: Vec<usize>,
    released: bool,
}

impl<T> LoadBarrier<T> {
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(|_| None).collect(),
            failed: Vec::new(),
            released: false,
        }
    }

    /// Record a completed load; out-of-range indices are ignored
    pub fn complete(&mut self, index: usize, item: T) {
        if self.failed.contains(&index) {
            return;
        }
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(item);
        }
    }

    /// Record a failed load, closing the barrier
    ///
    /// A failed slot stays empty even if a late completion arrives for it.
    pub fn fail(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
        if !self.failed.contains(&index) {
            self.failed.push(index);
        }
    }

    pub fn has_failed(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Indices of failed loads, in the order they were reported
    pub fn failed_slots(&self) -> &[usize] {
        &self.failed
    }

    pub fn completed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every slot filled, nothing failed, not yet released
    pub fn is_ready(&self) -> bool {
        self.failed.is_empty() && !self.released && self.slots.iter().all(Option::is_some)
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Take all items in slot order, once
    pub fn release(&mut self) -> Option<Vec<T>> {
        if !self.is_ready() {
            return None;
        }
        self.released = true;
        self.slots.iter_mut().map(Option::take).collect()
    }
}
