//! Artifact output sink and its designated writer thread.
//!
//! Processed textures are handed to a single long-lived thread that owns
//! all artifact I/O. Producers enqueue and move on; they never block on
//! disk writes, and a failed write never unwinds into the recolor path.

use crate::error::AppError;
use crate::models::ArtifactId;
use palette_remap::TextureImage;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Destination for processed texture artifacts.
///
/// Implementations run on the sink thread only, so they may do blocking
/// I/O freely.
pub trait ArtifactSink: Send {
    /// Persist an artifact under the given id.
    fn register(&self, id: &ArtifactId, image: &TextureImage) -> Result<(), AppError>;

    /// Remove a previously registered artifact. Unknown ids are not an error.
    fn destroy(&self, id: &ArtifactId) -> Result<(), AppError>;
}

/// Sink that lays artifacts out as PNG files under a root directory.
///
/// The artifact id doubles as the relative file path, so
/// `processed/2/stone_terra_c10_s0_h0.png` lands exactly there.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn register(&self, id: &ArtifactId, image: &TextureImage) -> Result<(), AppError> {
        let path = self.root.join(id.as_str());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = image::RgbaImage::new(image.width(), image.height());
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let color = image.pixel(x, y);
            *pixel = image::Rgba([color.r, color.g, color.b, color.a]);
        }
        out.save(&path)?;

        tracing::trace!(path = %path.display(), "Artifact written");
        Ok(())
    }

    fn destroy(&self, id: &ArtifactId) -> Result<(), AppError> {
        let path = self.root.join(id.as_str());
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::trace!(path = %path.display(), "Artifact removed");
                Ok(())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

enum SinkCommand {
    Register(ArtifactId, TextureImage),
    Destroy(ArtifactId),
    Flush(mpsc::Sender<()>),
}

/// Owner of the designated sink thread.
///
/// [`register`](Self::register) and [`destroy`](Self::destroy) are
/// fire-and-forget: commands queue in order and the worker applies them
/// one at a time. [`flush`](Self::flush) is the only blocking call and
/// exists so tests and shutdown paths can wait for the queue to drain.
///
/// Dropping the executor closes the queue and joins the worker, so every
/// command enqueued before the drop still reaches the sink.
pub struct SinkExecutor {
    sender: Option<mpsc::Sender<SinkCommand>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SinkExecutor {
    /// Spawn the worker thread around the given sink.
    pub fn new(sink: Box<dyn ArtifactSink>) -> Self {
        let (sender, receiver) = mpsc::channel::<SinkCommand>();

        let handle = thread::spawn(move || {
            while let Ok(command) = receiver.recv() {
                match command {
                    SinkCommand::Register(id, image) => {
                        if let Err(error) = sink.register(&id, &image) {
                            tracing::error!(%id, %error, "Artifact registration failed");
                        }
                    }
                    SinkCommand::Destroy(id) => {
                        if let Err(error) = sink.destroy(&id) {
                            tracing::error!(%id, %error, "Artifact removal failed");
                        }
                    }
                    SinkCommand::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    /// Queue an artifact write. Never blocks, never fails the caller.
    pub fn register(&self, id: ArtifactId, image: TextureImage) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(SinkCommand::Register(id, image));
        }
    }

    /// Queue an artifact removal. Never blocks, never fails the caller.
    pub fn destroy(&self, id: ArtifactId) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(SinkCommand::Destroy(id));
        }
    }

    /// Block until every command queued before this call has been applied.
    pub fn flush(&self) {
        if let Some(sender) = &self.sender {
            let (ack, done) = mpsc::channel();
            if sender.send(SinkCommand::Flush(ack)).is_ok() {
                let _ = done.recv();
            }
        }
    }
}

impl Drop for SinkExecutor {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain the queue and exit.
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
