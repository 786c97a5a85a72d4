use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;
use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::frame_source::FrameSource;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("failed to open camera {index}: {reason}")]
    Open { index: u32, reason: String },
    #[error("failed to start camera stream: {0}")]
    Stream(String),
}

/// Live webcam capture via nokhwa, decoded to RGB through the image crate.
///
/// A camera has no frame count and no notion of position: `total_frames`
/// reports zero and `rewind` is a no-op.
pub struct CameraSource {
    camera: Camera,
    metadata: VideoMetadata,
    frame_index: usize,
}

// The capture handle is owned by the pipeline thread for its whole
// lifetime; nothing is shared.
unsafe impl Send for CameraSource {}

impl CameraSource {
    pub fn open(index: u32, width: u32, height: u32) -> Result<Self, CameraError> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(Resolution::new(width, height), FrameFormat::YUYV, 30),
        ));
        let mut camera = Camera::new(CameraIndex::Index(index), requested).map_err(|e| {
            CameraError::Open {
                index,
                reason: e.to_string(),
            }
        })?;
        camera
            .open_stream()
            .map_err(|e| CameraError::Stream(e.to_string()))?;

        // The stream may settle on a nearby resolution
        let actual = camera.resolution();
        let metadata = VideoMetadata {
            width: actual.width(),
            height: actual.height(),
            fps: camera.frame_rate() as f64,
            total_frames: 0,
            source_path: None,
        };

        Ok(Self {
            camera,
            metadata,
            frame_index: 0,
        })
    }
}

impl FrameSource for CameraSource {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        let buffer = self.camera.frame()?;
        let image = buffer.decode_image::<RgbFormat>()?;
        let (width, height) = image.dimensions();
        let frame = Frame::new(image.into_raw(), width, height, self.frame_index);
        self.frame_index += 1;
        Ok(Some(frame))
    }

    fn rewind(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn close(&mut self) {
        let _ = self.camera.stop_stream();
    }
}
