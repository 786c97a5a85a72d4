use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::frame_source::FrameSource;

/// Decodes a video file via ffmpeg-next (libavformat + libavcodec),
/// converting each frame to tightly-packed RGB24.
pub struct FfmpegSource {
    inner: Option<Decoding>,
    metadata: VideoMetadata,
    frame_index: usize,
}

struct Decoding {
    ictx: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    stream_index: usize,
    flushing: bool,
}

// The ffmpeg contexts hold raw pointers that are never shared; the source
// is owned by the pipeline thread for its whole lifetime.
unsafe impl Send for FfmpegSource {}

impl FfmpegSource {
    /// Opens `path` and prepares decoding; fails fast on unopenable input.
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let ictx = ffmpeg_next::format::input(path)?;
        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or("no video stream found")?;
        let stream_index = stream.index();

        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let decoder = codec_ctx.decoder().video()?;

        let rate = stream.rate();
        let fps = if rate.denominator() != 0 {
            rate.numerator() as f64 / rate.denominator() as f64
        } else {
            0.0
        };
        let metadata = VideoMetadata {
            width: decoder.width(),
            height: decoder.height(),
            fps,
            total_frames: stream.frames().max(0) as usize,
            source_path: Some(path.to_path_buf()),
        };

        let scaler = rgb_scaler(&decoder)?;

        Ok(Self {
            inner: Some(Decoding {
                ictx,
                decoder,
                scaler,
                stream_index,
                flushing: false,
            }),
            metadata,
            frame_index: 0,
        })
    }

    fn receive_rgb(
        &mut self,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(None);
        };
        let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
        if inner.decoder.receive_frame(&mut decoded).is_err() {
            return Ok(None);
        }

        let mut rgb = ffmpeg_next::util::frame::video::Video::empty();
        inner.scaler.run(&decoded, &mut rgb)?;

        let frame = Frame::new(
            packed_rgb(&rgb, self.metadata.width, self.metadata.height),
            self.metadata.width,
            self.metadata.height,
            self.frame_index,
        );
        self.frame_index += 1;
        Ok(Some(frame))
    }
}

impl FrameSource for FfmpegSource {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        loop {
            if let Some(frame) = self.receive_rgb()? {
                return Ok(Some(frame));
            }
            let Some(inner) = self.inner.as_mut() else {
                return Ok(None);
            };
            if inner.flushing {
                return Ok(None);
            }

            match inner.ictx.packets().next() {
                Some((stream, packet)) => {
                    if stream.index() == inner.stream_index {
                        // A rejected packet is skipped, not fatal
                        let _ = inner.decoder.send_packet(&packet);
                    }
                }
                None => {
                    let _ = inner.decoder.send_eof();
                    inner.flushing = true;
                }
            }
        }
    }

    fn rewind(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(inner) = self.inner.as_mut() else {
            return Err("source is closed".into());
        };
        inner.ictx.seek(0, ..)?;
        inner.decoder.flush();
        inner.flushing = false;
        self.frame_index = 0;
        Ok(())
    }

    fn close(&mut self) {
        self.inner = None;
    }
}

fn rgb_scaler(
    decoder: &ffmpeg_next::decoder::Video,
) -> Result<ffmpeg_next::software::scaling::Context, ffmpeg_next::Error> {
    ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        ffmpeg_next::format::Pixel::RGB24,
        decoder.width(),
        decoder.height(),
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
}

/// Strips per-row stride padding from an ffmpeg RGB frame.
fn packed_rgb(rgb: &ffmpeg_next::util::frame::video::Video, width: u32, height: u32) -> Vec<u8> {
    let stride = rgb.stride(0);
    let data = rgb.data(0);
    let row_bytes = width as usize * 3;

    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * stride;
        pixels.extend_from_slice(&data[start..start + row_bytes]);
    }
    pixels
}
