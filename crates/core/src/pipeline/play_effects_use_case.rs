use std::time::Instant;

use crossbeam_channel::Receiver;

use crate::display::domain::frame_display::FrameDisplay;
use crate::input::control_event::ControlEvent;
use crate::video::domain::frame_source::FrameSource;

use super::frame_pipeline::FramePipeline;
use super::pipeline_logger::PipelineLogger;

/// The interactive loop: drain input events, pull a frame, process it,
/// present it.
///
/// Events queued during one `present` are applied before the next frame is
/// processed, so a click is never reordered past a frame. The loop ends on
/// a quit event, a closed window, or the source running dry.
pub struct PlayEffectsUseCase {
    source: Box<dyn FrameSource>,
    display: Box<dyn FrameDisplay>,
    pipeline: FramePipeline,
    events: Receiver<ControlEvent>,
    logger: Box<dyn PipelineLogger>,
}

impl PlayEffectsUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        display: Box<dyn FrameDisplay>,
        pipeline: FramePipeline,
        events: Receiver<ControlEvent>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            source,
            display,
            pipeline,
            events,
            logger,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let frame_height = self.source.metadata().height as i32;
        self.logger.info("session started");

        loop {
            let mut quit = false;
            while let Ok(event) = self.events.try_recv() {
                match event {
                    ControlEvent::Quit => quit = true,
                    ControlEvent::Click(p) => self.pipeline.handle_click(p, frame_height)?,
                }
            }
            if quit || !self.display.is_open() {
                self.logger.info("quit requested");
                break;
            }

            let Some(mut frame) = self.source.next_frame()? else {
                self.logger.info("end of stream");
                break;
            };

            let started = Instant::now();
            self.pipeline.process(&mut frame)?;
            self.logger
                .timing("process", started.elapsed().as_secs_f64() * 1000.0);

            let started = Instant::now();
            self.display.present(&frame)?;
            self.logger
                .timing("present", started.elapsed().as_secs_f64() * 1000.0);

            self.logger.frame_done(frame.index());
        }

        self.source.close();
        self.logger.summary();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::eye_detector::EyeDetector;
    use crate::detection::domain::face_detector::FaceDetector;
    use crate::detection::domain::face_region_builder::FaceRegionBuilder;
    use crate::effects::domain::face_effect::{EffectContext, EffectMode, FaceEffect};
    use crate::overlay::overlay_player::OverlayPlayer;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use crate::shared::frame::Frame;
    use crate::shared::point::Point;
    use crate::shared::region::Region;
    use crate::shared::video_metadata::VideoMetadata;
    use crossbeam_channel::unbounded;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const W: u32 = 320;
    const H: u32 = 240;

    fn metadata(total: usize) -> VideoMetadata {
        VideoMetadata {
            width: W,
            height: H,
            fps: 25.0,
            total_frames: total,
            source_path: None,
        }
    }

    struct StubSource {
        metadata: VideoMetadata,
        remaining: usize,
        next_index: usize,
        closed: Arc<Mutex<bool>>,
    }

    impl StubSource {
        fn new(frames: usize) -> (Self, Arc<Mutex<bool>>) {
            let closed = Arc::new(Mutex::new(false));
            (
                Self {
                    metadata: metadata(frames),
                    remaining: frames,
                    next_index: 0,
                    closed: closed.clone(),
                },
                closed,
            )
        }
    }

    impl FrameSource for StubSource {
        fn metadata(&self) -> &VideoMetadata {
            &self.metadata
        }
        fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
            if self.remaining == 0 {
                return Ok(None);
            }
            self.remaining -= 1;
            let index = self.next_index;
            self.next_index += 1;
            let data = vec![60u8; (W * H * 3) as usize];
            Ok(Some(Frame::new(data, W, H, index)))
        }
        fn rewind(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }
        fn close(&mut self) {
            *self.closed.lock().unwrap() = true;
        }
    }

    struct StubDisplay {
        presented: Arc<Mutex<Vec<usize>>>,
        open_for: usize,
    }

    impl FrameDisplay for StubDisplay {
        fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.presented.lock().unwrap().push(frame.index());
            Ok(())
        }
        fn is_open(&self) -> bool {
            self.presented.lock().unwrap().len() < self.open_for
        }
    }

    struct NoFaceDetector;
    impl FaceDetector for NoFaceDetector {
        fn detect(&mut self, _: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Ok(vec![])
        }
    }

    struct FixedFaceDetector;
    impl FaceDetector for FixedFaceDetector {
        fn detect(&mut self, _: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Ok(vec![Region::new(50, 50, 100, 100)])
        }
    }

    struct NoEyes;
    impl EyeDetector for NoEyes {
        fn detect(
            &mut self,
            _: &Frame,
            _: &Region,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Ok(vec![])
        }
    }

    #[derive(Clone)]
    struct ModeRecorder {
        seen: Arc<Mutex<Vec<EffectMode>>>,
        mode: EffectMode,
    }

    impl FaceEffect for ModeRecorder {
        fn apply(
            &self,
            _: &mut Frame,
            _: &EffectContext,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.seen.lock().unwrap().push(self.mode);
            Ok(())
        }
    }

    struct IdleOverlaySource(VideoMetadata);
    impl FrameSource for IdleOverlaySource {
        fn metadata(&self) -> &VideoMetadata {
            &self.0
        }
        fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
            Ok(None)
        }
        fn rewind(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }
        fn close(&mut self) {}
    }

    fn build_pipeline(
        detector: Box<dyn FaceDetector>,
        seen: Arc<Mutex<Vec<EffectMode>>>,
    ) -> FramePipeline {
        let mut effects: HashMap<EffectMode, Box<dyn FaceEffect>> = HashMap::new();
        for mode in EffectMode::ALL {
            effects.insert(
                *mode,
                Box::new(ModeRecorder {
                    seen: seen.clone(),
                    mode: *mode,
                }),
            );
        }
        FramePipeline::new(
            detector,
            Box::new(NoEyes),
            FaceRegionBuilder::default(),
            effects,
            OverlayPlayer::new(Box::new(IdleOverlaySource(metadata(3)))),
        )
    }

    #[test]
    fn test_runs_to_end_of_stream() {
        let (source, closed) = StubSource::new(4);
        let presented = Arc::new(Mutex::new(Vec::new()));
        let (_tx, rx) = unbounded();
        let mut use_case = PlayEffectsUseCase::new(
            Box::new(source),
            Box::new(StubDisplay {
                presented: presented.clone(),
                open_for: usize::MAX,
            }),
            build_pipeline(Box::new(NoFaceDetector), Arc::new(Mutex::new(Vec::new()))),
            rx,
            Box::new(NullPipelineLogger),
        );

        use_case.run().unwrap();

        assert_eq!(*presented.lock().unwrap(), vec![0, 1, 2, 3]);
        assert!(*closed.lock().unwrap());
    }

    #[test]
    fn test_quit_event_stops_before_next_frame() {
        let (source, _) = StubSource::new(100);
        let presented = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = unbounded();
        tx.send(ControlEvent::Quit).unwrap();

        let mut use_case = PlayEffectsUseCase::new(
            Box::new(source),
            Box::new(StubDisplay {
                presented: presented.clone(),
                open_for: usize::MAX,
            }),
            build_pipeline(Box::new(NoFaceDetector), Arc::new(Mutex::new(Vec::new()))),
            rx,
            Box::new(NullPipelineLogger),
        );

        use_case.run().unwrap();
        assert!(presented.lock().unwrap().is_empty());
    }

    #[test]
    fn test_closed_display_stops_loop() {
        let (source, _) = StubSource::new(100);
        let presented = Arc::new(Mutex::new(Vec::new()));
        let (_tx, rx) = unbounded();

        let mut use_case = PlayEffectsUseCase::new(
            Box::new(source),
            Box::new(StubDisplay {
                presented: presented.clone(),
                open_for: 3,
            }),
            build_pipeline(Box::new(NoFaceDetector), Arc::new(Mutex::new(Vec::new()))),
            rx,
            Box::new(NullPipelineLogger),
        );

        use_case.run().unwrap();
        assert_eq!(presented.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_click_applies_before_following_frame() {
        let (source, _) = StubSource::new(2);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = unbounded();
        // Queue a strip click selecting Mosaic before the loop starts
        tx.send(ControlEvent::Click(Point::new(250, H as i32 - 5)))
            .unwrap();

        let mut use_case = PlayEffectsUseCase::new(
            Box::new(source),
            Box::new(StubDisplay {
                presented: Arc::new(Mutex::new(Vec::new())),
                open_for: usize::MAX,
            }),
            build_pipeline(Box::new(FixedFaceDetector), seen.clone()),
            rx,
            Box::new(NullPipelineLogger),
        );

        use_case.run().unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|m| *m == EffectMode::Mosaic));
    }
}
