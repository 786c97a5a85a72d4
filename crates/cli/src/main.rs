use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossbeam_channel::unbounded;

use facetoy_core::detection::domain::face_region_builder::FaceRegionBuilder;
use facetoy_core::detection::infrastructure::haar_eye_detector::HaarEyeDetector;
use facetoy_core::detection::infrastructure::haar_face_detector::HaarFaceDetector;
use facetoy_core::display::infrastructure::minifb_display::MinifbDisplay;
use facetoy_core::effects::infrastructure::effect_factory::create_effects;
use facetoy_core::overlay::overlay_player::OverlayPlayer;
use facetoy_core::pipeline::frame_pipeline::FramePipeline;
use facetoy_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use facetoy_core::pipeline::play_effects_use_case::PlayEffectsUseCase;
use facetoy_core::shared::constants::{
    FACE_MARGIN, MOSAIC_SCALE, OVERLAY_BLACK_THRESHOLD, SLIM_STRENGTH,
};
use facetoy_core::video::domain::frame_source::FrameSource;
use facetoy_core::video::infrastructure::camera_source::CameraSource;
use facetoy_core::video::infrastructure::ffmpeg_source::FfmpegSource;

/// Interactive face effects for videos and webcams.
#[derive(Parser)]
#[command(name = "facetoy")]
struct Cli {
    /// Input video file (omit when using --camera).
    input: Option<PathBuf>,

    /// Capture from this webcam index instead of a file.
    #[arg(long)]
    camera: Option<u32>,

    /// Overlay animation video played at the click point.
    #[arg(long)]
    overlay: PathBuf,

    /// Frontal-face cascade parameter file.
    #[arg(long, default_value = "data/haarcascade_frontalface_alt.xml")]
    face_cascade: PathBuf,

    /// Eye cascade parameter file.
    #[arg(long, default_value = "data/haarcascade_eye_tree_eyeglasses.xml")]
    eye_cascade: PathBuf,

    /// Padding around the detected face, in pixels.
    #[arg(long, default_value_t = FACE_MARGIN)]
    margin: i32,

    /// Peak horizontal displacement of the slim effect, in pixels.
    #[arg(long, default_value_t = SLIM_STRENGTH)]
    slim_strength: f32,

    /// Mosaic downsample factor, in (0, 1].
    #[arg(long, default_value_t = MOSAIC_SCALE)]
    mosaic_scale: f32,

    /// Channel ceiling treated as overlay background.
    #[arg(long, default_value_t = OVERLAY_BLACK_THRESHOLD)]
    overlay_threshold: u8,

    /// Requested capture width, used with --camera.
    #[arg(long, default_value = "640")]
    capture_width: u32,

    /// Requested capture height, used with --camera.
    #[arg(long, default_value = "480")]
    capture_height: u32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let source = open_source(&cli)?;
    let metadata = source.metadata().clone();
    log::info!(
        "input {}x{} at {:.1} fps",
        metadata.width,
        metadata.height,
        metadata.fps
    );

    let overlay_source = FfmpegSource::open(&cli.overlay)?;
    log::info!(
        "overlay {} frames",
        overlay_source.metadata().total_frames
    );
    let overlay =
        OverlayPlayer::new(Box::new(overlay_source)).with_threshold(cli.overlay_threshold);

    let face_detector = HaarFaceDetector::from_file(&cli.face_cascade)?;
    let eye_detector = HaarEyeDetector::from_file(&cli.eye_cascade)?;

    let pipeline = FramePipeline::new(
        Box::new(face_detector),
        Box::new(eye_detector),
        FaceRegionBuilder::new(cli.margin),
        create_effects(cli.slim_strength, cli.mosaic_scale),
        overlay,
    );

    let (events_tx, events_rx) = unbounded();
    let display = MinifbDisplay::new("facetoy", metadata.width, metadata.height, events_tx)?;

    let mut use_case = PlayEffectsUseCase::new(
        source,
        Box::new(display),
        pipeline,
        events_rx,
        Box::new(StdoutPipelineLogger::default()),
    );
    use_case.run()
}

fn open_source(cli: &Cli) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> {
    if let Some(index) = cli.camera {
        Ok(Box::new(CameraSource::open(
            index,
            cli.capture_width,
            cli.capture_height,
        )?))
    } else {
        Ok(Box::new(FfmpegSource::open(cli.input.as_ref().unwrap())?))
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.input.is_some() && cli.camera.is_some() {
        return Err("give an input file or --camera, not both".into());
    }
    if cli.input.is_none() && cli.camera.is_none() {
        return Err("an input file or --camera is required".into());
    }
    if let Some(input) = &cli.input {
        if !input.exists() {
            return Err(format!("input file not found: {}", input.display()).into());
        }
    }
    if !cli.overlay.exists() {
        return Err(format!("overlay file not found: {}", cli.overlay.display()).into());
    }
    if cli.margin < 0 {
        return Err(format!("margin must not be negative, got {}", cli.margin).into());
    }
    if !(cli.mosaic_scale > 0.0 && cli.mosaic_scale <= 1.0) {
        return Err(format!(
            "mosaic scale must be in (0, 1], got {}",
            cli.mosaic_scale
        )
        .into());
    }
    if cli.slim_strength < 0.0 {
        return Err(format!(
            "slim strength must not be negative, got {}",
            cli.slim_strength
        )
        .into());
    }
    Ok(())
}
