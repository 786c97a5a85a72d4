//! Shared plumbing for the Haar-cascade detectors: classifier loading and
//! Frame → OpenCV Mat conversion.

use std::path::{Path, PathBuf};

use opencv::core::{Mat, Rect};
use opencv::prelude::*;
use opencv::{imgproc, objdetect};
use thiserror::Error;

use crate::shared::region::Region;

#[derive(Error, Debug)]
pub enum CascadeError {
    #[error("cascade file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to load cascade {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
    #[error("cascade {0} loaded empty")]
    Empty(PathBuf),
}

/// Loads a cascade parameter file, failing fast on missing or unreadable
/// files so startup errors surface before the frame loop.
pub fn load_cascade(path: &Path) -> Result<objdetect::CascadeClassifier, CascadeError> {
    if !path.exists() {
        return Err(CascadeError::NotFound(path.to_path_buf()));
    }
    let classifier = objdetect::CascadeClassifier::new(&path.to_string_lossy())
        .map_err(|source| CascadeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
    if classifier.empty().map_err(|source| CascadeError::Load {
        path: path.to_path_buf(),
        source,
    })? {
        return Err(CascadeError::Empty(path.to_path_buf()));
    }
    Ok(classifier)
}

/// Packs interleaved RGB bytes into an equalized single-channel Mat, the
/// representation both cascades detect on.
pub fn equalized_gray(rgb: &[u8], width: i32, height: i32) -> opencv::Result<Mat> {
    let packed = Mat::from_slice(rgb)?;
    let rgb_mat = packed.reshape(3, height)?;
    debug_assert_eq!(rgb_mat.cols(), width);

    let mut gray = Mat::default();
    imgproc::cvt_color(&rgb_mat, &mut gray, imgproc::COLOR_RGB2GRAY, 0)?;

    let mut equalized = Mat::default();
    imgproc::equalize_hist(&gray, &mut equalized)?;
    Ok(equalized)
}

pub fn rect_to_region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}
