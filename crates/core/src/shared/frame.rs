use ndarray::{ArrayView3, ArrayViewMut3};

/// A single video frame: contiguous RGB bytes in row-major order.
///
/// Pixel format conversion happens at I/O boundaries; everything downstream
/// of a source works on this representation.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

pub const CHANNELS: usize = 3;

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
            index,
        }
    }

    /// A frame filled with a single color, mostly useful in tests.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&rgb);
        }
        Self::new(data, width, height, 0)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the pixel at (x, y). Caller guarantees bounds.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.pixel_offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.pixel_offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}
