use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = stride.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }
}

impl<'a, T: Copy> ImageView<'a, T> {
    pub fn sample(&self, x: usize, y: usize) -> T {
        assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[y * self.stride + x]
    }
}

/// Returns a freshly allocated transpose: output `(x, y)` is input `(y, x)`.
pub fn transpose<T: Copy>(src: &ImageView<'_, T>) -> Image<T> {
    let w = src.width();
    let h = src.height();
    if w == 0 || h == 0 {
        return Image {
            width: h,
            height: w,
            data: Vec::new(),
        };
    }

    let mut out = Vec::with_capacity(w * h);
    // Read row-major over the output so writes stay sequential.
    for x in 0..w {
        for y in 0..h {
            out.push(src.sample(x, y));
        }
    }

    Image {
        width: h,
        height: w,
        data: out,
    }
}

/// Converts a `u8` mask into the {0.0, 1.0} phase convention.
///
/// Pixels are treated as binary with threshold `> 0`: any nonzero value is
/// solid, zero is pore.
pub fn binary_to_f32(src: &ImageView<'_, u8>) -> Image<f32> {
    let mut out = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        for &px in src.row(y) {
            out.push(if px > 0 { crate::SOLID } else { crate::PORE });
        }
    }

    Image {
        width: src.width(),
        height: src.height(),
        data: out,
    }
}
