use crate::error::ImageError;
use crate::image::Image;

/// A color channel of an RGB image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// The index of the channel in an interleaved RGB buffer.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// An RGB color triple with channels in [0, 255].
///
/// # Examples
///
/// ```
/// use pictor_image::Rgb;
///
/// let color = Rgb::new(12, 163, 194);
/// assert_eq!(color.g, 163);
/// assert!(color.distance(&color) == 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel value.
    pub r: u8,
    /// The green channel value.
    pub g: u8,
    /// The blue channel value.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure red.
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Pure green.
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get a channel value by name.
    #[inline]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Set a channel value by name.
    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// Euclidean distance between two colors over the three channels.
    ///
    /// The distance is a nonnegative scalar; larger means less similar.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictor_image::Rgb;
    ///
    /// let d = Rgb::BLACK.distance(&Rgb::new(3, 4, 0));
    /// assert_eq!(d, 5.0);
    /// ```
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Read an [`Rgb`] out of an interleaved pixel slice.
///
/// The slice must hold at least three channel values.
#[inline]
pub fn rgb_from_slice(pixel: &[u8]) -> Rgb {
    Rgb::new(pixel[0], pixel[1], pixel[2])
}

/// Write an [`Rgb`] into an interleaved pixel slice.
#[inline]
pub fn rgb_to_slice(pixel: &mut [u8], color: Rgb) {
    pixel[0] = color.r;
    pixel[1] = color.g;
    pixel[2] = color.b;
}

impl Image<u8, 3> {
    /// Get the color of the pixel at the given coordinate.
    ///
    /// # Errors
    ///
    /// If the coordinate is out of bounds, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictor_image::{Image, ImageSize, Rgb};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize { width: 2, height: 2 }, 7u8).unwrap();
    ///
    /// assert_eq!(image.rgb_at(1, 1).unwrap(), Rgb::new(7, 7, 7));
    /// ```
    pub fn rgb_at(&self, row: usize, col: usize) -> Result<Rgb, ImageError> {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelIndexOutOfBounds(
                row,
                col,
                self.height(),
                self.width(),
            ));
        }

        let offset = self.pixel_offset(row, col);
        Ok(rgb_from_slice(&self.as_slice()[offset..offset + 3]))
    }

    /// Set the color of the pixel at the given coordinate.
    ///
    /// # Errors
    ///
    /// If the coordinate is out of bounds, an error is returned.
    pub fn set_rgb(&mut self, row: usize, col: usize, color: Rgb) -> Result<(), ImageError> {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelIndexOutOfBounds(
                row,
                col,
                self.height(),
                self.width(),
            ));
        }

        let offset = self.pixel_offset(row, col);
        rgb_to_slice(&mut self.as_slice_mut()[offset..offset + 3], color);
        Ok(())
    }
}
