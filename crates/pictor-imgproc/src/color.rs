use pictor_image::{Channel, Image};

use crate::parallel;

/// Set the named channel to zero for every pixel.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `channel` - The channel to zero out.
pub fn zero_channel(image: &mut Image<u8, 3>, channel: Channel) {
    let idx = channel.index();

    parallel::par_iter_pixels_mut(image, |_, _, pixel| {
        pixel[idx] = 0;
    });
}

/// Keep only the named channel, setting the two others to zero.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `channel` - The channel to keep untouched.
pub fn keep_channel(image: &mut Image<u8, 3>, channel: Channel) {
    let idx = channel.index();

    parallel::par_iter_pixels_mut(image, |_, _, pixel| {
        for (i, value) in pixel.iter_mut().enumerate() {
            if i != idx {
                *value = 0;
            }
        }
    });
}

/// Replace every channel value `v` with `255 - v`.
///
/// Applying the operation twice restores the original image.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize};
/// use pictor_imgproc::color::invert;
///
/// let mut image = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![10u8, 20, 30],
/// )
/// .unwrap();
///
/// invert(&mut image);
/// assert_eq!(image.as_slice(), &[245u8, 235, 225]);
/// ```
pub fn invert(image: &mut Image<u8, 3>) {
    parallel::par_iter_pixels_mut(image, |_, _, pixel| {
        for value in pixel.iter_mut() {
            *value = 255 - *value;
        }
    });
}

/// Set all three channels to the rounded mean of the original triple.
///
/// The mean is rounded to the nearest integer, half away from zero.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize};
/// use pictor_imgproc::color::grayscale;
///
/// let mut image = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![1u8, 2, 2],
/// )
/// .unwrap();
///
/// grayscale(&mut image);
/// // mean 5/3 rounds up to 2
/// assert_eq!(image.as_slice(), &[2u8, 2, 2]);
/// ```
pub fn grayscale(image: &mut Image<u8, 3>) {
    parallel::par_iter_pixels_mut(image, |_, _, pixel| {
        let sum = pixel[0] as f64 + pixel[1] as f64 + pixel[2] as f64;
        // mean of three u8 stays within [0, 255], the cast cannot overflow
        let average = (sum / 3.0).round() as u8;
        pixel[0] = average;
        pixel[1] = average;
        pixel[2] = average;
    });
}
