use pictor_image::{rgb_to_slice, Image, ImageError, Rgb};

use crate::parallel;

/// Reconstruct a hidden binary image from red-channel parity.
///
/// Every pixel with an even red value becomes black, every other pixel
/// white. Note the asymmetry with [`encode_message`], which writes the green
/// channel: decoding an encoded cover means reading its green parities, not
/// running this pass on the cover directly.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize, Rgb};
/// use pictor_imgproc::stego::decode_message;
///
/// let mut image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![4u8, 200, 30, 7, 200, 30],
/// )
/// .unwrap();
///
/// decode_message(&mut image);
/// assert_eq!(image.rgb_at(0, 0).unwrap(), Rgb::BLACK);
/// assert_eq!(image.rgb_at(0, 1).unwrap(), Rgb::WHITE);
/// ```
pub fn decode_message(image: &mut Image<u8, 3>) {
    parallel::par_iter_pixels_mut(image, |_, _, pixel| {
        let color = if pixel[0] % 2 == 0 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        };
        rgb_to_slice(pixel, color);
    });
}

/// Hide a binary message in the green-channel parity of a cover image.
///
/// For every coordinate of `message`, a pure black message pixel forces the
/// cover's green channel even (incremented by 1 when odd); any other message
/// pixel forces it odd (decremented by 1 when even). At the channel extremes
/// the adjustment steps inward instead (255 becomes 254, 0 becomes 1) so the
/// value stays in range without breaking the parity. The ±1 perturbation is
/// visually negligible.
///
/// # Arguments
///
/// * `cover` - The cover image, modified in place.
/// * `message` - The black and white message; its dimensions must not exceed
///   the cover's.
///
/// # Errors
///
/// Returns an error if `message` is larger than `cover` in either dimension;
/// the cover is not modified in that case.
pub fn encode_message(cover: &mut Image<u8, 3>, message: &Image<u8, 3>) -> Result<(), ImageError> {
    if message.height() > cover.height() || message.width() > cover.width() {
        return Err(ImageError::InvalidDimensions(
            cover.cols(),
            cover.rows(),
            message.cols(),
            message.rows(),
        ));
    }

    let cols = cover.cols();
    let msg_cols = message.cols();
    let msg = message.as_slice();
    let data = cover.as_slice_mut();

    for r in 0..message.rows() {
        for c in 0..msg_cols {
            let m = (r * msg_cols + c) * 3;
            let is_black = msg[m] == 0 && msg[m + 1] == 0 && msg[m + 2] == 0;

            let green = &mut data[(r * cols + c) * 3 + 1];
            if is_black {
                if *green % 2 == 1 {
                    *green = if *green == 255 { 254 } else { *green + 1 };
                }
            } else if *green % 2 == 0 {
                *green = if *green == 0 { 1 } else { *green - 1 };
            }
        }
    }

    Ok(())
}
