use pictor_image::{rgb_to_slice, Image, Rgb};

use crate::parallel;

/// Radius- and quadrant-conditioned combination of the channel primitives.
///
/// Every pixel outside `radius` (Euclidean distance of the pixel coordinate
/// from the center, boundary inclusive) is set to white. Inside the radius
/// the grid is split into four quadrants relative to the center, with rows
/// and columns equal to the center counting toward the top and left:
///
/// * top-left keeps only red,
/// * top-right keeps only green,
/// * bottom-left keeps only blue,
/// * bottom-right inverts all three channels.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize, Rgb};
/// use pictor_imgproc::stylize::quadrant_filter;
///
/// let mut image = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 5, height: 5 },
///     100u8,
/// )
/// .unwrap();
///
/// quadrant_filter(&mut image, 2, 2, 2.0);
///
/// assert_eq!(image.rgb_at(1, 1).unwrap(), Rgb::new(100, 0, 0));
/// assert_eq!(image.rgb_at(0, 0).unwrap(), Rgb::WHITE);
/// ```
pub fn quadrant_filter(image: &mut Image<u8, 3>, center_row: usize, center_col: usize, radius: f64) {
    parallel::par_iter_pixels_mut(image, |row, col, pixel| {
        let dr = row as f64 - center_row as f64;
        let dc = col as f64 - center_col as f64;
        let distance = (dr * dr + dc * dc).sqrt();

        if distance > radius {
            rgb_to_slice(pixel, Rgb::WHITE);
            return;
        }

        match (row <= center_row, col <= center_col) {
            (true, true) => {
                pixel[1] = 0;
                pixel[2] = 0;
            }
            (true, false) => {
                pixel[0] = 0;
                pixel[2] = 0;
            }
            (false, true) => {
                pixel[0] = 0;
                pixel[1] = 0;
            }
            (false, false) => {
                for value in pixel.iter_mut() {
                    *value = 255 - *value;
                }
            }
        }
    });
}
