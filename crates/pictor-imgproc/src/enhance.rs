use std::ops::Range;

use pictor_image::{rgb_from_slice, rgb_to_slice, Image, ImageError, Rgb};

/// Overwrite region pixels that sit close to any reference color.
///
/// For every pixel inside the rectangular region, the color distance to each
/// reference color is compared against that color's threshold; a distance
/// strictly below the threshold replaces the pixel with `highlight`. Pixels
/// outside the region are untouched.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `row_range` - The rows of the region.
/// * `col_range` - The columns of the region.
/// * `references` - Reference colors with their per-color distance thresholds.
/// * `highlight` - The color written over matching pixels.
///
/// # Errors
///
/// Returns an error if the region falls outside the grid; the image is not
/// modified in that case.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize, Rgb};
/// use pictor_imgproc::enhance::highlight_region;
///
/// let mut image = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     0u8,
/// )
/// .unwrap();
///
/// highlight_region(&mut image, 0..2, 0..2, &[(Rgb::BLACK, 10.0)], Rgb::WHITE).unwrap();
///
/// assert_eq!(image.rgb_at(0, 0).unwrap(), Rgb::WHITE);
/// assert_eq!(image.rgb_at(3, 3).unwrap(), Rgb::BLACK);
/// ```
pub fn highlight_region(
    image: &mut Image<u8, 3>,
    row_range: Range<usize>,
    col_range: Range<usize>,
    references: &[(Rgb, f64)],
    highlight: Rgb,
) -> Result<(), ImageError> {
    if row_range.end > image.height() || col_range.end > image.width() {
        return Err(ImageError::RegionOutOfBounds(
            row_range.start,
            row_range.end,
            col_range.start,
            col_range.end,
            image.height(),
            image.width(),
        ));
    }

    let cols = image.cols();
    let data = image.as_slice_mut();

    for row in row_range {
        for col in col_range.clone() {
            let offset = (row * cols + col) * 3;
            let pixel = &mut data[offset..offset + 3];
            let color = rgb_from_slice(pixel);

            if references
                .iter()
                .any(|(reference, threshold)| color.distance(reference) < *threshold)
            {
                rgb_to_slice(pixel, highlight);
            }
        }
    }

    Ok(())
}
