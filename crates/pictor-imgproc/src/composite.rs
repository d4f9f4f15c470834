use std::ops::Range;

use rayon::prelude::*;

use pictor_image::{rgb_from_slice, Image, ImageError, Rgb};

/// Copy visually distinct region pixels to a horizontally mirrored location.
///
/// For every pixel `(r, c)` of the region not covered by the `exclude`
/// carve-out, the pixel is compared to its counterpart at column
/// `source_col_offset - c`. When the color distance exceeds `threshold`, the
/// counterpart is overwritten with the pixel's color; near-identical
/// (background) pixels are left untouched. All comparisons read a snapshot
/// taken before the first write.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `row_range` - The rows of the source region.
/// * `col_range` - The columns of the source region.
/// * `source_col_offset` - Maps column `c` to its counterpart `source_col_offset - c`.
/// * `exclude` - Carve-out predicate over `(row, col)`; matching pixels are skipped.
/// * `threshold` - The color distance above which the counterpart is overwritten.
///
/// # Errors
///
/// Returns an error if the region or any counterpart column falls outside
/// the grid; the image is not modified in that case.
pub fn copy_region_conditional(
    image: &mut Image<u8, 3>,
    row_range: Range<usize>,
    col_range: Range<usize>,
    source_col_offset: usize,
    exclude: impl Fn(usize, usize) -> bool,
    threshold: f64,
) -> Result<(), ImageError> {
    let rows = image.rows();
    let cols = image.cols();

    let counterpart_in_bounds = col_range.is_empty()
        || (source_col_offset + 1 >= col_range.end
            && source_col_offset - col_range.start < cols);
    if row_range.end > rows || col_range.end > cols || !counterpart_in_bounds {
        return Err(ImageError::RegionOutOfBounds(
            row_range.start,
            row_range.end,
            col_range.start,
            col_range.end,
            rows,
            cols,
        ));
    }

    let snapshot = image.clone();
    let src = snapshot.as_slice();
    let data = image.as_slice_mut();

    for r in row_range {
        for c in col_range.clone() {
            if exclude(r, c) {
                continue;
            }

            let here_off = (r * cols + c) * 3;
            let there_off = (r * cols + (source_col_offset - c)) * 3;
            let here = rgb_from_slice(&src[here_off..here_off + 3]);
            let there = rgb_from_slice(&src[there_off..there_off + 3]);

            if here.distance(&there) > threshold {
                data[there_off..there_off + 3].copy_from_slice(&src[here_off..here_off + 3]);
            }
        }
    }

    Ok(())
}

/// Replace key-colored pixels with the background's pixels.
///
/// For every pixel of `foreground` whose distance to any key color is
/// strictly below that key's threshold, the pixel is replaced with
/// `background`'s pixel at the same coordinate.
///
/// # Arguments
///
/// * `foreground` - The image to modify in place.
/// * `background` - The replacement source; its dimensions must be greater
///   than or equal to `foreground`'s.
/// * `keys` - Key colors with their per-color distance thresholds.
///
/// # Errors
///
/// Returns an error if `background` is smaller than `foreground` in either
/// dimension; the foreground is not modified in that case.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize, Rgb};
/// use pictor_imgproc::composite::chroma_key;
///
/// let mut foreground = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![0u8, 0, 255],
/// )
/// .unwrap();
/// let background = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![9u8, 9, 9],
/// )
/// .unwrap();
///
/// chroma_key(&mut foreground, &background, &[(Rgb::BLUE, 237.0)]).unwrap();
/// assert_eq!(foreground.as_slice(), &[9u8, 9, 9]);
/// ```
pub fn chroma_key(
    foreground: &mut Image<u8, 3>,
    background: &Image<u8, 3>,
    keys: &[(Rgb, f64)],
) -> Result<(), ImageError> {
    if background.height() < foreground.height() || background.width() < foreground.width() {
        return Err(ImageError::InvalidDimensions(
            background.cols(),
            background.rows(),
            foreground.cols(),
            foreground.rows(),
        ));
    }

    let cols = foreground.cols();
    let bg_cols = background.cols();
    let bg = background.as_slice();

    foreground
        .as_slice_mut()
        .par_chunks_exact_mut(3 * cols)
        .enumerate()
        .for_each(|(r, row)| {
            for c in 0..cols {
                let pixel = &mut row[c * 3..c * 3 + 3];
                let color = rgb_from_slice(pixel);

                if keys.iter().any(|(key, threshold)| color.distance(key) < *threshold) {
                    let bg_off = (r * bg_cols + c) * 3;
                    pixel.copy_from_slice(&bg[bg_off..bg_off + 3]);
                }
            }
        });

    Ok(())
}
