use rayon::prelude::*;

use pictor_image::{rgb_from_slice, rgb_to_slice, Image, Rgb};

/// Binarize the image into an edge map.
///
/// The grid is cloned into an immutable snapshot before any write, so the
/// comparisons never observe the pass's own output. Every pixel with both a
/// right and a below neighbor is compared against them in the snapshot: if
/// either color distance exceeds `threshold` the pixel becomes black,
/// otherwise white. The last row and last column have no neighbor to compare
/// against and keep their original values.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `threshold` - The color distance above which a pixel counts as an edge.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize, Rgb};
/// use pictor_imgproc::edges::edge_map;
///
/// let mut image = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 3, height: 3 },
///     128u8,
/// )
/// .unwrap();
///
/// edge_map(&mut image, 15.0);
///
/// // uniform image: no edges, interior turns white
/// assert_eq!(image.rgb_at(0, 0).unwrap(), Rgb::WHITE);
/// // the last row and column keep their original values
/// assert_eq!(image.rgb_at(2, 2).unwrap(), Rgb::new(128, 128, 128));
/// ```
pub fn edge_map(image: &mut Image<u8, 3>, threshold: f64) {
    let rows = image.rows();
    let cols = image.cols();
    if rows < 2 || cols < 2 {
        return;
    }

    let snapshot = image.clone();
    let src = snapshot.as_slice();

    image
        .as_slice_mut()
        .par_chunks_exact_mut(3 * cols)
        .enumerate()
        .for_each(|(row, row_chunk)| {
            if row + 1 == rows {
                return;
            }

            for col in 0..cols - 1 {
                let offset = (row * cols + col) * 3;
                let here = rgb_from_slice(&src[offset..offset + 3]);
                let right = rgb_from_slice(&src[offset + 3..offset + 6]);

                let below_offset = ((row + 1) * cols + col) * 3;
                let below = rgb_from_slice(&src[below_offset..below_offset + 3]);

                let color = if here.distance(&right) > threshold
                    || here.distance(&below) > threshold
                {
                    Rgb::BLACK
                } else {
                    Rgb::WHITE
                };
                rgb_to_slice(&mut row_chunk[col * 3..col * 3 + 3], color);
            }
        });
}
