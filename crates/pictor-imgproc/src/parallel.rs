use rayon::prelude::*;

use pictor_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// Rows are processed on the global Rayon thread pool; within a row the
/// pixels are visited in column order. The closure receives the (row, col)
/// coordinate and the mutable channel slice of the pixel.
pub fn par_iter_pixels_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = image.cols();

    image
        .as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(row, row_chunk)| {
            row_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, pixel)| {
                    f(row, col, pixel);
                });
        });
}

/// Apply a function to each (source, destination) pixel pair in parallel.
///
/// Both images must have the same number of rows and columns.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    src.as_slice()
        .par_chunks_exact(C1 * src.cols())
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * src.cols()))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}
