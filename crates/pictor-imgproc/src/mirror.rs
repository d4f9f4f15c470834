use std::ops::Range;

use rayon::prelude::*;

use pictor_image::{Image, ImageError};

/// Mirror the left columns of every row across a vertical axis.
///
/// For each row, the pixel at column `c` in `[0, left_cols)` is copied to
/// column `axis_col - c`. Each row's source columns are buffered before the
/// first write, so the result is well defined even when the destination span
/// overlaps the source span.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `axis_col` - The column the reflection is centered on.
/// * `left_cols` - The number of leading columns to reflect.
///
/// # Errors
///
/// Returns an error if the reflected columns would fall outside the grid;
/// the image is not modified in that case.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize};
/// use pictor_imgproc::mirror::mirror_vertical;
///
/// let mut image = Image::<u8, 3>::new(
///     ImageSize { width: 3, height: 1 },
///     vec![1u8, 2, 3, 0, 0, 0, 0, 0, 0],
/// )
/// .unwrap();
///
/// mirror_vertical(&mut image, 2, 1).unwrap();
/// assert_eq!(image.as_slice(), &[1u8, 2, 3, 0, 0, 0, 1, 2, 3]);
/// ```
pub fn mirror_vertical(
    image: &mut Image<u8, 3>,
    axis_col: usize,
    left_cols: usize,
) -> Result<(), ImageError> {
    let rows = image.rows();
    let cols = image.cols();

    if axis_col >= cols || left_cols > axis_col + 1 {
        return Err(ImageError::RegionOutOfBounds(
            0,
            rows,
            0,
            axis_col + 1,
            rows,
            cols,
        ));
    }

    image
        .as_slice_mut()
        .par_chunks_exact_mut(3 * cols)
        .for_each(|row| {
            let src_row = row[..left_cols * 3].to_vec();
            for c in 0..left_cols {
                let dst = (axis_col - c) * 3;
                row[dst..dst + 3].copy_from_slice(&src_row[c * 3..c * 3 + 3]);
            }
        });

    Ok(())
}

/// Reflect the upper-left square block across its main diagonal.
///
/// With `n = min(height, width)`, the pixel at `(y, x)` is copied into
/// `(x, y)` for every `x` in `[0, n)` and `y` in `[x, n)`. Each unordered
/// pair is touched exactly once and the sources lie on or below the
/// diagonal, which is never written, so every read sees an original value.
///
/// # Example
///
/// ```
/// use pictor_image::{Image, ImageSize};
/// use pictor_imgproc::mirror::mirror_diagonal;
///
/// let mut image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![0u8, 1, 2, 3],
/// )
/// .unwrap();
///
/// mirror_diagonal(&mut image);
/// assert_eq!(image.as_slice(), &[0u8, 2, 2, 3]);
/// ```
pub fn mirror_diagonal<const C: usize>(image: &mut Image<u8, C>) {
    let n = image.rows().min(image.cols());
    let cols = image.cols();
    let data = image.as_slice_mut();

    for x in 0..n {
        for y in x..n {
            let src = (y * cols + x) * C;
            let dst = (x * cols + y) * C;
            data.copy_within(src..src + C, dst);
        }
    }
}

/// Mirror a rectangular sub-region across a vertical axis.
///
/// Generalizes [`mirror_vertical`] to an arbitrary region: for every row in
/// `row_range`, the pixel at column `c` in `col_range` is copied to column
/// `axis_col - c`. The source columns of each row are buffered before
/// writing.
///
/// # Errors
///
/// Returns an error if the region or any reflected destination column falls
/// outside the grid; the image is not modified in that case.
pub fn mirror_region(
    image: &mut Image<u8, 3>,
    row_range: Range<usize>,
    col_range: Range<usize>,
    axis_col: usize,
) -> Result<(), ImageError> {
    let rows = image.rows();
    let cols = image.cols();

    let dest_in_bounds = col_range.is_empty()
        || (axis_col + 1 >= col_range.end && axis_col - col_range.start < cols);
    if row_range.end > rows || col_range.end > cols || !dest_in_bounds {
        return Err(ImageError::RegionOutOfBounds(
            row_range.start,
            row_range.end,
            col_range.start,
            col_range.end,
            rows,
            cols,
        ));
    }

    let data = image.as_slice_mut();

    for r in row_range {
        let row = &mut data[r * cols * 3..(r + 1) * cols * 3];
        let src_row = row[col_range.start * 3..col_range.end * 3].to_vec();
        for c in col_range.clone() {
            let src = (c - col_range.start) * 3;
            let dst = (axis_col - c) * 3;
            row[dst..dst + 3].copy_from_slice(&src_row[src..src + 3]);
        }
    }

    Ok(())
}

/// Copy region rows to mapped destination rows, skipping an inner column band.
///
/// For every row `r` in `row_range` and column `c` in `col_range` outside
/// `exclude_cols`, the pixel at `(r, c)` is copied to `(row_map(r), c)`.
/// The mapped rows may overlap the source rows, so all reads go through a
/// snapshot taken before the first write.
///
/// # Arguments
///
/// * `image` - The image to modify in place.
/// * `row_range` - The source rows.
/// * `col_range` - The columns to copy.
/// * `row_map` - Maps each source row to its destination row.
/// * `exclude_cols` - An inner column band left untouched.
///
/// # Errors
///
/// Returns an error if the region or any mapped destination row falls
/// outside the grid. The mappings are checked over the whole row range
/// before the first write, so a failed call leaves the image unchanged.
pub fn mirror_rows_offset(
    image: &mut Image<u8, 3>,
    row_range: Range<usize>,
    col_range: Range<usize>,
    row_map: impl Fn(usize) -> usize,
    exclude_cols: Range<usize>,
) -> Result<(), ImageError> {
    let rows = image.rows();
    let cols = image.cols();

    if row_range.end > rows || col_range.end > cols {
        return Err(ImageError::RegionOutOfBounds(
            row_range.start,
            row_range.end,
            col_range.start,
            col_range.end,
            rows,
            cols,
        ));
    }
    for r in row_range.clone() {
        let dst_r = row_map(r);
        if dst_r >= rows {
            return Err(ImageError::RegionOutOfBounds(
                dst_r,
                dst_r + 1,
                col_range.start,
                col_range.end,
                rows,
                cols,
            ));
        }
    }

    let snapshot = image.clone();
    let src = snapshot.as_slice();
    let data = image.as_slice_mut();

    for r in row_range {
        let dst_r = row_map(r);
        for c in col_range.clone() {
            if exclude_cols.contains(&c) {
                continue;
            }
            let from = (r * cols + c) * 3;
            let to = (dst_r * cols + c) * 3;
            data[to..to + 3].copy_from_slice(&src[from..from + 3]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pictor_image::{Image, ImageError, ImageSize, Rgb};

    /// Image whose pixel (r, c) encodes its own coordinate.
    fn coordinate_image(width: usize, height: usize) -> Result<Image<u8, 3>, ImageError> {
        let mut data = Vec::with_capacity(width * height * 3);
        for r in 0..height {
            for c in 0..width {
                data.extend_from_slice(&[r as u8, c as u8, 0]);
            }
        }
        Image::new(ImageSize { width, height }, data)
    }

    #[test]
    fn vertical_produces_symmetry() -> Result<(), ImageError> {
        let mut image = coordinate_image(9, 3)?;
        super::mirror_vertical(&mut image, 8, 4)?;

        for r in 0..3 {
            for c in 0..4 {
                assert_eq!(image.rgb_at(r, 8 - c)?, Rgb::new(r as u8, c as u8, 0));
            }
            // middle column untouched
            assert_eq!(image.rgb_at(r, 4)?, Rgb::new(r as u8, 4, 0));
        }

        Ok(())
    }

    #[test]
    fn vertical_overlapping_axis_reads_originals() -> Result<(), ImageError> {
        // axis 3, left 4: destination columns 0..=3 overlap the source span
        let mut image = coordinate_image(5, 1)?;
        super::mirror_vertical(&mut image, 3, 4)?;

        for c in 0..4 {
            assert_eq!(image.rgb_at(0, 3 - c)?, Rgb::new(0, c as u8, 0));
        }

        Ok(())
    }

    #[test]
    fn vertical_rejects_axis_out_of_bounds() -> Result<(), ImageError> {
        let mut image = coordinate_image(4, 2)?;
        assert!(super::mirror_vertical(&mut image, 4, 1).is_err());
        assert!(super::mirror_vertical(&mut image, 2, 4).is_err());
        Ok(())
    }

    #[test]
    fn diagonal_reflects_square_block() -> Result<(), ImageError> {
        let original = coordinate_image(4, 6)?;
        let mut image = original.clone();
        super::mirror_diagonal(&mut image);

        // n = min(6, 4) = 4: within the block, (x, y) took the value of (y, x)
        for x in 0..4 {
            for y in x..4 {
                assert_eq!(image.rgb_at(x, y)?, original.rgb_at(y, x)?);
            }
        }
        // below the diagonal and outside the block nothing changed
        for x in 0..6 {
            for y in 0..4 {
                if x >= y {
                    assert_eq!(image.rgb_at(x, y)?, original.rgb_at(x, y)?);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn region_mirrors_sub_rectangle() -> Result<(), ImageError> {
        let original = coordinate_image(10, 5)?;
        let mut image = original.clone();
        super::mirror_region(&mut image, 1..3, 0..4, 9)?;

        for r in 1..3 {
            for c in 0..4 {
                assert_eq!(image.rgb_at(r, 9 - c)?, original.rgb_at(r, c)?);
            }
        }
        // rows outside the region untouched
        for c in 0..10 {
            assert_eq!(image.rgb_at(0, c)?, original.rgb_at(0, c)?);
            assert_eq!(image.rgb_at(4, c)?, original.rgb_at(4, c)?);
        }

        Ok(())
    }

    #[test]
    fn region_rejects_reflected_destination_out_of_bounds() -> Result<(), ImageError> {
        let mut image = coordinate_image(6, 3)?;
        let original = image.as_slice().to_vec();

        // axis 2 with columns 0..4 would reflect column 3 to column -1
        assert!(super::mirror_region(&mut image, 0..2, 0..4, 2).is_err());
        // axis 7 is outside a 6-column grid for column 0
        assert!(super::mirror_region(&mut image, 0..2, 0..4, 7).is_err());
        assert_eq!(image.as_slice(), &original[..]);

        Ok(())
    }

    #[test]
    fn rows_offset_duplicates_feature() -> Result<(), ImageError> {
        let original = coordinate_image(8, 10)?;
        let mut image = original.clone();

        // rows 2..4 reflected to rows 7 - r, skipping columns 4..6
        super::mirror_rows_offset(&mut image, 2..4, 2..7, |r| 7 - r, 4..6)?;

        for r in 2..4 {
            for c in 2..7 {
                let expected = if (4..6).contains(&c) {
                    original.rgb_at(7 - r, c)?
                } else {
                    original.rgb_at(r, c)?
                };
                assert_eq!(image.rgb_at(7 - r, c)?, expected);
            }
        }
        // source rows themselves untouched
        for c in 0..8 {
            assert_eq!(image.rgb_at(2, c)?, original.rgb_at(2, c)?);
            assert_eq!(image.rgb_at(3, c)?, original.rgb_at(3, c)?);
        }

        Ok(())
    }

    #[test]
    fn rows_offset_overlap_reads_snapshot() -> Result<(), ImageError> {
        // map r -> r + 1: row 1 is both a destination (of row 0) and a source;
        // row 2 must receive row 1's original value, not row 0's copy
        let original = coordinate_image(2, 4)?;
        let mut image = original.clone();

        super::mirror_rows_offset(&mut image, 0..2, 0..2, |r| r + 1, 0..0)?;

        assert_eq!(image.rgb_at(1, 0)?, original.rgb_at(0, 0)?);
        assert_eq!(image.rgb_at(2, 0)?, original.rgb_at(1, 0)?);
        assert_eq!(image.rgb_at(3, 0)?, original.rgb_at(3, 0)?);

        Ok(())
    }

    #[test]
    fn rows_offset_rejects_mapped_row_out_of_bounds() -> Result<(), ImageError> {
        let mut image = coordinate_image(4, 4)?;
        let original = image.as_slice().to_vec();

        let result = super::mirror_rows_offset(&mut image, 0..2, 0..4, |r| r + 3, 0..0);
        assert!(result.is_err());
        assert_eq!(image.as_slice(), &original[..]);

        Ok(())
    }
}
