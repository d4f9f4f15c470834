//! The region bounds, axis columns and thresholds in these tests are the
//! calibration values for the photographs the operations were originally
//! tuned on, exercised here on synthetic grids of the same dimensions.

use pictor_image::{Image, ImageError, ImageSize, Rgb};
use pictor_imgproc::{composite, enhance, mirror};

/// Image whose pixel encodes its own (row, col) coordinate.
fn coordinate_image(width: usize, height: usize) -> Result<Image<u8, 3>, ImageError> {
    let mut data = Vec::with_capacity(width * height * 3);
    for r in 0..height {
        for c in 0..width {
            data.extend_from_slice(&[r as u8, (c % 256) as u8, (c / 256) as u8]);
        }
    }
    Image::new(ImageSize { width, height }, data)
}

#[test]
fn fish_highlighting_calibration() -> Result<(), ImageError> {
    let water = Rgb::new(40, 60, 80);
    let mut image = Image::<u8, 3>::from_size_val(
        ImageSize {
            width: 330,
            height: 165,
        },
        0u8,
    )?;
    for r in 0..165 {
        for c in 0..330 {
            image.set_rgb(r, c, water)?;
        }
    }

    // fish-colored pixels inside and outside the calibrated region
    image.set_rgb(20, 200, Rgb::new(13, 162, 193))?;
    image.set_rgb(80, 160, Rgb::new(18, 160, 161))?;
    image.set_rgb(160, 200, Rgb::new(13, 162, 193))?;

    let references = [
        (Rgb::new(12, 163, 194), 15.0),
        (Rgb::new(17, 159, 160), 10.0),
        (Rgb::new(19, 163, 174), 10.0),
    ];
    enhance::highlight_region(&mut image, 0..150, 150..330, &references, Rgb::WHITE)?;

    assert_eq!(image.rgb_at(20, 200)?, Rgb::WHITE);
    assert_eq!(image.rgb_at(80, 160)?, Rgb::WHITE);
    // below the region the fish color survives
    assert_eq!(image.rgb_at(160, 200)?, Rgb::new(13, 162, 193));
    // water is nowhere near the references
    assert_eq!(image.rgb_at(10, 200)?, water);

    Ok(())
}

#[test]
fn caterpillar_mirror_calibration() -> Result<(), ImageError> {
    let original = coordinate_image(329, 50)?;
    let mut image = original.clone();

    mirror::mirror_vertical(&mut image, 328, 164)?;

    for r in 0..50 {
        for c in 0..164 {
            assert_eq!(image.rgb_at(r, 328 - c)?, original.rgb_at(r, c)?);
        }
        // the middle column keeps its own value
        assert_eq!(image.rgb_at(r, 164)?, original.rgb_at(r, 164)?);
    }

    Ok(())
}

#[test]
fn temple_repair_calibration() -> Result<(), ImageError> {
    let original = coordinate_image(568, 100)?;
    let mut image = original.clone();

    mirror::mirror_region(&mut image, 0..97, 0..283, 567)?;

    for r in 0..97 {
        for c in 0..283 {
            assert_eq!(image.rgb_at(r, 567 - c)?, original.rgb_at(r, c)?);
        }
    }
    // rows below the repaired band are untouched
    for c in 0..568 {
        assert_eq!(image.rgb_at(99, c)?, original.rgb_at(99, c)?);
    }

    Ok(())
}

#[test]
fn snowman_arms_calibration() -> Result<(), ImageError> {
    let original = coordinate_image(300, 230)?;
    let mut image = original.clone();

    mirror::mirror_rows_offset(&mut image, 160..195, 100..295, |r| 225 - r + 160, 170..238)?;

    for r in 160..195 {
        let dst_r = 225 - r + 160;
        for c in 100..295 {
            if (170..238).contains(&c) {
                // the central gap keeps its original value
                assert_eq!(image.rgb_at(dst_r, c)?, original.rgb_at(dst_r, c)?);
            } else {
                assert_eq!(image.rgb_at(dst_r, c)?, original.rgb_at(r, c)?);
            }
        }
    }

    Ok(())
}

#[test]
fn gull_duplication_calibration() -> Result<(), ImageError> {
    let sand = Rgb::new(180, 170, 150);
    let gull = Rgb::new(90, 90, 95);
    let mut image = Image::<u8, 3>::from_size_val(
        ImageSize {
            width: 470,
            height: 330,
        },
        0u8,
    )?;
    for r in 0..330 {
        for c in 0..470 {
            image.set_rgb(r, c, sand)?;
        }
    }
    // the gull body inside the region, and a decoy inside the carve-out
    for r in 243..246 {
        for c in 250..260 {
            image.set_rgb(r, c, gull)?;
        }
    }
    image.set_rgb(250, 240, gull)?;

    composite::copy_region_conditional(
        &mut image,
        235..320,
        238..340,
        700,
        |r, c| (r > 246 && c < 248) || (r < 242 && c < 248),
        30.0,
    )?;

    // the gull was duplicated across the axis
    for r in 243..246 {
        for c in 250..260 {
            assert_eq!(image.rgb_at(r, 700 - c)?, gull);
        }
    }
    // sand stayed sand, and the carved-out decoy did not copy
    assert_eq!(image.rgb_at(240, 700 - 250)?, sand);
    assert_eq!(image.rgb_at(250, 700 - 240)?, sand);

    Ok(())
}

#[test]
fn blue_screen_calibration() -> Result<(), ImageError> {
    let mut foreground = Image::<u8, 3>::from_size_val(
        ImageSize {
            width: 4,
            height: 2,
        },
        0u8,
    )?;
    let subject = Rgb::new(255, 150, 50);
    foreground.set_rgb(0, 0, Rgb::BLUE)?;
    foreground.set_rgb(0, 1, Rgb::new(5, 5, 5))?;
    foreground.set_rgb(0, 2, subject)?;
    foreground.set_rgb(1, 3, Rgb::new(30, 40, 230))?;

    let background = coordinate_image(4, 2)?;

    composite::chroma_key(
        &mut foreground,
        &background,
        &[(Rgb::BLUE, 237.0), (Rgb::BLACK, 20.0)],
    )?;

    // pure blue, near-black and bluish pixels take the background
    assert_eq!(foreground.rgb_at(0, 0)?, background.rgb_at(0, 0)?);
    assert_eq!(foreground.rgb_at(0, 1)?, background.rgb_at(0, 1)?);
    assert_eq!(foreground.rgb_at(1, 3)?, background.rgb_at(1, 3)?);
    // the subject is outside both thresholds
    assert_eq!(foreground.rgb_at(0, 2)?, subject);

    Ok(())
}
