//! Gaussian blur for premultiplied ARGB32 surfaces.
//!
//! Approximates a Gaussian of standard deviation `sigma` with three box blur
//! passes. Each pass runs horizontally then vertically with a running sum, so
//! the cost does not depend on the radius. Edges are extended (the border
//! pixel repeats outward).

/// Number of box passes used to approximate the Gaussian.
const PASSES: usize = 3;

/// Bytes per ARGB32 pixel.
const BPP: usize = 4;

/// Blurs premultiplied ARGB32 pixel data in place.
///
/// # Arguments
/// * `data` - Raw surface bytes (as returned by `ImageSurface::data`)
/// * `width` - Surface width in pixels
/// * `height` - Surface height in pixels
/// * `stride` - Bytes per row (may exceed `width * 4`)
/// * `sigma` - Standard deviation of the Gaussian in pixels; `<= 0` is a no-op
pub fn gaussian_blur(data: &mut [u8], width: usize, height: usize, stride: usize, sigma: f64) {
    if width == 0 || height == 0 || sigma <= 0.0 {
        return;
    }
    debug_assert!(stride >= width * BPP);
    debug_assert!(data.len() >= stride * (height - 1) + width * BPP);

    let mut line = vec![0u8; width.max(height) * BPP];
    for size in box_sizes(sigma, PASSES) {
        let radius = (size - 1) / 2;
        if radius == 0 {
            continue;
        }
        for y in 0..height {
            blur_line(data, y * stride, BPP, width, radius, &mut line);
        }
        for x in 0..width {
            blur_line(data, x * BPP, stride, height, radius, &mut line);
        }
    }
}

/// Odd box widths whose successive application approximates a Gaussian.
///
/// The ideal width is `sqrt(12 * sigma^2 / n + 1)`; the first `m` passes use
/// the odd width just below it and the rest the next odd width up, with `m`
/// chosen so the summed variance matches `sigma^2`.
pub fn box_sizes(sigma: f64, passes: usize) -> Vec<usize> {
    let n = passes as f64;
    let ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut lower = ideal.floor().max(1.0) as usize;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let upper = lower + 2;
    let wl = lower as f64;
    let m_ideal = (12.0 * sigma * sigma - n * wl * wl - 4.0 * n * wl - 3.0 * n) / (-4.0 * wl - 4.0);
    let m = m_ideal.round().clamp(0.0, n) as usize;

    (0..passes)
        .map(|i| if i < m { lower } else { upper })
        .collect()
}

/// Box-blurs one row or column.
///
/// Pixel `i` of the line starts at byte `start + i * step`. The line is first
/// copied to `scratch` so the running sum reads unmodified input.
fn blur_line(
    data: &mut [u8],
    start: usize,
    step: usize,
    len: usize,
    radius: usize,
    scratch: &mut [u8],
) {
    for i in 0..len {
        let src = start + i * step;
        scratch[i * BPP..(i + 1) * BPP].copy_from_slice(&data[src..src + BPP]);
    }

    let window = (2 * radius + 1) as u32;
    let last = (len - 1) as isize;
    let offset = |i: isize| i.clamp(0, last) as usize * BPP;
    let radius = radius as isize;

    let mut sums = [0u32; BPP];
    for k in -radius..=radius {
        let p = offset(k);
        for (c, sum) in sums.iter_mut().enumerate() {
            *sum += scratch[p + c] as u32;
        }
    }

    for i in 0..len {
        let dst = start + i * step;
        for (c, sum) in sums.iter().enumerate() {
            data[dst + c] = ((sum + window / 2) / window) as u8;
        }
        let leaving = offset(i as isize - radius);
        let entering = offset(i as isize + radius + 1);
        for (c, sum) in sums.iter_mut().enumerate() {
            *sum = *sum + scratch[entering + c] as u32 - scratch[leaving + c] as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, px: [u8; 4]) -> Vec<u8> {
        px.iter().copied().cycle().take(width * height * BPP).collect()
    }

    #[test]
    fn box_sizes_are_odd_and_close_to_ideal() {
        for sigma in [0.5, 1.0, 3.0, 40.0, 60.0, 120.0, 140.0] {
            let sizes = box_sizes(sigma, PASSES);
            assert_eq!(sizes.len(), PASSES);
            assert!(sizes.iter().all(|s| s % 2 == 1), "{sigma}: {sizes:?}");
            let variance: f64 = sizes
                .iter()
                .map(|&w| ((w * w) as f64 - 1.0) / 12.0)
                .sum();
            let expected = sigma * sigma;
            assert!(
                (variance - expected).abs() <= expected.max(1.0) * 0.35,
                "sigma {sigma}: variance {variance} vs {expected}"
            );
        }
    }

    #[test]
    fn zero_sigma_is_identity() {
        let mut data: Vec<u8> = (0..6 * 4 * BPP).map(|i| (i * 31 % 256) as u8).collect();
        let original = data.clone();
        gaussian_blur(&mut data, 6, 4, 6 * BPP, 0.0);
        assert_eq!(data, original);
    }

    #[test]
    fn constant_image_stays_constant() {
        let px = [40, 80, 120, 200];
        let mut data = solid(9, 7, px);
        gaussian_blur(&mut data, 9, 7, 9 * BPP, 5.0);
        assert!(data.chunks(BPP).all(|p| p == px));
    }

    #[test]
    fn single_pixel_spreads_symmetrically() {
        let (w, h) = (41, 41);
        let mut data = vec![0u8; w * h * BPP];
        let center = (20 * w + 20) * BPP;
        data[center..center + BPP].copy_from_slice(&[255, 255, 255, 255]);

        gaussian_blur(&mut data, w, h, w * BPP, 2.0);

        let alpha = |x: usize, y: usize| data[(y * w + x) * BPP + 3];
        assert!(alpha(20, 20) < 255);
        assert!(alpha(20, 20) > 0);
        assert_eq!(alpha(18, 20), alpha(22, 20));
        assert_eq!(alpha(20, 18), alpha(20, 22));
        assert_eq!(alpha(0, 0), 0);
    }

    #[test]
    fn respects_row_stride_padding() {
        let (w, h, stride) = (3, 3, 16);
        let mut data = vec![0xAAu8; stride * h];
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * BPP;
                data[i..i + BPP].copy_from_slice(&[10, 10, 10, 10]);
            }
        }
        gaussian_blur(&mut data, w, h, stride, 3.0);
        for y in 0..h {
            assert_eq!(&data[y * stride + w * BPP..(y + 1) * stride], &[0xAA; 4]);
        }
    }

    #[test]
    fn keeps_premultiplied_channels_within_alpha() {
        let (w, h) = (20, 10);
        let mut data = vec![0u8; w * h * BPP];
        for y in 3..7 {
            for x in 5..15 {
                let i = (y * w + x) * BPP;
                // Cairo ARGB32 on little endian: B, G, R, A
                data[i..i + BPP].copy_from_slice(&[56, 71, 84, 100]);
            }
        }
        gaussian_blur(&mut data, w, h, w * BPP, 4.0);
        for px in data.chunks(BPP) {
            assert!(px[0] <= px[3] && px[1] <= px[3] && px[2] <= px[3]);
        }
    }
}
