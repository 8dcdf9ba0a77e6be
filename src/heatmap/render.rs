//! PNG bar chart drawing

use image::{Rgb, RgbImage};

use super::load::{peak, DailyLoad};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 500;
const MARGIN: u32 = 40;
const BAR_FILL: f64 = 0.8;
const MAX_GRID_LINES: usize = 10;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0x33, 0x33, 0x33]);
const GRID: Rgb<u8> = Rgb([0xe0, 0xe0, 0xe0]);

/// Light yellow for quiet days through orange to red for the busiest one
const GRADIENT: [[u8; 3]; 3] = [[0xff, 0xff, 0xcc], [0xff, 0xcc, 0x66], [0xff, 0x33, 0x00]];

/// Colour for a day at `fraction` of the peak load (clamped to 0..=1)
pub fn load_color(fraction: f64) -> Rgb<u8> {
    let t = fraction.clamp(0.0, 1.0) * (GRADIENT.len() - 1) as f64;
    let lower = (t.floor() as usize).min(GRADIENT.len() - 2);
    let local = t - lower as f64;

    let (a, b) = (GRADIENT[lower], GRADIENT[lower + 1]);
    let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * local).round() as u8;
    Rgb([mix(0), mix(1), mix(2)])
}

/// Draw one bar per day, scaled so the busiest day fills the plot height
pub fn draw(loads: &[DailyLoad]) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let left = MARGIN;
    let right = WIDTH - MARGIN;
    let top = MARGIN;
    let bottom = HEIGHT - MARGIN;
    let plot_height = (bottom - top) as f64;

    let max = peak(loads);
    if max == 0 {
        hline(&mut img, left, right, bottom, AXIS);
        return img;
    }

    // one grid line per task level, thinned out for busy plans
    let grid_step = max.div_ceil(MAX_GRID_LINES).max(1);
    for level in (grid_step..=max).step_by(grid_step) {
        let y = bottom - (level as f64 / max as f64 * plot_height).round() as u32;
        hline(&mut img, left, right, y, GRID);
    }

    let slot = (right - left) as f64 / loads.len() as f64;
    for (i, load) in loads.iter().enumerate() {
        if load.count == 0 {
            continue;
        }
        let fraction = load.count as f64 / max as f64;
        let x0 = left + (i as f64 * slot + slot * (1.0 - BAR_FILL) / 2.0).round() as u32;
        let x1 = (x0 + (slot * BAR_FILL).round().max(1.0) as u32).min(right);
        let y0 = bottom - (fraction * plot_height).round() as u32;

        let color = load_color(fraction);
        for x in x0..x1 {
            for y in y0..bottom {
                img.put_pixel(x, y, color);
            }
        }
    }

    hline(&mut img, left, right, bottom, AXIS);
    img
}

fn hline(img: &mut RgbImage, x0: u32, x1: u32, y: u32, color: Rgb<u8>) {
    for x in x0..x1 {
        img.put_pixel(x, y, color);
    }
}
