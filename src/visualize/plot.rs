extern crate plotters;

use std::path::Path;

use image_rs::{imageops::FilterType, RgbImage};
use plotters::prelude::*;

use super::{fit_within, resize_panel};

const PANEL_SIZE: u32 = 640;
const PANEL_MARGIN: u32 = 20;
const TITLE_FONT_SIZE: u32 = 28;

/// Writes a two panel PNG: `left` titled `left_title` next to `right` titled `right_title`.
/// Both images are scaled by the same factor to fit a panel.
pub fn draw_side_by_side(left: &RgbImage, right: &RgbImage, left_title: &str, right_title: &str, file_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = left.dimensions();
    let (panel_width, panel_height) = fit_within(width, height, PANEL_SIZE, PANEL_SIZE);

    let panels = [
        (left_title, resize_panel(left, panel_width, panel_height, FilterType::Triangle)),
        (right_title, resize_panel(right, panel_width, panel_height, FilterType::Nearest))
    ];

    let canvas_width = 2*(panel_width + 2*PANEL_MARGIN);
    let canvas_height = panel_height + 2*PANEL_MARGIN + 2*TITLE_FONT_SIZE;
    let root = BitMapBackend::new(file_path, (canvas_width, canvas_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let drawing_areas = root.split_evenly((1,2));

    for (drawing_area, (title, panel)) in drawing_areas.iter().zip(panels.iter()) {
        let titled = drawing_area.titled(title, ("sans-serif", f64::from(TITLE_FONT_SIZE)))?;
        let image_area = titled.margin(0, PANEL_MARGIN as i32, PANEL_MARGIN as i32, PANEL_MARGIN as i32);
        for (x, y, pixel) in panel.enumerate_pixels() {
            image_area.draw_pixel((x as i32, y as i32), &RGBColor(pixel[0], pixel[1], pixel[2]))?;
        }
    }

    root.present()?;
    Ok(())
}
