// src/render/png.rs
//! Растеризация доски в PNG
//!
//! Каждая клетка рисуется залитым гексом с контуром. Жетон — круг с точками-«пипсами»
//! по числу комбинаций кубиков; самые частые броски подсвечены цветом палитры.
//! Гавань — полоса на своём ребре, окрашенная в цвет ресурса, и круг с точками по цене обмена.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point as PixelPoint;

use super::{HexLayout, Palette, Point, pips};
use crate::board::{Board, Tile};
use crate::config::RenderSettings;

/// Гексы меньше этого радиуса не рисуются: многоугольник вырождается
const MIN_RADIUS: f32 = 2.0;

/// Рисует доску на новом изображении размера `settings.width × settings.height`
#[must_use]
pub fn render_board(board: &Board, settings: &RenderSettings, palette: &Palette) -> RgbaImage {
    let background = Rgba([255, 255, 255, 255]);
    let mut img = RgbaImage::from_pixel(settings.width, settings.height, background);
    let layout = HexLayout::fit(board.width, board.height, settings);
    if layout.radius < MIN_RADIUS {
        log::warn!(
            "image {}×{} is too small for a {}×{} board",
            settings.width,
            settings.height,
            board.width,
            board.height
        );
        return img;
    }

    for tile in board.iter() {
        let (col, row) = tile.coordinates;
        draw_tile(&mut img, &layout, palette, tile, layout.center(col, row));
    }
    img
}

fn draw_tile(
    img: &mut RgbaImage,
    layout: &HexLayout,
    palette: &Palette,
    tile: &Tile,
    center: Point,
) {
    let outline = Rgba(palette.outline);
    let corners = layout.corners(center);
    fill_polygon(img, &corners, Rgba(palette.terrain_color(tile.terrain)));
    stroke_polygon(img, &corners, outline);

    let token_radius = layout.radius * 0.3;

    if let Some(token) = tile.number_token {
        let fill = Rgba(palette.token_color(token));
        draw_token(img, center, token_radius, fill, outline);
        draw_pips(img, center, layout.radius, pips(token), outline);
    }

    if let Some(harbor) = tile.harbor {
        let quad = layout.harbor_box(center, harbor.orientation);
        fill_polygon(img, &quad, Rgba(palette.harbor_color(harbor.resource)));
        stroke_polygon(img, &quad, outline);
        draw_token(img, center, token_radius, Rgba(palette.token), outline);
        draw_pips(img, center, layout.radius, harbor.cost, outline);
    }
}

fn fill_polygon(img: &mut RgbaImage, points: &[Point], color: Rgba<u8>) {
    let mut pixels: Vec<PixelPoint<i32>> = points
        .iter()
        .map(|&(x, y)| PixelPoint::new(x.round() as i32, y.round() as i32))
        .collect();
    pixels.dedup();
    // draw_polygon_mut паникует, если первая точка совпадает с последней
    while pixels.len() > 1 && pixels.first() == pixels.last() {
        pixels.pop();
    }
    if pixels.len() >= 3 {
        draw_polygon_mut(img, &pixels, color);
    }
}

fn stroke_polygon(img: &mut RgbaImage, points: &[Point], color: Rgba<u8>) {
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        draw_line_segment_mut(img, start, end, color);
    }
}

fn draw_token(
    img: &mut RgbaImage,
    center: Point,
    radius: f32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let c = (center.0.round() as i32, center.1.round() as i32);
    let r = radius.round() as i32;
    draw_filled_circle_mut(img, c, r, fill);
    draw_hollow_circle_mut(img, c, r, outline);
}

/// Ряд из `count` точек под центром гекса
fn draw_pips(img: &mut RgbaImage, center: Point, hex_radius: f32, count: u8, color: Rgba<u8>) {
    if count == 0 {
        return;
    }
    let spacing = hex_radius * 0.09;
    let dot = (hex_radius * 0.03).round().max(1.0) as i32;
    let first_x = center.0 - spacing * f32::from(count - 1) / 2.0;
    let y = (center.1 + hex_radius * 0.12).round() as i32;
    for i in 0..count {
        let x = (first_x + spacing * f32::from(i)).round() as i32;
        draw_filled_circle_mut(img, (x, y), dot, color);
    }
}

/// Рисует доску и сохраняет изображение в PNG-файл
///
/// # Ошибки
/// Возвращает ошибку, если файл невозможно записать.
pub fn save_as_png(
    board: &Board,
    settings: &RenderSettings,
    palette: &Palette,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let img = render_board(board, settings, palette);
    img.save(path)?;
    Ok(())
}
