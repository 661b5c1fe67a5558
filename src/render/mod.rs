// src/render/mod.rs
//! Геометрия и цвета для отрисовки доски
//!
//! Рендер — внешний потребитель сгенерированной доски. Он ничего не меняет в `Board`:
//! экранные координаты центров и вершин вычисляются на лету из `HexLayout`.
//!
//! ## Сетка
//!
//! Гексы «остриём вверх». Чётные строки начинаются у левого края, нечётные сдвинуты вправо
//! на половину ширины гекса. Вершина `i` гекса с центром `(x, y)` и радиусом `r` лежит в
//! `(x + r·sin(60°·i), y + r·cos(60°·i))`, так что ребро `i` соединяет вершины `i` и `i + 1`.

pub mod png;

use std::collections::BTreeMap;

use crate::config::RenderSettings;
use crate::terrain::{HarborResource, TerrainKind};

pub use png::{render_board, save_as_png};

const SQRT_3: f32 = 1.732_050_8;
const SQRT_3_OVER_2: f32 = SQRT_3 / 2.0;
const SIXTY_DEGREES: f32 = std::f32::consts::PI / 3.0;

pub type Point = (f32, f32);

/// Размещение сетки гексов на изображении
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    /// Радиус гекса (от центра до вершины) в пикселях
    pub radius: f32,
    /// Центр гекса (0, 0)
    pub origin: Point,
}

impl HexLayout {
    /// Подбирает максимальный радиус, при котором сетка `columns × rows` помещается
    /// в изображение, и центрирует сетку
    #[must_use]
    pub fn fit(columns: usize, rows: usize, settings: &RenderSettings) -> Self {
        let columns_f = columns.max(1) as f32;
        let rows_f = rows.max(1) as f32;
        let inner_width = settings.width as f32 - 2.0 * settings.padding;
        let inner_height = settings.height as f32 - 2.0 * settings.padding;

        let max_hex_width = if rows == 1 {
            inner_width / columns_f
        } else {
            2.0 * inner_width / (2.0 * columns_f + 1.0)
        };
        let max_hex_height = 4.0 * inner_height / (3.0 * rows_f + 1.0);
        let radius = (max_hex_width / SQRT_3).min(max_hex_height / 2.0).max(0.0);

        let (grid_width, grid_height) = grid_measures(columns, rows, radius);
        let left = settings.padding + (inner_width - grid_width) / 2.0;
        let top = settings.padding + (inner_height - grid_height) / 2.0;

        Self {
            radius,
            origin: (left + radius * SQRT_3_OVER_2, top + radius),
        }
    }

    /// Экранный центр гекса (`col`, `row`)
    #[must_use]
    pub fn center(&self, col: usize, row: usize) -> Point {
        let step = 2.0 * self.radius * SQRT_3_OVER_2;
        let shift = if row % 2 == 1 {
            self.radius * SQRT_3_OVER_2
        } else {
            0.0
        };
        (
            self.origin.0 + col as f32 * step + shift,
            self.origin.1 + row as f32 * 1.5 * self.radius,
        )
    }

    /// Шесть вершин гекса с центром `center`
    #[must_use]
    pub fn corners(&self, center: Point) -> [Point; 6] {
        std::array::from_fn(|i| {
            let angle = SIXTY_DEGREES * i as f32;
            (
                center.0 + self.radius * angle.sin(),
                center.1 + self.radius * angle.cos(),
            )
        })
    }

    /// Прямоугольник гавани: полоса от ребра `orientation` до середины гекса
    #[must_use]
    pub fn harbor_box(&self, center: Point, orientation: u8) -> [Point; 4] {
        let corners = self.corners(center);
        let side = usize::from(orientation % 6);
        let p1 = corners[side];
        let p2 = corners[(side + 1) % 6];
        let p3 = corners[(side + 3) % 6];
        let p4 = corners[(side + 4) % 6];
        [p1, p2, midpoint(p2, p3), midpoint(p1, p4)]
    }
}

/// Размер сетки `columns × rows` в пикселях при радиусе `radius`
#[must_use]
pub fn grid_measures(columns: usize, rows: usize, radius: f32) -> (f32, f32) {
    let columns_f = columns as f32;
    let width = if rows == 1 {
        radius * SQRT_3 * columns_f
    } else {
        radius * SQRT_3 * (2.0 * columns_f + 1.0) / 2.0
    };
    let height = (3.0 * rows as f32 + 1.0) / 2.0 * radius;
    (width, height)
}

fn midpoint(a: Point, b: Point) -> Point {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Вероятностный вес жетона: число комбинаций двух кубиков, дающих это значение
///
/// ```
/// assert_eq!(hexboard::render::pips(6), 5);
/// assert_eq!(hexboard::render::pips(12), 1);
/// ```
#[must_use]
pub fn pips(token: u8) -> u8 {
    6u8.saturating_sub(token.abs_diff(7))
}

/// Политика цветов: местность → заливка, ресурс гавани → оттенок, жетон → подсветка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub terrain: BTreeMap<TerrainKind, [u8; 4]>,
    pub harbor: BTreeMap<HarborResource, [u8; 4]>,
    /// Жетоны, которые выделяются цветом (по умолчанию самые частые броски: 6 и 8)
    pub highlighted_tokens: Vec<u8>,
    pub water: [u8; 4],
    pub token: [u8; 4],
    pub highlighted_token: [u8; 4],
    pub outline: [u8; 4],
}

impl Palette {
    /// Заливка клетки; клетки без местности (пустые и гавани) — вода
    #[must_use]
    pub fn terrain_color(&self, terrain: Option<TerrainKind>) -> [u8; 4] {
        terrain
            .and_then(|t| self.terrain.get(&t).copied())
            .unwrap_or(self.water)
    }

    #[must_use]
    pub fn harbor_color(&self, resource: HarborResource) -> [u8; 4] {
        self.harbor.get(&resource).copied().unwrap_or(self.water)
    }

    #[must_use]
    pub fn is_highlighted(&self, token: u8) -> bool {
        self.highlighted_tokens.contains(&token)
    }

    #[must_use]
    pub fn token_color(&self, token: u8) -> [u8; 4] {
        if self.is_highlighted(token) {
            self.highlighted_token
        } else {
            self.token
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let hills = [0xA4, 0x55, 0x3C, 255];
        let forest = [0x32, 0x6C, 0x42, 255];
        let mountains = [0x74, 0x77, 0x7F, 255];
        let fields = [0xCE, 0xA3, 0x22, 255];
        let pasture = [0x77, 0xB3, 0x36, 255];

        Self {
            terrain: BTreeMap::from([
                (TerrainKind::Hills, hills),
                (TerrainKind::Forest, forest),
                (TerrainKind::Mountains, mountains),
                (TerrainKind::Fields, fields),
                (TerrainKind::Pasture, pasture),
                (TerrainKind::Desert, [0xA0, 0x90, 0x55, 255]),
            ]),
            harbor: BTreeMap::from([
                (HarborResource::Brick, hills),
                (HarborResource::Lumber, forest),
                (HarborResource::Ore, mountains),
                (HarborResource::Grain, fields),
                (HarborResource::Wool, pasture),
                (HarborResource::Any, [0, 0, 0, 255]),
            ]),
            highlighted_tokens: vec![6, 8],
            water: [0xA8, 0xE0, 0xFF, 255],
            token: [255, 255, 255, 255],
            highlighted_token: [0xFF, 0xA8, 0xB5, 255],
            outline: [0, 0, 0, 255],
        }
    }
}
