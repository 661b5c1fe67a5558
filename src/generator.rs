// src/generator.rs
//! Генератор доски
//!
//! Форма доски детерминирована шаблоном, содержимое — случайно.
//!
//! ## Алгоритм
//!
//! 1. Размеры сетки: `width` — длина самой длинной строки маски, `height` — число строк.
//! 2. Три независимых пула (местность, жетоны, гавани) разворачиваются из счётчиков шаблона
//!    по одному элементу на единицу количества и перемешиваются тасованием Фишера–Йетса
//!    (`SliceRandom::shuffle`): все перестановки равновероятны.
//! 3. Маска обходится построчно (строки сверху вниз, столбцы слева направо):
//!    - `Land` берёт тип местности; если это не пустыня, берёт ещё и жетон
//!    - `Harbor` берёт гавань и получает ориентацию из маски
//!    - остальные клетки остаются пустыми
//! 4. Каждый пул должен быть израсходован ровно до конца. Нехватка элементов — `PoolExhausted`,
//!    остаток после обхода — `LeftoverItems`. Частично заполненная доска не возвращается.
//!
//! Генератор не хранит состояния между вызовами: каждый вызов заводит свои пулы и свою доску.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Harbor, Tile};
use crate::error::{BoardError, PoolKind, TemplateError};
use crate::template::{BoardTemplate, HEX_EDGES, PlacementCell};
use crate::terrain::{HarborResource, TerrainKind};

/// Перемешанный пул, из которого каждый элемент выдаётся ровно один раз
struct Pool<T> {
    kind: PoolKind,
    items: std::vec::IntoIter<T>,
}

impl<T> Pool<T> {
    fn shuffled<R: Rng + ?Sized>(kind: PoolKind, mut items: Vec<T>, rng: &mut R) -> Self {
        items.shuffle(rng);
        Self {
            kind,
            items: items.into_iter(),
        }
    }

    fn draw(&mut self) -> Result<T, TemplateError> {
        self.items
            .next()
            .ok_or(TemplateError::PoolExhausted { pool: self.kind })
    }

    fn finish(self) -> Result<(), TemplateError> {
        match self.items.len() {
            0 => Ok(()),
            remaining => Err(TemplateError::LeftoverItems {
                pool: self.kind,
                remaining,
            }),
        }
    }
}

fn terrain_pool(template: &BoardTemplate) -> Vec<TerrainKind> {
    template
        .terrain_counts
        .iter()
        .flat_map(|t| std::iter::repeat(t.terrain).take(t.count as usize))
        .collect()
}

fn harbor_pool(template: &BoardTemplate) -> Vec<(HarborResource, u8)> {
    template
        .harbor_specs
        .iter()
        .flat_map(|h| std::iter::repeat((h.resource, h.cost)).take(h.count as usize))
        .collect()
}

/// Генерирует доску по шаблону, используя переданный источник случайности
///
/// # Ошибки
/// `BoardError::MalformedTemplate`, если счётчики шаблона не сходятся с маской
/// или в маске есть гавань с ориентацией вне 0..=5.
pub fn generate<R: Rng + ?Sized>(
    template: &BoardTemplate,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let width = template.width();
    let height = template.height();

    let mut terrain = Pool::shuffled(PoolKind::Terrain, terrain_pool(template), rng);
    let mut tokens = Pool::shuffled(PoolKind::Tokens, template.token_values.clone(), rng);
    let mut harbors = Pool::shuffled(PoolKind::Harbors, harbor_pool(template), rng);

    log::debug!(
        "generating {width}×{height} board: {} terrain, {} tokens, {} harbors",
        terrain.items.len(),
        tokens.items.len(),
        harbors.items.len()
    );

    let mut tiles = Vec::with_capacity(height);
    for row in 0..height {
        let mut cells = Vec::with_capacity(width);
        for col in 0..width {
            let mut tile = Tile::empty(col, row);
            match template.cell(col, row) {
                PlacementCell::Land => {
                    let kind = terrain.draw()?;
                    if !kind.is_desert() {
                        tile.number_token = Some(tokens.draw()?);
                    }
                    tile.terrain = Some(kind);
                }
                cell @ PlacementCell::Harbor { orientation } => {
                    if orientation >= HEX_EDGES {
                        return Err(TemplateError::InvalidCell(cell.to_string()).into());
                    }
                    let (resource, cost) = harbors.draw()?;
                    tile.harbor = Some(Harbor {
                        resource,
                        cost,
                        orientation,
                    });
                }
                PlacementCell::Empty => {}
            }
            cells.push(tile);
        }
        tiles.push(cells);
    }

    terrain.finish()?;
    tokens.finish()?;
    harbors.finish()?;

    Ok(Board {
        width,
        height,
        tiles,
    })
}

/// Генерирует доску с потоковым генератором случайных чисел текущего потока
pub fn generate_board(template: &BoardTemplate) -> Result<Board, BoardError> {
    generate(template, &mut rand::thread_rng())
}

/// Воспроизводимая генерация: один и тот же сид даёт одну и ту же доску
pub fn generate_seeded(template: &BoardTemplate, seed: u64) -> Result<Board, BoardError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(template, &mut rng)
}

/// Сид `index`-й доски пакета
fn batch_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Генерирует `count` независимых досок; доска `i` получает собственный сид, выведенный из `seed`
///
/// С фичей `parallel` доски генерируются в пуле потоков rayon. Результат от этого не зависит.
pub fn generate_batch(
    template: &BoardTemplate,
    seed: u64,
    count: usize,
) -> Result<Vec<Board>, BoardError> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..count)
            .into_par_iter()
            .map(|i| generate_seeded(template, batch_seed(seed, i)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..count)
            .map(|i| generate_seeded(template, batch_seed(seed, i)))
            .collect()
    }
}
