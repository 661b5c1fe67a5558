// src/board.rs
//! Сгенерированная доска
//!
//! `Board` — результат генерации: прямоугольная сетка `height × width` клеток `Tile`.
//! Клетки, не занятые сушей или гаванью, присутствуют как пустые заглушки:
//! рендеру нужны их позиции для смещений сетки.

use serde::{Deserialize, Serialize};

use crate::terrain::{HarborResource, TerrainKind};

/// Гавань, назначенная прибрежной клетке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Harbor {
    pub resource: HarborResource,
    /// Цена обмена: `cost` карт за одну
    pub cost: u8,
    /// Ребро гекса (0..=5), к которому пристыкована гавань; берётся из маски шаблона
    pub orientation: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Option<TerrainKind>,
    pub number_token: Option<u8>,
    /// (столбец, строка)
    pub coordinates: (usize, usize),
    pub harbor: Option<Harbor>,
}

impl Tile {
    /// Пустая клетка: ни суши, ни гавани
    #[must_use]
    pub fn empty(col: usize, row: usize) -> Self {
        Self {
            terrain: None,
            number_token: None,
            coordinates: (col, row),
            harbor: None,
        }
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.terrain.is_some()
    }

    #[must_use]
    pub fn is_harbor(&self) -> bool {
        self.harbor.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_land() && !self.is_harbor()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    /// Строки сетки сверху вниз, в каждой ровно `width` клеток
    pub tiles: Vec<Vec<Tile>>,
}

impl Board {
    #[must_use]
    pub fn tile(&self, col: usize, row: usize) -> Option<&Tile> {
        self.tiles.get(row).and_then(|cells| cells.get(col))
    }

    /// Все клетки в порядке строк
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    pub fn land_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.iter().filter(|t| t.is_land())
    }

    pub fn harbor_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.iter().filter(|t| t.is_harbor())
    }

    pub fn desert_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.iter()
            .filter(|t| t.terrain.is_some_and(TerrainKind::is_desert))
    }

    /// Сериализует доску в JSON для передачи внешнему движку или рендеру
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        let mut desert = Tile::empty(0, 0);
        desert.terrain = Some(TerrainKind::Desert);

        let mut forest = Tile::empty(1, 0);
        forest.terrain = Some(TerrainKind::Forest);
        forest.number_token = Some(8);

        let mut port = Tile::empty(0, 1);
        port.harbor = Some(Harbor {
            resource: HarborResource::Any,
            cost: 3,
            orientation: 2,
        });

        Board {
            width: 2,
            height: 2,
            tiles: vec![vec![desert, forest], vec![port, Tile::empty(1, 1)]],
        }
    }

    #[test]
    fn classifies_tiles() {
        let board = sample();
        assert_eq!(board.land_tiles().count(), 2);
        assert_eq!(board.harbor_tiles().count(), 1);
        assert_eq!(board.desert_tiles().count(), 1);
        assert!(board.tile(1, 1).is_some_and(Tile::is_empty));
        assert!(board.tile(2, 0).is_none());
    }

    #[test]
    fn json_export_keeps_coordinates() {
        let board = sample();
        let json = board.to_json().unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert!(json.contains("\"number_token\": 8"));
    }
}
