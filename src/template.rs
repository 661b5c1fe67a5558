// src/template.rs
//! Шаблон доски
//!
//! Шаблон описывает один вариант доски целиком:
//! - маску размещения (какие клетки — суша, какие — гавани, какие пусты)
//! - количество гексов каждого типа местности
//! - мультимножество жетонов с числами
//! - спецификации гаваней (ресурс, цена обмена, количество)
//! - запасы карт ресурсов и карт развития (только для отображения, генератор их не использует)
//!
//! Шаблон неизменяем: генератор читает его, но никогда не модифицирует.
//!
//! ## Текстовая форма маски
//!
//! В TOML каждая строка маски записывается как строка токенов через пробел:
//! `.` или `0` — пусто, `L` или `1` — суша, `h0`..`h5` — гавань с ориентацией ребра.
//!
//! ```toml
//! mask = [
//!     ". h0 L h5",
//!     "h1 L L L",
//! ]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PoolKind, TemplateError};
use crate::terrain::{DevCardKind, HarborResource, Resource, TerrainKind};

/// Количество рёбер гекса, то есть допустимых ориентаций гавани
pub const HEX_EDGES: u8 = 6;

/// Клетка маски размещения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementCell {
    /// Не входит в доску
    #[default]
    Empty,
    /// Гекс суши: получает тип местности и (если не пустыня) жетон
    Land,
    /// Прибрежная клетка с гаванью, пристыкованной к ребру `orientation` (0..=5)
    Harbor { orientation: u8 },
}

impl PlacementCell {
    #[must_use]
    pub fn is_land(self) -> bool {
        matches!(self, PlacementCell::Land)
    }

    #[must_use]
    pub fn is_harbor(self) -> bool {
        matches!(self, PlacementCell::Harbor { .. })
    }

    /// `false` для гавани с ориентацией вне 0..=5
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            PlacementCell::Harbor { orientation } => orientation < HEX_EDGES,
            _ => true,
        }
    }
}

/// Жетон с числом: бросок двух кубиков 2..=12, кроме 7
#[must_use]
pub fn is_valid_token(value: u8) -> bool {
    (2..=12).contains(&value) && value != 7
}

impl FromStr for PlacementCell {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." | "0" => Ok(PlacementCell::Empty),
            "L" | "1" => Ok(PlacementCell::Land),
            _ => match s.as_bytes() {
                [b'h', digit @ b'0'..=b'5'] => Ok(PlacementCell::Harbor {
                    orientation: digit - b'0',
                }),
                _ => Err(TemplateError::InvalidCell(s.to_string())),
            },
        }
    }
}

impl fmt::Display for PlacementCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementCell::Empty => f.write_str("."),
            PlacementCell::Land => f.write_str("L"),
            PlacementCell::Harbor { orientation } => write!(f, "h{orientation}"),
        }
    }
}

/// Разбирает одну строку маски из токенов, разделённых пробелами
pub fn parse_mask_row(row: &str) -> Result<Vec<PlacementCell>, TemplateError> {
    row.split_whitespace().map(str::parse).collect()
}

/// (де)сериализация маски как списка строк токенов
mod mask_rows {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{PlacementCell, parse_mask_row};

    pub fn serialize<S: Serializer>(
        mask: &[Vec<PlacementCell>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> = mask
            .iter()
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<PlacementCell>>, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        rows.iter()
            .map(|row| parse_mask_row(row).map_err(serde::de::Error::custom))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainCount {
    pub terrain: TerrainKind,
    pub count: u32,
}

/// Гавани одного вида: ресурс, цена обмена (`cost`:1) и количество
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarborSpec {
    pub resource: HarborResource,
    pub cost: u8,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCardCount {
    pub resource: Resource,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevCardCount {
    pub card: DevCardKind,
    pub count: u32,
}

/// Неизменяемая спецификация одного варианта доски
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTemplate {
    /// Маска размещения; строки могут иметь разную длину
    #[serde(with = "mask_rows")]
    pub mask: Vec<Vec<PlacementCell>>,

    /// Количество гексов каждого типа (сумма = число клеток `Land`)
    pub terrain_counts: Vec<TerrainCount>,

    /// Значения жетонов (длина = число клеток `Land` минус число пустынь)
    pub token_values: Vec<u8>,

    /// Гавани (сумма количеств = число клеток `Harbor`); пусто, если вариант без гаваней
    #[serde(default)]
    pub harbor_specs: Vec<HarborSpec>,

    #[serde(default)]
    pub resource_cards: Vec<ResourceCardCount>,

    #[serde(default)]
    pub dev_cards: Vec<DevCardCount>,
}

impl BoardTemplate {
    /// Ширина сетки: длина самой длинной строки маски
    #[must_use]
    pub fn width(&self) -> usize {
        self.mask.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.mask.len()
    }

    /// Клетка маски; за пределами короткой строки клетка считается пустой
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> PlacementCell {
        self.mask
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or_default()
    }

    fn cells(&self) -> impl Iterator<Item = PlacementCell> + '_ {
        self.mask.iter().flatten().copied()
    }

    #[must_use]
    pub fn land_cell_count(&self) -> usize {
        self.cells().filter(|c| c.is_land()).count()
    }

    #[must_use]
    pub fn harbor_cell_count(&self) -> usize {
        self.cells().filter(|c| c.is_harbor()).count()
    }

    /// Общее число гексов местности по счётчикам
    #[must_use]
    pub fn terrain_total(&self) -> usize {
        self.terrain_counts.iter().map(|t| t.count as usize).sum()
    }

    #[must_use]
    pub fn desert_count(&self) -> usize {
        self.terrain_counts
            .iter()
            .filter(|t| t.terrain.is_desert())
            .map(|t| t.count as usize)
            .sum()
    }

    #[must_use]
    pub fn harbor_total(&self) -> usize {
        self.harbor_specs.iter().map(|h| h.count as usize).sum()
    }

    #[must_use]
    pub fn has_harbors(&self) -> bool {
        !self.harbor_specs.is_empty()
    }

    /// Проверяет клетки маски, значения жетонов и то, что счётчики шаблона сходятся с маской
    ///
    /// # Ошибки
    /// - `TemplateError::InvalidCell` для гавани с ориентацией вне 0..=5
    /// - `TemplateError::InvalidToken` для жетона вне 2..=12 или равного 7
    /// - `TemplateError::CountMismatch` для первого пула, который не сходится:
    ///   местность, затем жетоны, затем гавани
    pub fn validate(&self) -> Result<(), TemplateError> {
        if let Some(cell) = self.cells().find(|c| !c.is_valid()) {
            return Err(TemplateError::InvalidCell(cell.to_string()));
        }
        if let Some(&value) = self.token_values.iter().find(|&&v| !is_valid_token(v)) {
            return Err(TemplateError::InvalidToken(value));
        }

        let land = self.land_cell_count();
        let checks = [
            (PoolKind::Terrain, land, self.terrain_total()),
            (
                PoolKind::Tokens,
                land.saturating_sub(self.desert_count()),
                self.token_values.len(),
            ),
            (
                PoolKind::Harbors,
                self.harbor_cell_count(),
                self.harbor_total(),
            ),
        ];

        for (pool, expected, actual) in checks {
            if expected != actual {
                return Err(TemplateError::CountMismatch {
                    pool,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> BoardTemplate {
        BoardTemplate {
            mask: vec![
                parse_mask_row(". h0 L").unwrap(),
                parse_mask_row("L L").unwrap(),
            ],
            terrain_counts: vec![
                TerrainCount {
                    terrain: TerrainKind::Forest,
                    count: 2,
                },
                TerrainCount {
                    terrain: TerrainKind::Desert,
                    count: 1,
                },
            ],
            token_values: vec![5, 9],
            harbor_specs: vec![HarborSpec {
                resource: HarborResource::Any,
                cost: 3,
                count: 1,
            }],
            resource_cards: Vec::new(),
            dev_cards: Vec::new(),
        }
    }

    #[test]
    fn parses_cell_tokens() {
        assert_eq!(".".parse::<PlacementCell>(), Ok(PlacementCell::Empty));
        assert_eq!("0".parse::<PlacementCell>(), Ok(PlacementCell::Empty));
        assert_eq!("1".parse::<PlacementCell>(), Ok(PlacementCell::Land));
        assert_eq!(
            "h5".parse::<PlacementCell>(),
            Ok(PlacementCell::Harbor { orientation: 5 })
        );
        assert_eq!(
            "h6".parse::<PlacementCell>(),
            Err(TemplateError::InvalidCell("h6".to_string()))
        );
        assert!("x".parse::<PlacementCell>().is_err());
    }

    #[test]
    fn harbor_token_must_be_a_single_digit() {
        for token in ["h+5", "h05", "h", "h-1", "h10"] {
            assert_eq!(
                token.parse::<PlacementCell>(),
                Err(TemplateError::InvalidCell(token.to_string())),
                "{token}"
            );
        }
    }

    #[test]
    fn validate_rejects_out_of_range_orientation() {
        let mut template = tiny();
        template.mask[0][1] = PlacementCell::Harbor { orientation: 9 };
        assert_eq!(
            template.validate(),
            Err(TemplateError::InvalidCell("h9".to_string()))
        );
    }

    #[test]
    fn validate_rejects_impossible_token_values() {
        for bad in [7, 0, 1, 13] {
            let mut template = tiny();
            template.token_values[1] = bad;
            assert_eq!(template.validate(), Err(TemplateError::InvalidToken(bad)));
        }
    }

    #[test]
    fn display_is_parseable() {
        for cell in [
            PlacementCell::Empty,
            PlacementCell::Land,
            PlacementCell::Harbor { orientation: 3 },
        ] {
            assert_eq!(cell.to_string().parse::<PlacementCell>(), Ok(cell));
        }
    }

    #[test]
    fn jagged_rows_pad_with_empty() {
        let template = tiny();
        assert_eq!(template.width(), 3);
        assert_eq!(template.height(), 2);
        assert_eq!(template.cell(2, 1), PlacementCell::Empty);
        assert_eq!(template.cell(0, 7), PlacementCell::Empty);
        assert_eq!(template.land_cell_count(), 3);
        assert_eq!(template.harbor_cell_count(), 1);
    }

    #[test]
    fn validate_accepts_consistent_counts() {
        assert_eq!(tiny().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_token_mismatch() {
        let mut template = tiny();
        template.token_values.pop();
        assert_eq!(
            template.validate(),
            Err(TemplateError::CountMismatch {
                pool: PoolKind::Tokens,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn validate_reports_harbor_mismatch() {
        let mut template = tiny();
        template.harbor_specs.clear();
        assert!(!template.has_harbors());
        assert_eq!(
            template.validate(),
            Err(TemplateError::CountMismatch {
                pool: PoolKind::Harbors,
                expected: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn mask_serializes_as_token_rows() {
        let template = tiny();
        let text = toml::to_string(&template).unwrap();
        assert!(text.contains("\". h0 L\""));
        let back: BoardTemplate = toml::from_str(&text).unwrap();
        assert_eq!(back, template);
    }
}
