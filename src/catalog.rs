// src/catalog.rs
//! Каталог шаблонов досок
//!
//! Статические данные для каждого поддерживаемого варианта игры:
//! - `Base34` — базовая доска на 3–4 игрока (19 гексов, 9 гаваней)
//! - `Base56` — расширенная доска на 5–6 игроков (30 гексов, 11 гаваней)
//!
//! Каталог не содержит логики, кроме поиска: никаких побочных эффектов, случайности и ввода-вывода.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::template::{
    BoardTemplate, DevCardCount, HarborSpec, PlacementCell, ResourceCardCount, TerrainCount,
};
use crate::terrain::{DevCardKind, HarborResource, Resource, TerrainKind};

/// Вариант доски
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameVariant {
    /// 3–4 игрока
    #[default]
    #[serde(rename = "BASE_3_4")]
    Base34,
    /// 5–6 игроков
    #[serde(rename = "BASE_5_6")]
    Base56,
}

impl GameVariant {
    pub const ALL: [GameVariant; 2] = [GameVariant::Base34, GameVariant::Base56];

    /// Внешнее имя варианта
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameVariant::Base34 => "BASE_3_4",
            GameVariant::Base56 => "BASE_5_6",
        }
    }

    /// Статический шаблон этого варианта
    #[must_use]
    pub fn template(self) -> BoardTemplate {
        match self {
            GameVariant::Base34 => base_3_4(),
            GameVariant::Base56 => base_5_6(),
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameVariant {
    type Err = BoardError;

    /// ```
    /// use hexboard::catalog::GameVariant;
    /// assert_eq!("BASE_5_6".parse::<GameVariant>().unwrap(), GameVariant::Base56);
    /// assert!("BASE_7_8".parse::<GameVariant>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameVariant::ALL
            .into_iter()
            .find(|variant| variant.name() == s.trim())
            .ok_or_else(|| BoardError::UnknownVariant(s.to_string()))
    }
}

/// Шаблон по варианту
#[must_use]
pub fn template(variant: GameVariant) -> BoardTemplate {
    variant.template()
}

/// Шаблон по внешнему имени варианта (`BASE_3_4`, `BASE_5_6`)
pub fn template_by_name(name: &str) -> Result<BoardTemplate, BoardError> {
    name.parse::<GameVariant>().map(GameVariant::template)
}

const E: PlacementCell = PlacementCell::Empty;
const L: PlacementCell = PlacementCell::Land;

const fn h(orientation: u8) -> PlacementCell {
    PlacementCell::Harbor { orientation }
}

fn terrain(counts: [(TerrainKind, u32); 6]) -> Vec<TerrainCount> {
    counts
        .into_iter()
        .map(|(terrain, count)| TerrainCount { terrain, count })
        .collect()
}

/// Одна универсальная гавань 3:1 (`any_count` штук) плюс специализированные 2:1
fn harbors(any_count: u32, specific: [(Resource, u32); 5]) -> Vec<HarborSpec> {
    std::iter::once(HarborSpec {
        resource: HarborResource::Any,
        cost: 3,
        count: any_count,
    })
    .chain(specific.into_iter().map(|(resource, count)| HarborSpec {
        resource: resource.into(),
        cost: 2,
        count,
    }))
    .collect()
}

fn resource_cards(each: u32) -> Vec<ResourceCardCount> {
    Resource::ALL
        .into_iter()
        .map(|resource| ResourceCardCount {
            resource,
            count: each,
        })
        .collect()
}

fn dev_cards(counts: [(DevCardKind, u32); 5]) -> Vec<DevCardCount> {
    counts
        .into_iter()
        .map(|(card, count)| DevCardCount { card, count })
        .collect()
}

fn base_3_4() -> BoardTemplate {
    BoardTemplate {
        mask: vec![
            vec![E, E, h(0), E, h(5), E, E],
            vec![E, E, L, L, L, h(5), E],
            vec![E, h(1), L, L, L, L, E],
            vec![E, L, L, L, L, L, h(4)],
            vec![E, h(1), L, L, L, L, E],
            vec![E, E, L, L, L, h(3), E],
            vec![E, E, h(2), E, h(3), E, E],
        ],
        terrain_counts: terrain([
            (TerrainKind::Hills, 3),
            (TerrainKind::Forest, 4),
            (TerrainKind::Mountains, 3),
            (TerrainKind::Fields, 4),
            (TerrainKind::Pasture, 4),
            (TerrainKind::Desert, 1),
        ]),
        token_values: vec![2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12],
        harbor_specs: harbors(
            4,
            [
                (Resource::Lumber, 1),
                (Resource::Brick, 1),
                (Resource::Wool, 1),
                (Resource::Grain, 1),
                (Resource::Ore, 1),
            ],
        ),
        resource_cards: resource_cards(19),
        dev_cards: dev_cards([
            (DevCardKind::Knight, 14),
            (DevCardKind::RoadBuilding, 2),
            (DevCardKind::YearOfPlenty, 2),
            (DevCardKind::Monopoly, 2),
            (DevCardKind::VictoryPoint, 5),
        ]),
    }
}

fn base_5_6() -> BoardTemplate {
    BoardTemplate {
        mask: vec![
            vec![E, E, E, h(0), E, h(5), E, E, E],
            vec![E, E, E, L, L, L, h(5), E, E],
            vec![E, E, E, L, L, L, L, E, E],
            vec![E, h(1), L, L, L, L, L, h(4), E],
            vec![E, E, L, L, L, L, L, L, E],
            vec![E, h(2), L, L, L, L, L, E, E],
            vec![E, E, h(1), L, L, L, L, h(3), E],
            vec![E, E, E, L, L, L, h(4), E, E],
            vec![E, E, E, h(2), E, h(3), E, E, E],
        ],
        terrain_counts: terrain([
            (TerrainKind::Hills, 5),
            (TerrainKind::Forest, 6),
            (TerrainKind::Mountains, 5),
            (TerrainKind::Fields, 6),
            (TerrainKind::Pasture, 6),
            (TerrainKind::Desert, 2),
        ]),
        token_values: vec![
            2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11,
            12, 12,
        ],
        harbor_specs: harbors(
            5,
            [
                (Resource::Lumber, 1),
                (Resource::Brick, 1),
                (Resource::Wool, 2),
                (Resource::Grain, 1),
                (Resource::Ore, 1),
            ],
        ),
        resource_cards: resource_cards(24),
        dev_cards: dev_cards([
            (DevCardKind::Knight, 20),
            (DevCardKind::RoadBuilding, 3),
            (DevCardKind::YearOfPlenty, 3),
            (DevCardKind::Monopoly, 3),
            (DevCardKind::VictoryPoint, 5),
        ]),
    }
}
