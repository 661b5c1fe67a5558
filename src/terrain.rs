// src/terrain.rs
//! Виды местности, ресурсы и карты развития
//!
//! Замкнутые перечисления: сравнение и сопоставление идут по варианту, а не по строковому имени.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ресурс, который приносит гекс или принимает гавань
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Brick,
    Lumber,
    Wool,
    Grain,
    Ore,
}

impl Resource {
    /// Порядок колоды карт ресурсов
    pub const ALL: [Resource; 5] = [
        Resource::Brick,
        Resource::Lumber,
        Resource::Wool,
        Resource::Grain,
        Resource::Ore,
    ];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Brick => "BRICK",
            Resource::Lumber => "LUMBER",
            Resource::Ore => "ORE",
            Resource::Grain => "GRAIN",
            Resource::Wool => "WOOL",
        };
        f.write_str(name)
    }
}

/// Тип гекса суши
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TerrainKind {
    Hills,
    Forest,
    Mountains,
    Fields,
    Pasture,
    /// Пустыня: ничего не производит и не получает жетон с числом
    Desert,
}

impl TerrainKind {
    /// Ресурс, который производит гекс (`None` для пустыни)
    ///
    /// ```
    /// use hexboard::terrain::{Resource, TerrainKind};
    /// assert_eq!(TerrainKind::Hills.resource(), Some(Resource::Brick));
    /// assert_eq!(TerrainKind::Desert.resource(), None);
    /// ```
    #[must_use]
    pub fn resource(self) -> Option<Resource> {
        match self {
            TerrainKind::Hills => Some(Resource::Brick),
            TerrainKind::Forest => Some(Resource::Lumber),
            TerrainKind::Mountains => Some(Resource::Ore),
            TerrainKind::Fields => Some(Resource::Grain),
            TerrainKind::Pasture => Some(Resource::Wool),
            TerrainKind::Desert => None,
        }
    }

    #[must_use]
    pub fn is_desert(self) -> bool {
        matches!(self, TerrainKind::Desert)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerrainKind::Hills => "HILLS",
            TerrainKind::Forest => "FOREST",
            TerrainKind::Mountains => "MOUNTAINS",
            TerrainKind::Fields => "FIELDS",
            TerrainKind::Pasture => "PASTURE",
            TerrainKind::Desert => "DESERT",
        };
        f.write_str(name)
    }
}

/// Что принимает гавань: конкретный ресурс (обычно 2:1) или любой (обычно 3:1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HarborResource {
    Any,
    Brick,
    Lumber,
    Ore,
    Grain,
    Wool,
}

impl HarborResource {
    /// Конкретный ресурс гавани, `None` для универсальной
    #[must_use]
    pub fn resource(self) -> Option<Resource> {
        match self {
            HarborResource::Any => None,
            HarborResource::Brick => Some(Resource::Brick),
            HarborResource::Lumber => Some(Resource::Lumber),
            HarborResource::Ore => Some(Resource::Ore),
            HarborResource::Grain => Some(Resource::Grain),
            HarborResource::Wool => Some(Resource::Wool),
        }
    }
}

impl From<Resource> for HarborResource {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Brick => HarborResource::Brick,
            Resource::Lumber => HarborResource::Lumber,
            Resource::Ore => HarborResource::Ore,
            Resource::Grain => HarborResource::Grain,
            Resource::Wool => HarborResource::Wool,
        }
    }
}

impl fmt::Display for HarborResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource() {
            Some(resource) => resource.fmt(f),
            None => f.write_str("ANY"),
        }
    }
}

/// Тип карты развития
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DevCardKind {
    Knight,
    RoadBuilding,
    YearOfPlenty,
    Monopoly,
    VictoryPoint,
}

impl fmt::Display for DevCardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DevCardKind::Knight => "KNIGHT",
            DevCardKind::RoadBuilding => "ROAD_BUILDING",
            DevCardKind::YearOfPlenty => "YEAR_OF_PLENTY",
            DevCardKind::Monopoly => "MONOPOLY",
            DevCardKind::VictoryPoint => "VICTORY_POINT",
        };
        f.write_str(name)
    }
}
