pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod render;
pub mod summary;
pub mod template;
pub mod terrain;

pub use board::{Board, Harbor, Tile};
pub use catalog::{GameVariant, template, template_by_name};
pub use config::{GenerationParams, RenderSettings};
pub use error::{BoardError, PoolKind, TemplateError};
pub use generator::{generate, generate_batch, generate_board, generate_seeded};
pub use summary::CardSummary;
pub use template::{BoardTemplate, PlacementCell};
pub use terrain::{DevCardKind, HarborResource, Resource, TerrainKind};
