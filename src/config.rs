// src/config.rs
//! Конфигурация генерации доски
//!
//! Этот модуль определяет параметры, управляющие генерацией и отрисовкой:
//! - Вариант доски из каталога (или собственный шаблон)
//! - Сид генератора (если не задан, каждая генерация — новая случайная раздача)
//! - Размер и отступы изображения
//!
//! Все структуры поддерживают сериализацию в TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::GameVariant;
use crate::error::BoardError;
use crate::template::BoardTemplate;

/// Параметры изображения доски
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Ширина изображения в пикселях (по умолчанию 1024)
    #[serde(default = "default_image_width")]
    pub width: u32,

    /// Высота изображения в пикселях (по умолчанию 1024)
    #[serde(default = "default_image_height")]
    pub height: u32,

    /// Отступ от краёв изображения до сетки в пикселях
    #[serde(default = "default_padding")]
    pub padding: f32,
}

fn default_image_width() -> u32 {
    1024
}
fn default_image_height() -> u32 {
    1024
}
fn default_padding() -> f32 {
    30.0
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            padding: 30.0,
        }
    }
}

/// Основные параметры генерации доски
///
/// Поддерживает загрузку из TOML-файлов; все поля необязательны.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Сид генератора случайных чисел; `None` — свежая случайная раздача при каждом запуске
    #[serde(default)]
    pub seed: Option<u64>,

    /// Вариант доски (по умолчанию `BASE_3_4`)
    #[serde(default)]
    pub variant: GameVariant,

    /// Собственный шаблон; если задан, вариант из каталога игнорируется
    #[serde(default)]
    pub template: Option<BoardTemplate>,

    #[serde(default)]
    pub render: RenderSettings,
}

impl GenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # board.toml
    /// seed = 42
    /// variant = "BASE_5_6"
    ///
    /// [render]
    /// width = 800
    /// height = 800
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| BoardError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, BoardError> {
        toml::from_str(contents).map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Что генерируется: имя варианта или `custom template`, если шаблон задан в конфигурации
    #[must_use]
    pub fn template_label(&self) -> String {
        match self.template {
            Some(_) => "custom template".to_string(),
            None => self.variant.to_string(),
        }
    }

    /// Шаблон для генерации: собственный (после проверки счётчиков) или из каталога
    pub fn resolve_template(&self) -> Result<BoardTemplate, BoardError> {
        match &self.template {
            Some(custom) => {
                custom.validate()?;
                Ok(custom.clone())
            }
            None => Ok(self.variant.template()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PoolKind, TemplateError};
    use crate::template::PlacementCell;

    #[test]
    fn empty_file_uses_defaults() {
        let params = GenerationParams::from_toml_str("").unwrap();
        assert_eq!(params.seed, None);
        assert_eq!(params.variant, GameVariant::Base34);
        assert_eq!(params.render, RenderSettings::default());
        assert_eq!(
            params.resolve_template().unwrap(),
            GameVariant::Base34.template()
        );
    }

    #[test]
    fn reads_variant_and_render_settings() {
        let params = GenerationParams::from_toml_str(
            r#"
            seed = 7
            variant = "BASE_5_6"

            [render]
            width = 640
            "#,
        )
        .unwrap();
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.variant, GameVariant::Base56);
        assert_eq!(params.render.width, 640);
        assert_eq!(params.render.height, 1024);
    }

    #[test]
    fn unknown_variant_is_a_config_error() {
        let err = GenerationParams::from_toml_str(r#"variant = "BASE_2_2""#).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn custom_template_is_validated() {
        let params = GenerationParams::from_toml_str(
            r#"
            [template]
            mask = ["h2 L L"]
            token_values = [8]
            terrain_counts = [
                { terrain = "Forest", count = 1 },
                { terrain = "Desert", count = 1 },
            ]
            "#,
        )
        .unwrap();
        let template = params.template.as_ref().unwrap();
        assert_eq!(template.mask[0][0], PlacementCell::Harbor { orientation: 2 });
        assert_eq!(
            params.resolve_template(),
            Err(BoardError::MalformedTemplate(TemplateError::CountMismatch {
                pool: PoolKind::Harbors,
                expected: 1,
                actual: 0,
            }))
        );
    }

    #[test]
    fn label_names_the_template_source() {
        let catalog = GenerationParams::from_toml_str(r#"variant = "BASE_5_6""#).unwrap();
        assert_eq!(catalog.template_label(), "BASE_5_6");

        let custom = GenerationParams::from_toml_str(
            r#"
            [template]
            mask = ["L"]
            token_values = []
            terrain_counts = [{ terrain = "Desert", count = 1 }]
            "#,
        )
        .unwrap();
        assert_eq!(custom.template_label(), "custom template");
    }

    #[test]
    fn custom_template_rejects_impossible_tokens() {
        let params = GenerationParams::from_toml_str(
            r#"
            [template]
            mask = ["L L"]
            token_values = [7, 0]
            terrain_counts = [{ terrain = "Hills", count = 2 }]
            "#,
        )
        .unwrap();
        assert_eq!(
            params.resolve_template(),
            Err(BoardError::MalformedTemplate(TemplateError::InvalidToken(7)))
        );
    }

    #[test]
    fn bad_mask_token_is_rejected() {
        let result = GenerationParams::from_toml_str(
            r#"
            [template]
            mask = ["L h9"]
            token_values = []
            terrain_counts = []
            "#,
        );
        assert!(matches!(result, Err(BoardError::Config(msg)) if msg.contains("h9")));
    }
}
