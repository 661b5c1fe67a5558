// src/error.rs
//! Ошибки генерации доски
//!
//! Два класса ошибок:
//! - `UnknownVariant` — запрошен вариант, которого нет в каталоге
//! - `MalformedTemplate` — счётчики шаблона не сходятся с его маской
//!
//! Любая ошибка прерывает генерацию целиком: частично заполненная доска никогда не возвращается.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Пул элементов, из которого генератор раздаёт содержимое клеткам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolKind {
    Terrain,
    Tokens,
    Harbors,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PoolKind::Terrain => "terrain",
            PoolKind::Tokens => "number token",
            PoolKind::Harbors => "harbor",
        };
        f.write_str(name)
    }
}

/// Дефект шаблона: ошибка автора конфигурации, а не состояние времени выполнения
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("{pool} pool exhausted before the mask scan finished")]
    PoolExhausted { pool: PoolKind },

    #[error("{pool} pool has {remaining} unassigned item(s) after the mask scan")]
    LeftoverItems { pool: PoolKind, remaining: usize },

    #[error("{pool} pool holds {actual} item(s), but the mask needs {expected}")]
    CountMismatch {
        pool: PoolKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid placement cell `{0}` (expected `.`, `0`, `L`, `1` or `h0`..`h5`)")]
    InvalidCell(String),

    #[error("invalid number token {0} (expected 2..=12 except 7)")]
    InvalidToken(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unknown board variant `{0}` (expected BASE_3_4 or BASE_5_6)")]
    UnknownVariant(String),

    #[error("malformed board template: {0}")]
    MalformedTemplate(#[from] TemplateError),

    #[error("failed to load configuration: {0}")]
    Config(String),
}

impl BoardError {
    /// `true`, если ошибка вызвана дефектом шаблона
    #[must_use]
    pub fn is_malformed_template(&self) -> bool {
        matches!(self, BoardError::MalformedTemplate(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_errors_name_the_pool() {
        let err = BoardError::from(TemplateError::PoolExhausted {
            pool: PoolKind::Tokens,
        });
        assert!(err.is_malformed_template());
        assert_eq!(
            err.to_string(),
            "malformed board template: number token pool exhausted before the mask scan finished"
        );
    }

    #[test]
    fn unknown_variant_is_not_a_template_defect() {
        let err = BoardError::UnknownVariant("BASE_7_8".to_string());
        assert!(!err.is_malformed_template());
        assert!(err.to_string().contains("BASE_7_8"));
    }
}
