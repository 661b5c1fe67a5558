// src/summary.rs
//! Сводка по картам
//!
//! Количество карт ресурсов и карт развития берётся напрямую из статических счётчиков шаблона,
//! а не из сгенерированной доски: перегенерация доски сводку не меняет.

use serde::Serialize;

use crate::template::BoardTemplate;
use crate::terrain::{DevCardKind, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub resource_cards: Vec<(Resource, u32)>,
    pub dev_cards: Vec<(DevCardKind, u32)>,
}

impl CardSummary {
    #[must_use]
    pub fn from_template(template: &BoardTemplate) -> Self {
        Self {
            resource_cards: template
                .resource_cards
                .iter()
                .map(|c| (c.resource, c.count))
                .collect(),
            dev_cards: template
                .dev_cards
                .iter()
                .map(|c| (c.card, c.count))
                .collect(),
        }
    }

    #[must_use]
    pub fn resource_card_total(&self) -> u32 {
        self.resource_cards.iter().map(|&(_, count)| count).sum()
    }

    #[must_use]
    pub fn dev_card_total(&self) -> u32 {
        self.dev_cards.iter().map(|&(_, count)| count).sum()
    }

    /// Строки вида `BRICK: 19` для вывода на экран
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.resource_cards
            .iter()
            .map(|(resource, count)| format!("{resource}: {count}"))
            .chain(
                self.dev_cards
                    .iter()
                    .map(|(card, count)| format!("{card}: {count}")),
            )
            .collect()
    }
}
