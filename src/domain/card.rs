use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CardId;

/// Фигура на карте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    Squiggle,
    Diamond,
    Oval,
}

/// Цвет фигур.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Green,
    Purple,
    Red,
}

/// Заливка фигур.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

/// Один из четырёх признаков карты.
///
/// Порядок в `Feature::ALL`: это же порядок проверки при объяснении
/// результата: количество, фигура, цвет, заливка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Feature {
    Count,
    Shape,
    Color,
    Shading,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Count,
        Feature::Shape,
        Feature::Color,
        Feature::Shading,
    ];

    /// Имя признака во множественном числе (для текстов).
    pub fn plural_name(self) -> &'static str {
        match self {
            Feature::Count => "counts",
            Feature::Shape => "shapes",
            Feature::Color => "colors",
            Feature::Shading => "shadings",
        }
    }
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Squiggle, Shape::Diamond, Shape::Oval];

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Green, Color::Purple, Color::Red];

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Shading {
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Open];

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Карта игры Set.
///
/// Признаки неизменны. Флаги `selected`/`matched` меняет только `Deck`,
/// поэтому наружу они отдаются через геттеры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    /// Количество фигур: 1..=3.
    pub shape_count: u8,
    pub shape: Shape,
    pub shading: Shading,
    pub color: Color,
    pub(crate) selected: bool,
    pub(crate) matched: bool,
}

impl Card {
    /// Карта с явным id (для нестандартных колод в тестах).
    pub const fn new(
        id: CardId,
        shape_count: u8,
        shape: Shape,
        shading: Shading,
        color: Color,
    ) -> Self {
        Self {
            id,
            shape_count,
            shape,
            shading,
            color,
            selected: false,
            matched: false,
        }
    }

    /// Карта с каноническим id: её индексом в порядке генерации колоды:
    /// фигура × цвет × заливка × количество.
    pub fn from_features(shape_count: u8, shape: Shape, shading: Shading, color: Color) -> Self {
        debug_assert!((1..=3).contains(&shape_count));
        let id = shape.index() as CardId * 27
            + color.index() as CardId * 9
            + shading.index() as CardId * 3
            + (shape_count as CardId - 1);
        Self::new(id, shape_count, shape, shading, color)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Значение признака в виде индекса 0..=2.
    pub fn feature_value(&self, feature: Feature) -> u8 {
        match feature {
            Feature::Count => self.shape_count - 1,
            Feature::Shape => self.shape.index(),
            Feature::Color => self.color.index(),
            Feature::Shading => self.shading.index(),
        }
    }

    /// Человеческое описание: "2 green striped ovals".
    pub fn describe(&self) -> String {
        let plural = if self.shape_count > 1 { "s" } else { "" };
        format!(
            "{} {} {} {}{}",
            self.shape_count,
            self.color.name(),
            self.shading.name(),
            self.shape.name(),
            plural
        )
    }
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Squiggle => "squiggle",
            Shape::Diamond => "diamond",
            Shape::Oval => "oval",
        }
    }
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

impl Shading {
    pub fn name(self) -> &'static str {
        match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Open => "open",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Shape::Squiggle => 'S',
            Shape::Diamond => 'D',
            Shape::Oval => 'O',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Color::Green => 'G',
            Color::Purple => 'P',
            Color::Red => 'R',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Shading::Solid => 'S',
            Shading::Striped => 'T',
            Shading::Open => 'O',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `2GTO`: количество, цвет, заливка, фигура.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.shape_count, self.color, self.shading, self.shape
        )
    }
}

/// Парсинг строки вида "2GTO", "1RSD".
///
/// Возвращает карту с каноническим id (как в полной колоде из 81 карты).
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err("Card string must have length 4".into());
        }

        let shape_count = match chars[0] {
            '1' => 1,
            '2' => 2,
            '3' => 3,
            other => return Err(format!("Invalid count: {other}")),
        };

        let color = match chars[1] {
            'G' | 'g' => Color::Green,
            'P' | 'p' => Color::Purple,
            'R' | 'r' => Color::Red,
            other => return Err(format!("Invalid color: {other}")),
        };

        let shading = match chars[2] {
            'S' | 's' => Shading::Solid,
            'T' | 't' => Shading::Striped,
            'O' | 'o' => Shading::Open,
            other => return Err(format!("Invalid shading: {other}")),
        };

        let shape = match chars[3] {
            'S' | 's' => Shape::Squiggle,
            'D' | 'd' => Shape::Diamond,
            'O' | 'o' => Shape::Oval,
            other => return Err(format!("Invalid shape: {other}")),
        };

        Ok(Card::from_features(shape_count, shape, shading, color))
    }
}
