use serde::{Deserialize, Serialize};

use crate::render::Color;

/// The classic 10-color categorical palette.
const CATEGORY10: [Color; 10] = [
    Color::rgb(0.121_568_627_450_980_4, 0.466_666_666_666_666_7, 0.705_882_352_941_176_5),
    Color::rgb(1.0, 0.498_039_215_686_274_5, 0.054_901_960_784_313_725),
    Color::rgb(0.172_549_019_607_843_14, 0.627_450_980_392_156_9, 0.172_549_019_607_843_14),
    Color::rgb(0.839_215_686_274_509_8, 0.152_941_176_470_588_25, 0.156_862_745_098_039_2),
    Color::rgb(0.580_392_156_862_745_1, 0.403_921_568_627_450_96, 0.741_176_470_588_235_3),
    Color::rgb(0.549_019_607_843_137_3, 0.337_254_901_960_784_3, 0.294_117_647_058_823_53),
    Color::rgb(0.890_196_078_431_372_5, 0.466_666_666_666_666_7, 0.760_784_313_725_490_2),
    Color::rgb(0.498_039_215_686_274_5, 0.498_039_215_686_274_5, 0.498_039_215_686_274_5),
    Color::rgb(0.737_254_901_960_784_3, 0.741_176_470_588_235_3, 0.133_333_333_333_333_33),
    Color::rgb(0.090_196_078_431_372_55, 0.745_098_039_215_686_3, 0.811_764_705_882_352_9),
];

/// Per-series color assignment, cycling when series outnumber colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum SeriesPalette {
    #[default]
    Category10,
    Custom(Vec<Color>),
}

impl SeriesPalette {
    /// Color for the series at `series_index` (dataset order).
    ///
    /// An empty custom palette falls back to the categorical one.
    #[must_use]
    pub fn color_for(&self, series_index: usize) -> Color {
        match self {
            Self::Category10 => CATEGORY10[series_index % CATEGORY10.len()],
            Self::Custom(colors) if colors.is_empty() => {
                CATEGORY10[series_index % CATEGORY10.len()]
            }
            Self::Custom(colors) => colors[series_index % colors.len()],
        }
    }
}
