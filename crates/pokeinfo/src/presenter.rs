//! Presenter - Maps a lookup result onto display state
//!
//! `InfoPanel` owns every value the form shows. A failed lookup always
//! resets it to the empty state so no earlier result stays visible.

use pokeinfo_common::config::{PokeInfoConfig, DEFAULT_STAT_MAX, DEFAULT_TYPE_SEPARATOR};
use pokeinfo_common::query::capitalize;
use pokeinfo_common::{FetchError, PokemonRecord, StatKind, STAT_COUNT};

pub const TYPES_LABEL: &str = "Type(s):";
pub const HEIGHT_LABEL: &str = "Height:";
pub const WEIGHT_LABEL: &str = "Weight:";

/// Bounded stat display with a fixed maximum (determinate mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub kind: StatKind,
    pub value: u32,
    pub max: u32,
}

impl Indicator {
    pub fn new(kind: StatKind, max: u32) -> Self {
        Self {
            kind,
            value: 0,
            max: max.max(1),
        }
    }

    /// Set value, clamped to `0..=max`
    pub fn set(&mut self, value: u32) {
        self.value = value.min(self.max);
    }

    pub fn clear(&mut self) {
        self.value = 0;
    }

    /// Fill fraction in `[0.0, 1.0]`
    pub fn ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(self.max)
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Display state for the Info and Stats areas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub types_text: String,
    pub indicators: [Indicator; STAT_COUNT],
    pub height_text: String,
    pub weight_text: String,
    /// Blocking failure notice, if one is pending
    pub notice: Option<String>,
    separator: String,
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self::new(DEFAULT_STAT_MAX, DEFAULT_TYPE_SEPARATOR)
    }
}

impl InfoPanel {
    pub fn new(stat_max: u32, separator: impl Into<String>) -> Self {
        Self {
            types_text: TYPES_LABEL.to_string(),
            indicators: StatKind::ALL.map(|kind| Indicator::new(kind, stat_max)),
            height_text: HEIGHT_LABEL.to_string(),
            weight_text: WEIGHT_LABEL.to_string(),
            notice: None,
            separator: separator.into(),
        }
    }

    pub fn from_config(config: &PokeInfoConfig) -> Self {
        Self::new(config.stat_max, config.type_separator.clone())
    }

    /// Apply a lookup result. `query_label` is what the user typed.
    pub fn render(&mut self, result: &Result<PokemonRecord, FetchError>, query_label: &str) {
        match result {
            Ok(record) => self.show_record(record),
            Err(_) => self.show_failure(query_label),
        }
    }

    pub fn show_record(&mut self, record: &PokemonRecord) {
        self.types_text = format!("{} {}", TYPES_LABEL, record.types.join(&self.separator));

        for indicator in self.indicators.iter_mut() {
            indicator.set(record.stat(indicator.kind));
        }

        self.height_text = format!("{} {} dm", HEIGHT_LABEL, record.height);
        self.weight_text = format!("{} {} hg", WEIGHT_LABEL, record.weight);
        self.notice = None;
    }

    pub fn show_failure(&mut self, query_label: &str) {
        self.reset();
        self.notice = Some(failure_notice(query_label));
    }

    /// Back to the startup state (no notice)
    pub fn reset(&mut self) {
        self.types_text = TYPES_LABEL.to_string();
        for indicator in self.indicators.iter_mut() {
            indicator.clear();
        }
        self.height_text = HEIGHT_LABEL.to_string();
        self.weight_text = WEIGHT_LABEL.to_string();
        self.notice = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn indicator(&self, kind: StatKind) -> &Indicator {
        &self.indicators[kind.index()]
    }

    pub fn values(&self) -> [u32; STAT_COUNT] {
        self.indicators.map(|indicator| indicator.value)
    }

    /// Plain-text rendering for non-interactive output
    pub fn to_text(&self, bar_width: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.height_text);
        out.push('\n');
        out.push_str(&self.weight_text);
        out.push('\n');
        out.push_str(&self.types_text);
        out.push('\n');

        for indicator in &self.indicators {
            out.push_str(&format!(
                "{:<16} {:>3}/{:<3} [{}]\n",
                indicator.label(),
                indicator.value,
                indicator.max,
                text_bar(indicator, bar_width)
            ));
        }

        out
    }
}

/// User-facing failure text naming the attempted query
pub fn failure_notice(query_label: &str) -> String {
    format!(
        "Unable to fetch the information for {} from the PokeAPI",
        capitalize(query_label.trim())
    )
}

/// `#` fill proportional to the indicator ratio
pub fn text_bar(indicator: &Indicator, width: usize) -> String {
    let filled = ((indicator.ratio() * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}
