//! Selected view axes and the render passes they trigger.

use crate::aggregator::{build_tree, SortKey};
use crate::formatter::{FormatConfig, TimeUnit};
use crate::parser::schema::{CostData, Mode};
use crate::presenter::{summarize, Presentation, TreePresenter};
use crate::utils::config::ViewConfig;
use crate::utils::error::ConfigError;
use log::debug;

/// The user-selectable axes of a view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSettings {
    pub mode: Mode,
    pub sort: SortKey,
    pub time_unit: TimeUnit,
    pub format: FormatConfig,
}

impl ViewSettings {
    /// Settings from a view defaults file; unset fields keep their defaults
    ///
    /// # Errors
    /// * `ConfigError::InvalidValue` - unknown mode or sort key
    pub fn from_config(config: &ViewConfig) -> Result<Self, ConfigError> {
        let mut settings = ViewSettings::default();

        if let Some(mode) = &config.mode {
            settings.mode = mode.parse().map_err(|_| ConfigError::InvalidValue {
                key: "mode".to_string(),
                value: mode.clone(),
            })?;
        }
        if let Some(sort) = &config.sort {
            settings.sort = sort.parse().map_err(|_| ConfigError::InvalidValue {
                key: "sort".to_string(),
                value: sort.clone(),
            })?;
        }
        if let Some(unit) = &config.time_unit {
            settings.time_unit = TimeUnit::parse(unit);
        }
        if let Some(raw) = config.raw_numbers {
            settings.format.raw_numbers = raw;
        }

        Ok(settings)
    }
}

/// Holds the loaded data, the selected axes and the latest presentation
///
/// Every setter that changes a value runs a full pass: the tree is
/// rebuilt from the flat map, never patched. Setting a value equal to
/// the current one does nothing.
#[derive(Debug, Default)]
pub struct ViewState {
    data: Option<CostData>,
    settings: ViewSettings,
    presenter: TreePresenter,
    current: Option<Presentation>,
    render_count: u64,
}

impl ViewState {
    /// Create a view without rendering
    pub fn new(data: Option<CostData>, settings: ViewSettings) -> Self {
        Self {
            data,
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn data(&self) -> Option<&CostData> {
        self.data.as_ref()
    }

    /// Latest presentation, if any pass has produced one
    pub fn presentation(&self) -> Option<&Presentation> {
        self.current.as_ref()
    }

    /// Number of passes that produced a presentation
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Select which flat map is broken down
    pub fn set_mode(&mut self, mode: Mode) -> Option<&Presentation> {
        if self.settings.mode == mode {
            return None;
        }
        self.settings.mode = mode;
        self.render_all()
    }

    /// Select the sibling ranking
    pub fn set_sort(&mut self, sort: SortKey) -> Option<&Presentation> {
        if self.settings.sort == sort {
            return None;
        }
        self.settings.sort = sort;
        self.render_all()
    }

    /// Select the display unit
    pub fn set_time_unit(&mut self, unit: TimeUnit) -> Option<&Presentation> {
        if self.settings.time_unit == unit {
            return None;
        }
        self.settings.time_unit = unit;
        self.render_all()
    }

    /// Toggle raw (untruncated) display values
    pub fn set_raw_numbers(&mut self, raw: bool) -> Option<&Presentation> {
        if self.settings.format.raw_numbers == raw {
            return None;
        }
        self.settings.format.raw_numbers = raw;
        self.render_all()
    }

    /// Replace the loaded data and render it
    pub fn set_data(&mut self, data: Option<CostData>) -> Option<&Presentation> {
        self.data = data;
        self.render_all()
    }

    /// Run a full pass for the current settings
    ///
    /// Without data this is a no-op: it returns `None` and the previous
    /// presentation stays in place.
    pub fn render_all(&mut self) -> Option<&Presentation> {
        let Some(data) = &self.data else {
            debug!("No cost data loaded, skipping render");
            return None;
        };

        let settings = &self.settings;
        let flat = data.select(settings.mode);
        let tree = build_tree(flat);

        let summary = summarize(
            flat,
            settings.mode,
            settings.sort,
            &settings.time_unit,
            &settings.format,
        );
        let nodes = self.presenter.present(
            &tree,
            flat.total_cost(),
            settings.sort,
            &settings.time_unit,
            &settings.format,
        );

        self.render_count += 1;
        debug!(
            "Render pass {}: mode={} sort={} unit={} nodes={}",
            self.render_count,
            settings.mode,
            settings.sort,
            settings.time_unit,
            self.presenter.last_id()
        );

        self.current = Some(Presentation { summary, nodes });
        self.current.as_ref()
    }
}
