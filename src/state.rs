use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::model::SectorDataset;
use crate::data::stats::{SectorStats, compute_stats};
use crate::error::DashboardError;
use crate::format::format_sector_key;

// ---------------------------------------------------------------------------
// Chart type
// ---------------------------------------------------------------------------

/// Which rendering strategy the chart panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Scatter,
    BoxPlot,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Scatter,
        ChartType::BoxPlot,
    ];

    /// Human-readable name for the chart-type selector.
    pub fn label(self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Scatter => "Scatter Plot",
            ChartType::BoxPlot => "Box Plot",
        }
    }
}

impl fmt::Display for ChartType {
    /// Short identifier, used in exported file names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
            ChartType::BoxPlot => "boxplot",
        };
        f.write_str(id)
    }
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The user's current choices. Everything shown is derived from these three
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_sector: String,
    pub chart_type: ChartType,
    pub comparison_sector: Option<String>,
}

impl SelectionState {
    pub fn new(default_sector: &str) -> Self {
        Self {
            selected_sector: default_sector.to_string(),
            chart_type: ChartType::Bar,
            comparison_sector: None,
        }
    }

    /// Change the primary sector, dropping the comparison if it now
    /// matches the primary.
    pub fn select_sector(&mut self, sector: &str) {
        self.selected_sector = sector.to_string();
        if self.comparison_sector.as_deref() == Some(sector) {
            self.comparison_sector = None;
        }
    }

    pub fn select_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    /// Set or clear the comparison sector. No check against the primary.
    pub fn select_comparison(&mut self, sector: Option<&str>) {
        self.comparison_sector = sector.map(str::to_string);
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Everything the panels need to show one sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorView {
    pub key: String,
    pub title: String,
    pub stats: SectorStats,
}

impl SectorView {
    fn build(dataset: &SectorDataset, key: &str) -> Self {
        let sample = dataset.values(key).unwrap_or_default();
        SectorView {
            key: key.to_string(),
            title: format_sector_key(key),
            stats: compute_stats(sample),
        }
    }
}

/// Derived display state, rebuilt whenever the primary or comparison
/// sector changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub primary: SectorView,
    pub comparison: Option<SectorView>,
}

impl ViewModel {
    fn build(dataset: &SectorDataset, selection: &SelectionState) -> Self {
        ViewModel {
            primary: SectorView::build(dataset, &selection.selected_sector),
            comparison: selection
                .comparison_sector
                .as_deref()
                .map(|key| SectorView::build(dataset, key)),
        }
    }

    pub fn stats(&self) -> &SectorStats {
        &self.primary.stats
    }

    pub fn formatted_title(&self) -> &str {
        &self.primary.title
    }

    pub fn formatted_comparison_title(&self) -> Option<&str> {
        self.comparison.as_ref().map(|c| c.title.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dashboard controller
// ---------------------------------------------------------------------------

/// Owns the dataset and the selection, and keeps the view model in sync.
///
/// Every transition validates its keys first, so a rejected call leaves the
/// state exactly as it was.
pub struct DashboardController {
    dataset: SectorDataset,
    selection: SelectionState,
    view: ViewModel,
}

impl DashboardController {
    /// Start on the dataset's first sector with a bar chart and no
    /// comparison.
    pub fn new(dataset: SectorDataset) -> Self {
        let selection = SelectionState::new(dataset.first_key());
        let view = ViewModel::build(&dataset, &selection);
        Self {
            dataset,
            selection,
            view,
        }
    }

    /// Swap in a freshly loaded dataset and reset the selection.
    pub fn load_dataset(&mut self, dataset: SectorDataset) {
        log::info!(
            "Loaded {} sectors ({} values)",
            dataset.len(),
            dataset.value_count()
        );
        *self = Self::new(dataset);
    }

    pub fn dataset(&self) -> &SectorDataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Sample of the selected sector.
    pub fn primary_sample(&self) -> &[f64] {
        self.dataset
            .values(&self.selection.selected_sector)
            .unwrap_or_default()
    }

    /// Sample of the comparison sector, if one is selected.
    pub fn comparison_sample(&self) -> Option<&[f64]> {
        self.selection
            .comparison_sector
            .as_deref()
            .and_then(|key| self.dataset.values(key))
    }

    /// Sectors the comparison selector may offer: everything but the
    /// primary, in dataset order.
    pub fn comparison_candidates(&self) -> Vec<&str> {
        self.dataset
            .keys()
            .filter(|key| *key != self.selection.selected_sector)
            .collect()
    }

    pub fn select_sector(&mut self, sector: &str) -> Result<(), DashboardError> {
        self.ensure_known(sector)?;
        log::debug!("Selected sector {sector}");
        self.selection.select_sector(sector);
        self.recompute();
        Ok(())
    }

    /// Only affects rendering; statistics are unchanged.
    pub fn select_chart_type(&mut self, chart_type: ChartType) {
        log::debug!("Selected chart type {chart_type}");
        self.selection.select_chart_type(chart_type);
    }

    pub fn select_comparison(&mut self, sector: Option<&str>) -> Result<(), DashboardError> {
        if let Some(key) = sector {
            self.ensure_known(key)?;
        }
        log::debug!("Selected comparison {sector:?}");
        self.selection.select_comparison(sector);
        self.recompute();
        Ok(())
    }

    fn ensure_known(&self, sector: &str) -> Result<(), DashboardError> {
        if self.dataset.contains(sector) {
            Ok(())
        } else {
            Err(DashboardError::UnknownSector(sector.to_string()))
        }
    }

    fn recompute(&mut self) {
        self.view = ViewModel::build(&self.dataset, &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SectorDataset {
        SectorDataset::from_sectors(vec![
            ("manufacturing_output_set1".to_string(), vec![1.0, 2.0, 3.0, 4.0]),
            ("energy_use".to_string(), vec![5.0]),
            ("retail_sales".to_string(), vec![10.0, 20.0]),
        ])
        .unwrap()
    }

    #[test]
    fn initial_state() {
        let ctl = DashboardController::new(dataset());
        let sel = ctl.selection();
        assert_eq!(sel.selected_sector, "manufacturing_output_set1");
        assert_eq!(sel.chart_type, ChartType::Bar);
        assert_eq!(sel.comparison_sector, None);

        let view = ctl.view();
        assert_eq!(view.formatted_title(), "Manufacturing Output  (Set 1)");
        assert_eq!(view.stats().mean, 2.5);
        assert_eq!(view.formatted_comparison_title(), None);
    }

    #[test]
    fn selecting_sector_recomputes_stats() {
        let mut ctl = DashboardController::new(dataset());
        ctl.select_sector("retail_sales").unwrap();
        assert_eq!(ctl.view().stats().mean, 15.0);
        assert_eq!(ctl.view().stats().count, 2);
        assert_eq!(ctl.view().formatted_title(), "Retail Sales");
        assert_eq!(ctl.primary_sample(), &[10.0, 20.0]);
    }

    #[test]
    fn selecting_current_comparison_clears_it() {
        let mut ctl = DashboardController::new(dataset());
        ctl.select_comparison(Some("energy_use")).unwrap();
        assert_eq!(ctl.view().formatted_comparison_title(), Some("Energy Use"));

        ctl.select_sector("energy_use").unwrap();
        assert_eq!(ctl.selection().comparison_sector, None);
        assert!(ctl.view().comparison.is_none());
    }

    #[test]
    fn comparison_equal_to_primary_survives_unrelated_change() {
        let mut ctl = DashboardController::new(dataset());
        ctl.select_comparison(Some("manufacturing_output_set1")).unwrap();
        ctl.select_sector("retail_sales").unwrap();
        assert_eq!(
            ctl.selection().comparison_sector.as_deref(),
            Some("manufacturing_output_set1")
        );
        assert_eq!(ctl.comparison_sample(), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn chart_type_leaves_view_alone() {
        let mut ctl = DashboardController::new(dataset());
        ctl.select_comparison(Some("retail_sales")).unwrap();
        let before = ctl.view().clone();
        ctl.select_chart_type(ChartType::BoxPlot);
        assert_eq!(ctl.selection().chart_type, ChartType::BoxPlot);
        assert_eq!(ctl.view(), &before);
    }

    #[test]
    fn clearing_comparison() {
        let mut ctl = DashboardController::new(dataset());
        ctl.select_comparison(Some("retail_sales")).unwrap();
        ctl.select_comparison(None).unwrap();
        assert!(ctl.view().comparison.is_none());
        assert_eq!(ctl.comparison_sample(), None);
    }

    #[test]
    fn unknown_keys_are_rejected_without_change() {
        let mut ctl = DashboardController::new(dataset());
        let before = ctl.selection().clone();
        assert_eq!(
            ctl.select_sector("nope"),
            Err(DashboardError::UnknownSector("nope".into()))
        );
        assert_eq!(
            ctl.select_comparison(Some("nope")),
            Err(DashboardError::UnknownSector("nope".into()))
        );
        assert_eq!(ctl.selection(), &before);
    }

    #[test]
    fn candidates_exclude_primary() {
        let mut ctl = DashboardController::new(dataset());
        assert_eq!(ctl.comparison_candidates(), vec!["energy_use", "retail_sales"]);
        ctl.select_sector("energy_use").unwrap();
        assert_eq!(
            ctl.comparison_candidates(),
            vec!["manufacturing_output_set1", "retail_sales"]
        );
    }

    #[test]
    fn loading_dataset_resets_selection() {
        let mut ctl = DashboardController::new(dataset());
        ctl.select_sector("retail_sales").unwrap();
        ctl.select_chart_type(ChartType::Line);
        ctl.select_comparison(Some("energy_use")).unwrap();

        let other = SectorDataset::from_sectors(vec![("steel".to_string(), vec![])]).unwrap();
        ctl.load_dataset(other);
        assert_eq!(ctl.selection(), &SelectionState::new("steel"));
        assert_eq!(ctl.view().stats().count, 0);
    }

    #[test]
    fn chart_type_names() {
        assert_eq!(ChartType::BoxPlot.to_string(), "boxplot");
        assert_eq!(ChartType::Scatter.label(), "Scatter Plot");
        assert_eq!(serde_json::to_string(&ChartType::BoxPlot).unwrap(), "\"boxplot\"");
        let parsed: ChartType = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(parsed, ChartType::Line);
    }
}
