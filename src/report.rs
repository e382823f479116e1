//! One-shot comparison reports
//!
//! A `ComparisonReport` is a serializable snapshot of the selection and the
//! view derived from it, rendered either as JSON or as plain text.

use crate::core::error::Result;
use crate::display::{series_stats, text_bar, RatingBands};
use crate::model::{DerivedView, SelectionState, SkillComparisonModel};
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub selection: SelectionState,
    #[serde(flatten)]
    pub view: DerivedView,
}

impl ComparisonReport {
    pub fn from_model(model: &SkillComparisonModel) -> Result<Self> {
        Ok(Self {
            selection: model.selection().clone(),
            view: model.derived_view()?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self, bands: &RatingBands) -> String {
        let mut out = String::new();
        // fmt::Write into a String cannot fail
        let _ = self.write_text(&mut out, bands);
        out
    }

    fn write_text(&self, out: &mut String, bands: &RatingBands) -> std::fmt::Result {
        let skill_width = self
            .view
            .radar
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.skill.len()))
            .max()
            .unwrap_or(0);

        for series in &self.view.radar {
            writeln!(out, "{}", series.label)?;
            if series.points.is_empty() {
                writeln!(out, "  (no skills selected)")?;
            }
            for stat in series_stats(series, bands) {
                writeln!(
                    out,
                    "  {:<width$} {:>6.1} {} {}",
                    stat.name,
                    stat.rating,
                    text_bar(stat.bar_fill, BAR_WIDTH),
                    stat.band.name(),
                    width = skill_width
                )?;
            }
            writeln!(out)?;
        }

        writeln!(out, "Job Similarity Score: {}", self.view.similarity)?;
        writeln!(out)?;

        writeln!(out, "Trend")?;
        for series in &self.view.trend {
            let points: Vec<String> = series
                .points
                .iter()
                .map(|p| match p.average {
                    Some(avg) => format!("{}={:.2}", p.level, avg),
                    None => format!("{}=N/A", p.level),
                })
                .collect();
            writeln!(out, "  {}: {}", series.label, points.join("  "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{LevelScheme, RatingTable};

    fn model() -> SkillComparisonModel {
        let json = r#"{
            "A": {"level_1": {"x": 10, "y": 20}, "level_2": {"x": 10, "y": 20}, "level_3": {"x": 10, "y": 20}, "level_4": {"x": 10, "y": 20}},
            "B": {"level_1": {"x": 30, "y": 20}, "level_2": {"x": 30, "y": 20}, "level_3": {"x": 30, "y": 20}, "level_4": {"x": 30, "y": 20}}
        }"#;
        let table = RatingTable::from_json_str(json, Some(LevelScheme::numbered()), true).unwrap();
        SkillComparisonModel::new(table)
    }

    #[test]
    fn test_text_report() {
        let mut m = model();
        m.set_role_b(Some("B")).unwrap();
        let text = ComparisonReport::from_model(&m)
            .unwrap()
            .to_text(&RatingBands::default());

        assert!(text.contains("A (level_1)"));
        assert!(text.contains("B (level_1)"));
        assert!(text.contains("Job Similarity Score: 90.00%"));
        assert!(text.contains("A: level_1=15.00"));
    }

    #[test]
    fn test_text_report_empty_selection() {
        let mut m = model();
        m.clear_all();
        let text = ComparisonReport::from_model(&m)
            .unwrap()
            .to_text(&RatingBands::default());
        assert!(text.contains("(no skills selected)"));
        assert!(text.contains("Job Similarity Score: N/A"));
        assert!(text.contains("level_1=N/A"));
    }

    #[test]
    fn test_json_report() {
        let mut m = model();
        m.set_role_b(Some("B")).unwrap();
        let json = ComparisonReport::from_model(&m).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["similarity"]["score"], 90.0);
        assert_eq!(value["selection"]["role_b"], "B");
        assert_eq!(value["radar"].as_array().unwrap().len(), 2);
        assert_eq!(value["trend"][0]["points"].as_array().unwrap().len(), 4);
    }
}
