//! presentation of a bipartite check as a "Group 1 / Group 2" report

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::coloring::{Color, Coloring};
use crate::error::ColoringError;
use crate::graph::LabeledGraph;

pub const SPLIT_MESSAGE: &str =
    "It is possible to split the employees into two groups without conflicts:";
pub const NO_SPLIT_MESSAGE: &str =
    "It is not possible to split the employees into two groups without conflicts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<ReportFormat> {
        match name {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Outcome of a check in terms of labels. `groups` is `None` when no split exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    bipartite: bool,
    groups: Option<[Vec<String>; 2]>,
}

impl Report {
    /// builds the report for `graph` from the result of checking it.
    ///
    /// `NotBipartite` becomes a report without groups; `InvalidGraph` is passed back since there is
    /// nothing meaningful to present.
    pub fn new(
        graph: &LabeledGraph,
        result: &Result<Coloring, ColoringError>,
    ) -> Result<Report, ColoringError> {
        match result {
            Ok(coloring) => {
                let partition = coloring.partition();
                let labels = |color: Color| -> Vec<String> {
                    partition
                        .group(color)
                        .iter()
                        .map(|&i| graph.label(i).into_owned())
                        .collect()
                };
                Ok(Report {
                    bipartite: true,
                    groups: Some([labels(Color::Zero), labels(Color::One)]),
                })
            }
            Err(ColoringError::NotBipartite { .. }) => Ok(Report {
                bipartite: false,
                groups: None,
            }),
            Err(err @ ColoringError::InvalidGraph { .. }) => Err(*err),
        }
    }

    pub fn is_bipartite(&self) -> bool {
        self.bipartite
    }

    pub fn groups(&self) -> Option<&[Vec<String>; 2]> {
        self.groups.as_ref()
    }

    /// one-line summary, e.g. `group 1: Diogo, Virna | group 2: Paixao`
    pub fn summary(&self) -> String {
        match &self.groups {
            Some([first, second]) => format!(
                "group 1: {} | group 2: {}",
                first.iter().join(", "),
                second.iter().join(", ")
            ),
            None => String::from("no split"),
        }
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string(self),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(groups) = &self.groups else {
            return writeln!(f, "{NO_SPLIT_MESSAGE}");
        };

        writeln!(f, "{SPLIT_MESSAGE}")?;
        for (i, group) in groups.iter().enumerate() {
            writeln!(f, "Group {}:", i + 1)?;
            for label in group {
                writeln!(f, "- {label}")?;
            }
        }
        Ok(())
    }
}
