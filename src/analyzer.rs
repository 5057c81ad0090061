//! Upstream analyzers whose results may be offered to a report logger.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The analyzers of the surrounding tool. Loggers accept results only from
/// the kinds they list in their accepted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyzerKind {
    /// Package and type dependencies.
    Dependency,
    Coupling,
    CyclomaticComplexity,
    Hierarchy,
    Inheritance,
    NodeCount,
    NodeLoc,
    NpathComplexity,
    ClassLevel,
    CodeRank,
    CrapIndex,
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalyzerKind::Dependency => "dependency",
            AnalyzerKind::Coupling => "coupling",
            AnalyzerKind::CyclomaticComplexity => "cyclomatic-complexity",
            AnalyzerKind::Hierarchy => "hierarchy",
            AnalyzerKind::Inheritance => "inheritance",
            AnalyzerKind::NodeCount => "node-count",
            AnalyzerKind::NodeLoc => "node-loc",
            AnalyzerKind::NpathComplexity => "npath-complexity",
            AnalyzerKind::ClassLevel => "class-level",
            AnalyzerKind::CodeRank => "code-rank",
            AnalyzerKind::CrapIndex => "crap-index",
        };
        f.write_str(name)
    }
}
