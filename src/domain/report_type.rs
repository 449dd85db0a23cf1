//! Positioning report catalogue: dataset codes and type categories.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetCode {
    /// Futures and options, disaggregated
    Fon,
    /// Futures and options, legacy
    Lfon,
    /// Concentration ratios
    Fcr,
    /// Commodity index traders supplement
    Cits,
}

impl DatasetCode {
    pub const ALL: [DatasetCode; 4] = [
        DatasetCode::Fon,
        DatasetCode::Lfon,
        DatasetCode::Fcr,
        DatasetCode::Cits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetCode::Fon => "QDL/FON",
            DatasetCode::Lfon => "QDL/LFON",
            DatasetCode::Fcr => "QDL/FCR",
            DatasetCode::Cits => "QDL/CITS",
        }
    }
}

impl fmt::Display for DatasetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        DatasetCode::ALL
            .into_iter()
            .find(|c| c.as_str() == upper || c.as_str().trim_start_matches("QDL/") == upper)
            .ok_or_else(|| format!("unknown dataset code: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    /// Futures only
    F,
    /// Futures and options combined
    Fo,
    /// Commodity index traders
    Cits,
}

impl BaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::F => "F",
            BaseType::Fo => "FO",
            BaseType::Cits => "CITS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// All positions
    All,
    /// Changes in positions
    Chg,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::All => "ALL",
            Measure::Chg => "CHG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCategory {
    /// Concentration ratios
    Cr,
    /// Number of traders
    Nt,
    /// Open interest
    Oi,
}

impl SubCategory {
    pub fn suffix(&self) -> &'static str {
        match self {
            SubCategory::Cr => "_CR",
            SubCategory::Nt => "_NT",
            SubCategory::Oi => "_OI",
        }
    }
}

impl FromStr for BaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "F" => Ok(BaseType::F),
            "FO" => Ok(BaseType::Fo),
            "CITS" => Ok(BaseType::Cits),
            _ => Err(format!("unknown base type: {}", s)),
        }
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Measure::All),
            "CHG" => Ok(Measure::Chg),
            _ => Err(format!("unknown measure: {}", s)),
        }
    }
}

impl FromStr for SubCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('_').to_uppercase().as_str() {
            "CR" => Ok(SubCategory::Cr),
            "NT" => Ok(SubCategory::Nt),
            "OI" => Ok(SubCategory::Oi),
            _ => Err(format!("unknown sub-category: {}", s)),
        }
    }
}

/// Type-category selectors for a report variant.
///
/// The plain `{prefix}_{measure}` option comes first, followed by one option
/// per requested sub-category.
pub fn type_category_options(
    base: BaseType,
    legacy: bool,
    measure: Measure,
    sub_categories: &[SubCategory],
) -> Vec<String> {
    let prefix = if legacy {
        format!("{}_L", base.as_str())
    } else {
        base.as_str().to_string()
    };

    std::iter::once("")
        .chain(sub_categories.iter().map(|s| s.suffix()))
        .map(|suffix| format!("{}_{}{}", prefix, measure.as_str(), suffix))
        .collect()
}
