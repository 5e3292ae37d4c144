//! Objective function catalog.
//!
//! The optimizer identifies its objective by a 1-based index into this list;
//! the reports translate it back into a readable name.

use crate::{ReportError, Result};

/// Benchmark functions known to the optimizer, in index order (index 1 = Ackley)
pub const OBJECTIVE_FUNCTIONS: [&str; 29] = [
    "Ackley",
    "De Jong Sphere",
    "Easom",
    "Griewank",
    "Himmelblau",
    "Rastrigin",
    "Rosenbrock",
    "Schwefel",
    "Six Hump Camel Back",
    "Xin She Yang",
    "Zakharov",
    "f10",
    "f11",
    "f12",
    "f13",
    "f14",
    "f15",
    "f16",
    "f17",
    "f18",
    "f19",
    "f20",
    "f21",
    "f22",
    "f23",
    "f24",
    "f25",
    "f26",
    "f27",
];

/// Resolve a 1-based objective index to its name
pub fn objective_name(index: usize) -> Result<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| OBJECTIVE_FUNCTIONS.get(i))
        .copied()
        .ok_or(ReportError::UnknownObjective {
            index,
            len: OBJECTIVE_FUNCTIONS.len(),
        })
}

/// Find the 1-based index of a catalog entry, ignoring case
pub fn objective_index(name: &str) -> Option<usize> {
    let name = name.trim();
    OBJECTIVE_FUNCTIONS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|i| i + 1)
}

/// Accept either a 1-based index (`"7"`) or a catalog name (`"rosenbrock"`)
pub fn parse_objective(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(index) => objective_name(index).map(|_| index),
        Err(_) => objective_index(value)
            .ok_or_else(|| ReportError::UnknownObjectiveName(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_catalog_bounds() {
        assert_eq!(objective_name(1).unwrap(), "Ackley");
        assert_eq!(objective_name(29).unwrap(), "f27");
        assert_eq!(objective_name(7).unwrap(), "Rosenbrock");
    }

    #[test]
    fn test_out_of_range_index() {
        assert_matches!(
            objective_name(0),
            Err(ReportError::UnknownObjective { index: 0, len: 29 })
        );
        assert_matches!(
            objective_name(30),
            Err(ReportError::UnknownObjective { index: 30, len: 29 })
        );
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(objective_index("ackley"), Some(1));
        assert_eq!(objective_index(" Six Hump Camel Back "), Some(9));
        assert_eq!(objective_index("f27"), Some(29));
        assert_eq!(objective_index("Booth"), None);
    }

    #[test]
    fn test_parse_objective() {
        assert_eq!(parse_objective("7").unwrap(), 7);
        assert_eq!(parse_objective("rastrigin").unwrap(), 6);
        assert_eq!(parse_objective("De Jong Sphere").unwrap(), 2);
        assert_matches!(
            parse_objective("30"),
            Err(ReportError::UnknownObjective { index: 30, .. })
        );
        assert_matches!(
            parse_objective("Booth"),
            Err(ReportError::UnknownObjectiveName(name)) if name == "Booth"
        );
    }

    #[test]
    fn test_names_round_trip_through_index() {
        for (i, name) in OBJECTIVE_FUNCTIONS.iter().enumerate() {
            assert_eq!(objective_index(name), Some(i + 1));
        }
    }
}
