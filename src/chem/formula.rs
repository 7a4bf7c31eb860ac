//! Molecular formula parsing.
//!
//! Formulas follow the identifier formula-layer conventions: Hill-order
//! element counts (`C2H6O`), with multi-component formulas joined by dots
//! and optional leading component multipliers (`C2H6O.2H2O`).

use super::element::Element;
use crate::error::Error;

/// One (element, count) pair of a parsed formula.
pub type FormulaEntry = (Element, u32);

/// Parses a formula string into (element, count) pairs.
///
/// Components are expanded: `2H2O` contributes four H and two O. Entries
/// are returned in the order encountered; repeated elements are not merged
/// since only totals matter downstream.
pub fn parse(formula: &str) -> Result<Vec<FormulaEntry>, Error> {
    if formula.is_empty() {
        return Err(malformed(formula, "empty formula"));
    }

    let mut entries = Vec::new();
    for component in formula.split('.') {
        let (multiplier, rest) = split_leading_count(component);
        if rest.is_empty() {
            return Err(malformed(formula, format!("empty component '{component}'")));
        }
        let start = entries.len();
        parse_component(rest, &mut entries).map_err(|detail| malformed(formula, detail))?;
        if multiplier != 1 {
            for (_, count) in &mut entries[start..] {
                *count *= multiplier;
            }
        }
    }
    Ok(entries)
}

/// Total electron count of a formula at the given molecular charge.
pub fn electron_count(formula: &str, chg: i32) -> Result<u32, Error> {
    let nuclear: i64 = parse(formula)?
        .iter()
        .map(|(elem, count)| i64::from(elem.atomic_number()) * i64::from(*count))
        .sum();
    let electrons = nuclear - i64::from(chg);
    u32::try_from(electrons)
        .map_err(|_| malformed(formula, format!("charge {chg} exceeds electron count")))
}

fn parse_component(component: &str, entries: &mut Vec<FormulaEntry>) -> Result<(), String> {
    let chars: Vec<char> = component.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_uppercase() {
            return Err(format!("unexpected character '{}'", chars[i]));
        }
        let mut sym = String::from(chars[i]);
        i += 1;
        while i < chars.len() && chars[i].is_ascii_lowercase() {
            sym.push(chars[i]);
            i += 1;
        }
        let elem: Element = sym.parse().map_err(|e: Error| e.to_string())?;

        let mut digits = String::new();
        while i < chars.len() && chars[i].is_ascii_digit() {
            digits.push(chars[i]);
            i += 1;
        }
        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|_| format!("bad count '{digits}'"))?
        };
        if count == 0 {
            return Err(format!("zero count for element '{sym}'"));
        }
        entries.push((elem, count));
    }
    Ok(())
}

fn split_leading_count(component: &str) -> (u32, &str) {
    let digits: String = component.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => (n, &component[digits.len()..]),
        _ => (1, component),
    }
}

fn malformed(formula: &str, detail: impl Into<String>) -> Error {
    Error::malformed_identifier(formula, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(formula: &str, sym: &str) -> u32 {
        parse(formula)
            .unwrap()
            .iter()
            .filter(|(e, _)| e.symbol() == sym)
            .map(|(_, n)| n)
            .sum()
    }

    #[test]
    fn parses_simple_formula() {
        assert_eq!(count_of("C2H6O", "C"), 2);
        assert_eq!(count_of("C2H6O", "H"), 6);
        assert_eq!(count_of("C2H6O", "O"), 1);
    }

    #[test]
    fn parses_two_letter_symbols() {
        assert_eq!(count_of("CH3Cl", "Cl"), 1);
        assert_eq!(count_of("Fe2O3", "Fe"), 2);
    }

    #[test]
    fn parses_multi_component_with_multiplier() {
        assert_eq!(count_of("C2H6O.2H2O", "H"), 10);
        assert_eq!(count_of("C2H6O.2H2O", "O"), 3);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("").is_err());
        assert!(parse("2").is_err());
        assert!(parse("c2h6").is_err());
        assert!(parse("C2H6O.").is_err());
        assert!(parse("C0H4").is_err());
        assert!(parse("Xx2").is_err());
    }

    #[test]
    fn counts_electrons() {
        assert_eq!(electron_count("H2O", 0).unwrap(), 10);
        assert_eq!(electron_count("H2O", 1).unwrap(), 9);
        assert_eq!(electron_count("H2O", -1).unwrap(), 11);
        assert_eq!(electron_count("CH4", 0).unwrap(), 10);
    }

    #[test]
    fn electron_count_cannot_go_negative() {
        assert!(electron_count("H", 2).is_err());
    }
}
