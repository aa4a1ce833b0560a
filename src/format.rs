//! Text renderings of the catalog.
//!
//! Every output is a set of lines joined by `\n` with no trailing newline.
//! The labels are exact and matched byte-for-byte by consumers.

use crate::domain::{Reservation, Tool};

const LIBRARY_HEADER: &str = "Tool Library:";
const TOOL_LIST_HEADER: &str = "Tool List:";
const SEPARATOR: &str = "---";

/// Numbered availability summary of `tools`, 1-based by position
pub fn format_library(tools: &[Tool]) -> String {
    let mut lines = Vec::with_capacity(tools.len() + 1);
    lines.push(LIBRARY_HEADER.to_string());
    lines.extend(
        tools
            .iter()
            .enumerate()
            .map(|(i, tool)| format!("{}. {}", i + 1, tool.summarize())),
    );
    lines.join("\n")
}

/// Catalog blocks for `tools`, each followed by a separator line
pub fn format_tool_list(tools: &[Tool]) -> String {
    let mut lines = Vec::with_capacity(tools.len() * 2 + 1);
    lines.push(TOOL_LIST_HEADER.to_string());
    for tool in tools {
        lines.push(tool.render());
        lines.push(SEPARATOR.to_string());
    }
    lines.join("\n")
}

/// Return dates booked against the tool called `name`
pub fn format_reservations(name: &str, reservations: &[Reservation]) -> String {
    let mut lines = Vec::with_capacity(reservations.len() + 1);
    lines.push(format!("Reservations for {}:", name));
    lines.extend(
        reservations
            .iter()
            .map(|reservation| format!("- Return Date: {}", reservation.return_date())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_saw_reservations() -> Vec<Reservation> {
        vec![
            Reservation::new("Hoppleypawz", "June 01"),
            Reservation::new("Wyndguyxx", "June 11"),
            Reservation::new("Laverbean2001", "June 13"),
        ]
    }

    #[test]
    fn test_format_library_single_tool() {
        let tools = vec![Tool::with_reservations("Band Saw", 35, band_saw_reservations())];
        assert_eq!(format_library(&tools), "Tool Library:\n1. Band Saw (Available: 32)");
    }

    #[test]
    fn test_format_library_empty() {
        assert_eq!(format_library(&[]), "Tool Library:");
    }

    #[test]
    fn test_format_tool_list_single_tool() {
        let tools = vec![Tool::new("Band Saw", 35)];
        assert_eq!(
            format_tool_list(&tools),
            "Tool List:\nTool: Band Saw\nQuantity: 35\nReserve Now!\nDonate Tool!\n---"
        );
    }

    #[test]
    fn test_format_tool_list_multiple_tools() {
        let tools = vec![Tool::new("Hammer", 35), Tool::new("Axe", 18), Tool::new("Bow", 17)];
        let expected = "Tool List:\nTool: Hammer\nQuantity: 35\nReserve Now!\nDonate Tool!\n---\n\
                        Tool: Axe\nQuantity: 18\nReserve Now!\nDonate Tool!\n---\n\
                        Tool: Bow\nQuantity: 17\nReserve Now!\nDonate Tool!\n---";
        assert_eq!(format_tool_list(&tools), expected);
    }

    #[test]
    fn test_format_tool_list_ignores_reservations() {
        let tools = vec![Tool::with_reservations("Band Saw", 35, band_saw_reservations())];
        assert!(format_tool_list(&tools).contains("Quantity: 35"));
    }

    #[test]
    fn test_format_reservations_single() {
        let reservations = vec![Reservation::new("Hoppleypawz", "June 01")];
        assert_eq!(
            format_reservations("Band Saw", &reservations),
            "Reservations for Band Saw:\n- Return Date: June 01"
        );
    }

    #[test]
    fn test_format_reservations_multiple() {
        assert_eq!(
            format_reservations("Band Saw", &band_saw_reservations()),
            "Reservations for Band Saw:\n- Return Date: June 01\n- Return Date: June 11\n- Return Date: June 13"
        );
    }

    #[test]
    fn test_format_reservations_none() {
        assert_eq!(format_reservations("Axe", &[]), "Reservations for Axe:");
    }
}
