//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value as JSON: compact for `json`, indented for `pretty`.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use departures_core::item::Passenger;

    use super::*;

    #[test]
    fn test_format_output_json_is_compact() {
        let passenger = Passenger::new("Aiko", "window seat");

        assert_eq!(
            format_output(&passenger, OutputFormat::Json),
            r#"{"namelist":"Aiko","comment":"window seat"}"#
        );
        assert!(format_output(&passenger, OutputFormat::Pretty).contains('\n'));
    }
}
