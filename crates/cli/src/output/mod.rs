//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Serialize a value for machine consumption.
///
/// `Pretty` here only indents the JSON; commands with a dedicated text
/// rendering use [`pretty`] instead.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let json = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::calendar::CalendarDate;

    #[test]
    fn test_format_output_json_is_compact() {
        let date = CalendarDate::new(2024, 3, 5).unwrap();
        assert_eq!(
            format_output(&vec![date], OutputFormat::Json).unwrap(),
            r#"["2024-03-05"]"#
        );
        assert!(format_output(&vec![date], OutputFormat::Pretty)
            .unwrap()
            .contains('\n'));
    }
}
