use super::core::{default_max_report_frames, LogsleuthConfig};
use crate::core::FormatHint;

/// Collect every problem with a parsed configuration.
pub fn validate_config(config: &LogsleuthConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(analysis) = &config.analysis {
        if analysis.max_report_frames == 0 {
            errors.push("analysis.max_report_frames must be at least 1".to_string());
        }
        if let Err(e) = analysis.default_format.parse::<FormatHint>() {
            errors.push(format!("analysis.default_format: {}", e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Replace invalid values with their defaults, logging each replacement.
pub fn normalize_config(mut config: LogsleuthConfig) -> LogsleuthConfig {
    if let Some(analysis) = config.analysis.as_mut() {
        if analysis.max_report_frames == 0 {
            log::warn!(
                "analysis.max_report_frames must be at least 1. Using {}.",
                default_max_report_frames()
            );
            analysis.max_report_frames = default_max_report_frames();
        }
        if analysis.default_format.parse::<FormatHint>().is_err() {
            log::warn!(
                "Invalid analysis.default_format '{}'. Using auto.",
                analysis.default_format
            );
            analysis.default_format = "auto".to_string();
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::AnalysisSection;

    fn with_analysis(default_format: &str, max_report_frames: usize) -> LogsleuthConfig {
        LogsleuthConfig {
            analysis: Some(AnalysisSection {
                default_format: default_format.to_string(),
                max_report_frames,
            }),
            output: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LogsleuthConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_config(&with_analysis("yaml", 0)).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_normalize_replaces_invalid_values() {
        let config = normalize_config(with_analysis("yaml", 0));
        assert_eq!(config, with_analysis("auto", 10));
    }
}
