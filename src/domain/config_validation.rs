//! Configuration validation.
//!
//! Checks the `[data]` and `[chart]` sections before any file is read.

use crate::domain::error::CotError;
use crate::domain::report_type::DatasetCode;
use crate::ports::config_port::ConfigPort;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), CotError> {
    validate_dataset_code(config)?;
    validate_type_category(config)?;
    validate_contract(config)?;
    Ok(())
}

pub fn validate_chart_config(config: &dyn ConfigPort) -> Result<(), CotError> {
    for key in ["width", "height"] {
        let value = config.get_double("chart", key, 1.0);
        if value <= 0.0 {
            return Err(CotError::ConfigInvalid {
                section: "chart".to_string(),
                key: key.to_string(),
                reason: format!("{} must be positive", key),
            });
        }
    }
    Ok(())
}

fn validate_dataset_code(config: &dyn ConfigPort) -> Result<(), CotError> {
    match config.get_string("data", "dataset_code") {
        Some(s) if !s.trim().is_empty() => {
            s.parse::<DatasetCode>()
                .map_err(|reason| CotError::ConfigInvalid {
                    section: "data".to_string(),
                    key: "dataset_code".to_string(),
                    reason,
                })?;
            Ok(())
        }
        _ => Err(CotError::ConfigMissing {
            section: "data".to_string(),
            key: "dataset_code".to_string(),
        }),
    }
}

fn validate_type_category(config: &dyn ConfigPort) -> Result<(), CotError> {
    match config.get_string("data", "type_category") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(CotError::ConfigMissing {
            section: "data".to_string(),
            key: "type_category".to_string(),
        }),
    }
}

fn validate_contract(config: &dyn ConfigPort) -> Result<(), CotError> {
    let present = |key: &str| {
        config
            .get_string("data", key)
            .is_some_and(|v| !v.trim().is_empty())
    };

    if present("instrument") && !present("instruments_file") {
        return Err(CotError::ConfigMissing {
            section: "data".to_string(),
            key: "instruments_file".to_string(),
        });
    }
    if present("instrument") || present("contract_code") || present("instruments_file") {
        return Ok(());
    }
    Err(CotError::ConfigMissing {
        section: "data".to_string(),
        key: "contract_code".to_string(),
    })
}
