//! Domain error types.
//!
//! Only the I/O edges produce errors. Range resolution and highlighting
//! degrade to omission instead.

/// Top-level error type for cotmonitor.
#[derive(Debug, thiserror::Error)]
pub enum CotError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {dataset_code} contract {contract_code} ({type_category})")]
    NoData {
        dataset_code: String,
        contract_code: String,
        type_category: String,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("period file error in {file}: {reason}")]
    PeriodFile { file: String, reason: String },

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid instrument: {reason}")]
    InstrumentInvalid { reason: String },

    #[error("instrument store error: {reason}")]
    InstrumentStore { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&CotError> for std::process::ExitCode {
    fn from(err: &CotError) -> Self {
        let code: u8 = match err {
            CotError::Io(_) => 1,
            CotError::ConfigParse { .. }
            | CotError::ConfigMissing { .. }
            | CotError::ConfigInvalid { .. }
            | CotError::PeriodFile { .. } => 2,
            CotError::Data { .. } | CotError::NoData { .. } => 3,
            CotError::UnknownInstrument(_)
            | CotError::InstrumentInvalid { .. }
            | CotError::InstrumentStore { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
