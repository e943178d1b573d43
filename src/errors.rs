use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("catalog unavailable: {message}")]
    CatalogUnavailable {
        message: String,
    },

    #[error("price sheet upload failed: {message}")]
    UploadFailed {
        message: String,
    },

    #[error("unsupported spreadsheet format: {file_name}")]
    UnsupportedSpreadsheet {
        file_name: String,
    },

    #[error("invalid rate schedule: {message}")]
    InvalidSchedule {
        message: String,
    },
}

/// user-dismissable failure notification
///
/// External failures are shown to sales staff as a transient notice, never
/// retried automatically and never fatal to the quoting flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl PricingError {
    /// render as a human-readable notice for the storefront
    pub fn notice(&self) -> Notice {
        match self {
            PricingError::CatalogUnavailable { .. } => Notice {
                title: "Erro ao carregar produtos".to_string(),
                description: "Tente novamente.".to_string(),
            },
            PricingError::UploadFailed { .. } => Notice {
                title: "Erro ao enviar arquivo".to_string(),
                description: "Não foi possível enviar o arquivo. Tente novamente.".to_string(),
            },
            PricingError::UnsupportedSpreadsheet { .. } => Notice {
                title: "Formato inválido".to_string(),
                description: "Por favor, selecione um arquivo Excel (.xlsx, .xls) ou CSV (.csv)"
                    .to_string(),
            },
            PricingError::InvalidSchedule { message } => Notice {
                title: "Tabela de taxas inválida".to_string(),
                description: message.clone(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
