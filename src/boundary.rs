use serde::{Deserialize, Serialize};
use tracing::error;

use crate::catalog::ProductRecord;
use crate::errors::{PricingError, Result};

/// spreadsheet formats accepted by the price-update pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadsheetKind {
    Xlsx,
    Xls,
    Csv,
}

impl SpreadsheetKind {
    /// classify a file by its extension, case-insensitive
    pub fn from_file_name(file_name: &str) -> Option<SpreadsheetKind> {
        let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())?;
        match extension.as_str() {
            "xlsx" => Some(SpreadsheetKind::Xlsx),
            "xls" => Some(SpreadsheetKind::Xls),
            "csv" => Some(SpreadsheetKind::Csv),
            _ => None,
        }
    }
}

/// a price sheet validated and ready to hand to the upload sink
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSheet {
    file_name: String,
    kind: SpreadsheetKind,
    contents: Vec<u8>,
}

impl PriceSheet {
    /// validate the file name before any upload is attempted
    pub fn new(file_name: impl Into<String>, contents: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let kind = SpreadsheetKind::from_file_name(&file_name).ok_or_else(|| {
            error!(%file_name, "rejected price sheet with unsupported extension");
            PricingError::UnsupportedSpreadsheet {
                file_name: file_name.clone(),
            }
        })?;

        Ok(Self {
            file_name,
            kind,
            contents,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn kind(&self) -> SpreadsheetKind {
        self.kind
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

/// read side of the product catalog
///
/// Implementations talk to whatever hosts the records; the crate only
/// requires that rows come back in the normalized schema, newest first.
pub trait ProductSource {
    fn fetch_products(&self) -> Result<Vec<ProductRecord>>;
}

/// upload sink for price-update sheets
///
/// One sheet per request, success or failure, no structured payload back.
/// Failures surface to the user as a notice; they are never retried
/// automatically.
pub trait PriceSheetSink {
    fn upload(&self, sheet: &PriceSheet) -> Result<()>;
}

/// credential check gating the storefront
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_kind_from_file_name() {
        assert_eq!(SpreadsheetKind::from_file_name("precos.xlsx"), Some(SpreadsheetKind::Xlsx));
        assert_eq!(SpreadsheetKind::from_file_name("PRECOS.XLS"), Some(SpreadsheetKind::Xls));
        assert_eq!(
            SpreadsheetKind::from_file_name("tabela.semanal.csv"),
            Some(SpreadsheetKind::Csv)
        );
        assert_eq!(SpreadsheetKind::from_file_name("precos.pdf"), None);
        assert_eq!(SpreadsheetKind::from_file_name("sem_extensao"), None);
    }

    #[test]
    fn test_price_sheet_validation() {
        let sheet = PriceSheet::new("precos.csv", b"produto;preco".to_vec()).unwrap();
        assert_eq!(sheet.kind(), SpreadsheetKind::Csv);
        assert_eq!(sheet.file_name(), "precos.csv");
        assert_eq!(sheet.contents(), b"produto;preco");

        let rejected = PriceSheet::new("precos.pdf", Vec::new());
        assert!(matches!(
            rejected,
            Err(PricingError::UnsupportedSpreadsheet { .. })
        ));
    }

    struct FixedCredentials;

    impl CredentialVerifier for FixedCredentials {
        fn verify(&self, username: &str, password: &str) -> bool {
            username == "vendas" && password == "segredo"
        }
    }

    #[test]
    fn test_credential_verifier_contract() {
        let verifier = FixedCredentials;
        assert!(verifier.verify("vendas", "segredo"));
        assert!(!verifier.verify("vendas", "errado"));
    }
}
