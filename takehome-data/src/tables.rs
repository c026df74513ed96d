use std::fs::File;
use std::path::{Path, PathBuf};

use takehome_core::{
    HealthInsuranceProvider, NationalHealthInsuranceParams, Prefecture, PremiumBracket,
    PremiumTableRepository, RepositoryError, builtin_tables,
};
use tracing::info;

use crate::loader::{
    NhiParamsLoader, NhiParamsTable, PremiumBracketLoader, PremiumTables, TableLoadError,
};

/// Reference tables loaded from CSV files.
///
/// Each kind of table is optional. A kind that was not loaded is answered
/// by the built-in 2025 tables, so `CsvTables::default()` behaves exactly
/// like the built-in data.
#[derive(Debug, Clone, Default)]
pub struct CsvTables {
    premium_tables: Option<PremiumTables>,
    nhi_params: Option<NhiParamsTable>,
}

impl CsvTables {
    pub fn new(
        premium_tables: Option<PremiumTables>,
        nhi_params: Option<NhiParamsTable>,
    ) -> Self {
        Self {
            premium_tables,
            nhi_params,
        }
    }

    /// Load tables from CSV files on disk.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError`] if a file cannot be opened, does not
    /// parse, or describes an invalid table.
    pub fn from_paths(
        brackets: Option<&Path>,
        nhi: Option<&Path>,
    ) -> Result<Self, TableLoadError> {
        let premium_tables = match brackets {
            Some(path) => {
                let records = PremiumBracketLoader::parse(open(path)?)?;
                let tables = PremiumBracketLoader::into_tables(&records)?;
                info!(
                    "Loaded {} premium tables ({} brackets) from {}",
                    tables.len(),
                    records.len(),
                    path.display()
                );
                Some(tables)
            }
            None => None,
        };

        let nhi_params = match nhi {
            Some(path) => {
                let records = NhiParamsLoader::parse(open(path)?)?;
                let table = NhiParamsLoader::into_table(&records)?;
                info!("Loaded NHI parameters for {} prefectures from {}", table.len(), path.display());
                Some(table)
            }
            None => None,
        };

        Ok(Self::new(premium_tables, nhi_params))
    }

    /// Number of premium tables loaded from CSV (0 when built-in).
    pub fn premium_table_count(&self) -> usize {
        self.premium_tables.as_ref().map_or(0, |tables| tables.len())
    }

    /// Prefectures with NHI parameters loaded from CSV, sorted.
    pub fn nhi_prefectures(&self) -> Vec<Prefecture> {
        let mut prefectures: Vec<Prefecture> = self
            .nhi_params
            .as_ref()
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        prefectures.sort();
        prefectures
    }
}

fn open(path: &Path) -> Result<File, TableLoadError> {
    File::open(path).map_err(|e| TableLoadError::Io {
        path: PathBuf::from(path),
        message: e.to_string(),
    })
}

impl PremiumTableRepository for CsvTables {
    fn premium_brackets(
        &self,
        provider: HealthInsuranceProvider,
        prefecture: Prefecture,
    ) -> Result<&[PremiumBracket], RepositoryError> {
        match &self.premium_tables {
            Some(tables) => tables
                .get(&(provider, prefecture))
                .map(Vec::as_slice)
                .ok_or_else(|| RepositoryError::premium_table_not_found(provider, prefecture)),
            None => builtin_tables().premium_brackets(provider, prefecture),
        }
    }

    fn nhi_params(
        &self,
        prefecture: Prefecture,
    ) -> Result<&NationalHealthInsuranceParams, RepositoryError> {
        match &self.nhi_params {
            Some(table) => table
                .get(&prefecture)
                .ok_or_else(|| RepositoryError::nhi_params_not_found(prefecture)),
            None => builtin_tables().nhi_params(prefecture),
        }
    }
}

/// Where the calculators get their reference data.
///
/// The default uses the built-in 2025 tables for everything; each path
/// replaces one kind of table with the contents of a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablesConfig {
    /// Premium bracket CSV replacing the built-in employee tables.
    pub brackets: Option<PathBuf>,
    /// NHI parameter CSV replacing the built-in regional parameters.
    pub nhi: Option<PathBuf>,
}

impl TablesConfig {
    pub fn is_builtin(&self) -> bool {
        self.brackets.is_none() && self.nhi.is_none()
    }

    /// Open the configured tables.
    ///
    /// # Errors
    ///
    /// See [`CsvTables::from_paths`].
    pub fn open(&self) -> Result<CsvTables, TableLoadError> {
        CsvTables::from_paths(self.brackets.as_deref(), self.nhi.as_deref())
    }
}
