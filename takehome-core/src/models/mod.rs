mod health_insurance_provider;
mod nhi_params;
mod prefecture;
mod premium_bracket;
mod tax_input;
mod tax_result;

pub use health_insurance_provider::HealthInsuranceProvider;
pub use nhi_params::{NationalHealthInsuranceParams, NhiPortion};
pub use prefecture::Prefecture;
pub use premium_bracket::PremiumBracket;
pub use tax_input::TaxInput;
pub use tax_result::{FurusatoNozeiDetails, ResidenceTaxDetails, TakeHomeResult};
