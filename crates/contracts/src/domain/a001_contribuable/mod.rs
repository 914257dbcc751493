pub mod aggregate;
pub mod criteria;

pub use aggregate::{days_in_treatment, Contribuable, DossierPayload};
pub use criteria::{DateField, SearchCriteria};
