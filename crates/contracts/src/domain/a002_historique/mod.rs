pub mod aggregate;
pub mod criteria;

pub use aggregate::HistoriqueEntree;
pub use criteria::HistoriqueCriteria;
