pub mod d400_statistiques;

pub use d400_statistiques::StatistiquesDashboard;
