pub mod a001_contribuable;
pub mod a002_historique;
