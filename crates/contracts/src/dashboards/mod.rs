pub mod d400_statistiques;
