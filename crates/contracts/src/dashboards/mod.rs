pub mod d400_traffic;
