pub mod lqs;
