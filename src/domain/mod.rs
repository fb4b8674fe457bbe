pub mod dismissal;
