pub mod fastatan;
