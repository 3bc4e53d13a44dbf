pub mod emission;
