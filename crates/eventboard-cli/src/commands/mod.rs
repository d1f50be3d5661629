pub mod buckets;
pub mod list;
pub mod locations;
pub mod options;
pub mod people;
pub mod watch;
pub mod week;
