mod probe;

pub use probe::OsSystemProbe;
