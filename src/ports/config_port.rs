//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// Section names, sorted.
    fn sections(&self) -> Vec<String>;

    /// Key/value pairs of one section, sorted by key. Keys without a value
    /// are omitted.
    fn entries(&self, section: &str) -> Vec<(String, String)>;
}
