use std::collections::HashMap;

/// Optional bring-up property lookup, the in-process stand-in for a
/// device-tree overlay. `probe()` reads `sampling-ms` and `threshold-mC`
/// through this seam if present, leaving everything else at its default.
pub trait BindingProperties {
    fn get_u32(&self, key: &str) -> Option<u32>;
    fn get_i32(&self, key: &str) -> Option<i32>;
}

/// `HashMap`-backed [`BindingProperties`] used by the demo binary and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticBindingProperties {
    u32_props: HashMap<String, u32>,
    i32_props: HashMap<String, i32>,
}

impl StaticBindingProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_u32(mut self, key: impl Into<String>, value: u32) -> Self {
        self.u32_props.insert(key.into(), value);
        self
    }

    pub fn with_i32(mut self, key: impl Into<String>, value: i32) -> Self {
        self.i32_props.insert(key.into(), value);
        self
    }
}

impl BindingProperties for StaticBindingProperties {
    fn get_u32(&self, key: &str) -> Option<u32> {
        self.u32_props.get(key).copied()
    }

    fn get_i32(&self, key: &str) -> Option<i32> {
        self.i32_props.get(key).copied()
    }
}

/// A lookup with no properties set; bring-up falls back to every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBindingProperties;

impl BindingProperties for NoBindingProperties {
    fn get_u32(&self, _key: &str) -> Option<u32> {
        None
    }

    fn get_i32(&self, _key: &str) -> Option<i32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_properties_return_only_what_was_set() {
        let props = StaticBindingProperties::new()
            .with_u32("sampling-ms", 250)
            .with_i32("threshold-mC", 10_000);
        assert_eq!(props.get_u32("sampling-ms"), Some(250));
        assert_eq!(props.get_i32("threshold-mC"), Some(10_000));
        assert_eq!(props.get_u32("unknown"), None);
    }

    #[test]
    fn no_properties_always_empty() {
        let props = NoBindingProperties;
        assert_eq!(props.get_u32("anything"), None);
        assert_eq!(props.get_i32("anything"), None);
    }
}
