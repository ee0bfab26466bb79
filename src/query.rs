//! Query string construction for search endpoints.

/// Insertion-ordered search parameters for `/animals` and `/organizations`.
///
/// # Example
///
/// ```
/// use petfinder::SearchParams;
///
/// let mut params = SearchParams::new();
/// params.add_param("type", "Dog");
/// params.add_param("coat", "Medium");
/// assert_eq!(params.create_query_string(), "?type=Dog&coat=Medium");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: Vec<(String, Option<String>)>,
}

impl SearchParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter. Setting an existing key replaces its value in place.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set(key.into(), Some(value.into()))
    }

    /// Set a parameter whose value may be absent; `None` renders as `key=`.
    pub fn add_optional_param(
        &mut self,
        key: impl Into<String>,
        value: Option<String>,
    ) -> &mut Self {
        self.set(key.into(), value)
    }

    fn set(&mut self, key: String, value: Option<String>) -> &mut Self {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Builder-style variant of [`add_param`](Self::add_param).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_param(key, value);
        self
    }

    /// Look up the value set for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Render as `?k1=v1&k2=v2`, or `?` when empty.
    ///
    /// Keys and values are percent-encoded. A key without a value renders
    /// as `k=`.
    pub fn create_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v.as_deref().unwrap_or_default())
                )
            })
            .collect();

        format!("?{}", pairs.join("&"))
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.add_param(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_insertion_order() {
        let mut params = SearchParams::new();
        params.add_param("type", "Dog".to_string());
        params.add_param("coat", "Medium".to_string());
        assert_eq!(params.create_query_string(), "?type=Dog&coat=Medium");
    }

    #[test]
    fn test_empty_query_string() {
        assert_eq!(SearchParams::new().create_query_string(), "?");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut params = SearchParams::new();
        params.add_param("location", "40202".to_string());
        params.add_param("distance", "10".to_string());
        params.add_param("location", "10001".to_string());

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("location"), Some("10001"));
        assert_eq!(params.create_query_string(), "?location=10001&distance=10");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let mut params = SearchParams::new();
        params.add_optional_param("location", None);
        params.add_param("sort", "distance".to_string());
        assert_eq!(params.create_query_string(), "?location=&sort=distance");
        assert_eq!(params.get("location"), None);
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = SearchParams::new()
            .with("location", "Louisville, KY")
            .with("name", "a&b=c");
        assert_eq!(
            params.create_query_string(),
            "?location=Louisville%2C%20KY&name=a%26b%3Dc"
        );
    }

    #[test]
    fn test_from_iter() {
        let params: SearchParams = [("type", "Cat"), ("age", "baby")].into_iter().collect();
        assert_eq!(params.create_query_string(), "?type=Cat&age=baby");
    }
}
