use crate::value::Value;

///
/// Args
///
/// Keyword arguments for record construction.
/// Insertion order is kept; inserting a name twice replaces the earlier
/// value, so every name appears at most once.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, Value)>,
}

impl Args {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace; returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();

        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((name, value));

        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Args {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (k, v) in iter {
            args.insert(k, v);
        }

        args
    }
}

impl<K, V> Extend<(K, V)> for Args
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

// args
/// Build `Args` inline: `args! { "name" => "Ada", "age" => 36 }`.
#[macro_export]
macro_rules! args {
    () => {
        $crate::record::Args::new()
    };
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {{
        let mut args = $crate::record::Args::new();
        $( args.insert($name, $value); )+
        args
    }};
}
