use std::collections::HashSet;

use serde::{Serialize, Serializer};

/// Duplicate-free image filenames, in order of first occurrence.
///
/// ```
/// use contentrefs::ImageFilenames;
///
/// let mut names = ImageFilenames::new();
/// assert!(names.insert("b.png"));
/// assert!(names.insert("a.png"));
/// assert!(!names.insert("b.png"));
/// assert_eq!(names.sorted(), ["a.png", "b.png"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageFilenames {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ImageFilenames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filename. Returns `false` if it was already present.
    pub fn insert(&mut self, filename: impl Into<String>) -> bool {
        let filename = filename.into();
        if self.seen.contains(&filename) {
            return false;
        }
        self.seen.insert(filename.clone());
        self.order.push(filename);
        true
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.seen.contains(filename)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Filenames in first-occurrence order.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }

    /// Filenames sorted lexicographically.
    pub fn sorted(&self) -> Vec<String> {
        let mut sorted = self.order.clone();
        sorted.sort();
        sorted
    }

    /// Add every filename from `other`.
    pub fn merge(&mut self, other: ImageFilenames) {
        self.extend(other.order);
    }
}

/// Equality ignores insertion order.
impl PartialEq for ImageFilenames {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for ImageFilenames {}

impl<S: Into<String>> Extend<S> for ImageFilenames {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for filename in iter {
            self.insert(filename);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ImageFilenames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

impl IntoIterator for ImageFilenames {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a ImageFilenames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl Serialize for ImageFilenames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}
