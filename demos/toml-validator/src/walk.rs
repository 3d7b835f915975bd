//! Visitor for traversing a TOML value tree with attribute paths.

use attrdiag::{Path, render};
use toml::{Table, Value};

/// Visitor trait for traversing TOML values.
///
/// Every method receives the [`Path`] of the node it visits. Implement the
/// `visit_*` methods you care about; the default implementations call the
/// corresponding `walk_*` methods to descend into children.
pub trait ValueVisitor {
    /// Whether the table at `path` is a map whose keys are data rather than
    /// attribute names.
    ///
    /// Keys of a map are reported as index steps (`tags[Name]`), keys of any
    /// other table as field steps (`vpc.id`).
    fn is_map(&self, path: &Path) -> bool {
        let _ = path;
        false
    }

    fn visit_table(&mut self, path: &Path, table: &Table) {
        self.walk_table(path, table);
    }

    fn visit_array(&mut self, path: &Path, array: &[Value]) {
        self.walk_array(path, array);
    }

    fn visit_value(&mut self, path: &Path, value: &Value) {
        self.walk_value(path, value);
    }

    // Walk methods traverse child nodes

    fn walk_table(&mut self, path: &Path, table: &Table) {
        let is_map = self.is_map(path);
        for (key, value) in table {
            let child = if is_map {
                path.clone().index(key.as_str())
            } else {
                path.clone().attr(key.as_str())
            };
            self.visit_value(&child, value);
        }
    }

    fn walk_array(&mut self, path: &Path, array: &[Value]) {
        for (i, value) in array.iter().enumerate() {
            self.visit_value(&path.clone().index(i), value);
        }
    }

    fn walk_value(&mut self, path: &Path, value: &Value) {
        match value {
            Value::Table(table) => self.visit_table(path, table),
            Value::Array(array) => self.visit_array(path, array),
            _ => {}
        }
    }
}

/// Collects the rendered path of every leaf value.
#[derive(Debug, Default)]
pub struct PathCollector {
    pub paths: Vec<String>,
    maps: Vec<Path>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat the table at `path` as a map.
    pub fn with_map(mut self, path: Path) -> Self {
        self.maps.push(path);
        self
    }
}

impl ValueVisitor for PathCollector {
    fn is_map(&self, path: &Path) -> bool {
        self.maps.contains(path)
    }

    fn visit_value(&mut self, path: &Path, value: &Value) {
        match value {
            Value::Table(_) | Value::Array(_) => self.walk_value(path, value),
            _ => self.paths.push(render(path)),
        }
    }
}
