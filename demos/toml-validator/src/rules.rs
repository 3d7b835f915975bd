//! Rules for the network description format.
//!
//! ```toml
//! [vpc]
//! id = "vpc-123"          # conflicts with cidr
//!
//! [vpc.tags]              # map; "Name" is required
//! Name = "main"
//!
//! [encryption]
//! type = "KMS"            # requires kms_key_id
//!
//! [[subnets]]             # each needs a name; port is 1-65535
//! name = "public"
//! port = 443
//!
//! [[ingress]]             # needs cidr_blocks or security_groups
//! cidr_blocks = ["0.0.0.0/0"]
//! ```

use attrdiag::{
    Diagnostic, EscalationConfig, Path, PathStep, invalid_value_attribute_error,
    new_at_least_one_of_children_error, new_attribute_required_when_error,
    new_incorrect_value_type_attribute_error,
};
use toml::{Table, Value};

use crate::walk::ValueVisitor;

const INGRESS_SOURCES: [&str; 2] = ["cidr_blocks", "security_groups"];

/// Where a table sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind<'a> {
    /// `[name]` or `[parent.name]`.
    Named(&'a str),
    /// An element of `[[name]]`.
    Element(&'a str),
}

fn table_kind(path: &Path) -> Option<TableKind<'_>> {
    match path.steps() {
        [.., PathStep::Field(name)] => Some(TableKind::Named(name)),
        [.., PathStep::Field(name), PathStep::Index(_)] => Some(TableKind::Element(name)),
        _ => None,
    }
}

/// Spells a value the way a user wrote it, without quotes around strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Visitor that checks a network description and collects diagnostics.
#[derive(Debug, Default)]
pub struct NetworkValidator {
    config: EscalationConfig,
    diagnostics: Vec<Diagnostic>,
}

impl NetworkValidator {
    pub fn new(config: EscalationConfig) -> Self {
        Self {
            config,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn check_vpc(&mut self, path: &Path, table: &Table) {
        if let (Some(_), Some(cidr)) = (table.get("id"), table.get("cidr")) {
            let diag = self.config.attribute_conflicts_when(
                path.clone().attr("id"),
                &path.clone().attr("cidr"),
                &display_value(cidr),
            );
            self.diagnostics.push(diag);
        }
    }

    fn check_tags(&mut self, path: &Path, table: &Table) {
        if !table.contains_key("Name") {
            let diag = self.config.attribute_required(path.clone(), "Name");
            self.diagnostics.push(diag);
        }
        for (key, value) in table {
            if !value.is_str() {
                self.diagnostics.push(new_incorrect_value_type_attribute_error(
                    path.clone().index(key.as_str()),
                    "string",
                ));
            }
        }
    }

    fn check_encryption(&mut self, path: &Path, table: &Table) {
        let Some(Value::String(kind)) = table.get("type") else {
            return;
        };
        if kind == "KMS" && !table.contains_key("kms_key_id") {
            self.diagnostics.push(new_attribute_required_when_error(
                &path.clone().attr("kms_key_id"),
                path.clone().attr("type"),
                kind,
            ));
        }
    }

    fn check_subnet(&mut self, path: &Path, table: &Table) {
        if !table.contains_key("name") {
            let diag = self.config.attribute_required(path.clone(), "name");
            self.diagnostics.push(diag);
        }
        if let Some(port) = table.get("port") {
            self.check_port(path.clone().attr("port"), port);
        }
    }

    fn check_port(&mut self, path: Path, value: &Value) {
        let diag = match value {
            Value::Integer(port) if (1..=65535).contains(port) => return,
            Value::Integer(port) => {
                invalid_value_attribute_error!(path, "port {port} is outside the range 1-65535")
            }
            _ => new_incorrect_value_type_attribute_error(path, "number"),
        };
        self.diagnostics.push(diag);
    }

    fn check_ingress(&mut self, path: &Path, table: &Table) {
        if INGRESS_SOURCES.iter().all(|key| !table.contains_key(*key)) {
            let choices = INGRESS_SOURCES.iter().map(|key| path.clone().attr(*key));
            self.diagnostics
                .push(new_at_least_one_of_children_error(path.clone(), choices));
        }
    }
}

impl ValueVisitor for NetworkValidator {
    fn is_map(&self, path: &Path) -> bool {
        table_kind(path) == Some(TableKind::Named("tags"))
    }

    fn visit_table(&mut self, path: &Path, table: &Table) {
        match table_kind(path) {
            Some(TableKind::Named("vpc")) => self.check_vpc(path, table),
            Some(TableKind::Named("tags")) => self.check_tags(path, table),
            Some(TableKind::Named("encryption")) => self.check_encryption(path, table),
            Some(TableKind::Element("subnets")) => self.check_subnet(path, table),
            Some(TableKind::Element("ingress")) => self.check_ingress(path, table),
            _ => {}
        }
        self.walk_table(path, table);
    }
}
