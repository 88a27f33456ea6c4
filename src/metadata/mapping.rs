use serde::Serialize;

/// How a column gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    /// Assigned by the store on insert; read-only from the entity's side.
    Identity,
    /// Supplied by the caller.
    Supplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub name: &'static str,
    pub nullable: bool,
    pub generation: Generation,
}

/// Row layout handed to the persistence collaborator at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableMapping {
    pub table: &'static str,
    pub columns: &'static [ColumnMapping],
}

/// Mapping of [`crate::domain::User`] onto the `users` table.
pub const USER_TABLE: TableMapping = TableMapping {
    table: "users",
    columns: &[
        ColumnMapping {
            name: "id",
            nullable: false,
            generation: Generation::Identity,
        },
        ColumnMapping {
            name: "name",
            nullable: false,
            generation: Generation::Supplied,
        },
        ColumnMapping {
            name: "email",
            nullable: false,
            generation: Generation::Supplied,
        },
    ],
};

impl TableMapping {
    #[allow(dead_code)]
    pub fn column(&self, name: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[allow(dead_code)]
    pub fn identity_column(&self) -> Option<&ColumnMapping> {
        self.columns
            .iter()
            .find(|c| c.generation == Generation::Identity)
    }

    /// Non-nullable columns the caller has to fill, in declaration order.
    pub fn required_columns(&self) -> impl Iterator<Item = &ColumnMapping> + '_ {
        self.columns
            .iter()
            .filter(|c| !c.nullable && c.generation == Generation::Supplied)
    }
}
