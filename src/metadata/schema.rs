use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// Documentation for a single field of an API schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub access: Access,
    pub required: bool,
}

/// Declarative schema metadata for the documentation collaborator.
///
/// Has no effect on the runtime behavior of the entity it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDoc],
}

pub const USER_SCHEMA: SchemaDoc = SchemaDoc {
    name: "User",
    description: "User entity representing a system user",
    fields: &[
        FieldDoc {
            name: "id",
            description: "Unique identifier of the user",
            example: "1",
            access: Access::ReadOnly,
            required: false,
        },
        FieldDoc {
            name: "name",
            description: "Name of the user",
            example: "John Doe",
            access: Access::ReadWrite,
            required: true,
        },
        FieldDoc {
            name: "email",
            description: "Email address of the user",
            example: "john.doe@example.com",
            access: Access::ReadWrite,
            required: true,
        },
    ],
};

impl SchemaDoc {
    #[allow(dead_code)]
    pub fn field(&self, name: &str) -> Option<&FieldDoc> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[allow(dead_code)]
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDoc> + '_ {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}
