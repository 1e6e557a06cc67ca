use std::fmt;
use std::io::{self, Write};

use log::debug;
use serde::Serialize;

use crate::error::EntityError;

/// An entity with a mutable numeric identifier and a name fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    id: i32,
    name: String,
}

impl Entity {
    /// Creates an entity with identifier 0.
    ///
    /// Fails with [`EntityError::EmptyName`] if `name` is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, EntityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EntityError::EmptyName);
        }

        debug!("Created entity {name:?}");
        Ok(Self { id: 0, name })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes the display line, including the trailing line break.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Prints the display line to standard output.
    pub fn display(&self) -> io::Result<()> {
        self.write_line(&mut io::stdout().lock())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id: {}, Name: {}", self.id, self.name)
    }
}

/// A free-standing mutable description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description {
    description: String,
}

impl Description {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Writes the description and a line break. An unset description yields an empty line.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    pub fn display(&self) -> io::Result<()> {
        self.write_line(&mut io::stdout().lock())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
