use std::io::{self, Write};

use log::{debug, warn};

use crate::config::{DEFAULT_DESCRIPTION, DEFAULT_ENTITY_ID, DEFAULT_POINT, DEFAULT_RECORD};
use crate::error::EntityError;
use crate::model::{Capability, Description, Entity, TitledDescription, Vector2};

/// One instance of each model type, as printed by the binary.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub entity: Entity,
    pub description: Description,
    pub point: Vector2,
    pub record: TitledDescription,
}

impl Showcase {
    pub fn new(name: &str) -> Result<Self, EntityError> {
        let mut entity = Entity::new(name)?;
        entity.set_id(DEFAULT_ENTITY_ID);

        let (title, body) = DEFAULT_RECORD;
        let showcase = Self {
            entity,
            description: Description::new(DEFAULT_DESCRIPTION),
            point: Vector2::from(DEFAULT_POINT),
            record: TitledDescription::new(title, body),
        };
        debug!("Built showcase for {name:?}");

        Ok(showcase)
    }

    /// Writes the entity, description, distance and record lines in that order.
    pub fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.entity.write_line(out)?;
        self.description.write_line(out)?;
        self.write_value_lines(out)
    }

    /// Prints the same lines as [`Showcase::write_lines`] to standard output.
    pub fn display(&self) -> io::Result<()> {
        self.entity.display()?;
        self.description.display()?;
        self.write_value_lines(&mut io::stdout().lock())
    }

    fn write_value_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Distance: {}", self.point.distance())?;
        writeln!(out, "{}", self.record)
    }
}

impl Capability for Showcase {
    fn perform(&self) {
        if let Err(e) = self.display() {
            warn!("Failed to write showcase: {e}");
        }
    }

    fn attribute(&self) -> &str {
        self.entity.name()
    }
}
