use serde::Serialize;

use crate::model::{Description, Entity, TitledDescription, Vector2};
use crate::showcase::Showcase;

/// Serializable view of a [`Showcase`].
#[derive(Debug, Serialize)]
pub struct ShowcaseReport<'a> {
    pub entity: &'a Entity,
    pub description: &'a Description,
    pub point: PointReport,
    pub record: &'a TitledDescription,
}

/// A vector together with its distance from the origin.
#[derive(Debug, Serialize)]
pub struct PointReport {
    #[serde(flatten)]
    pub point: Vector2,
    pub distance: f64,
}

pub fn showcase_report(showcase: &Showcase) -> ShowcaseReport<'_> {
    ShowcaseReport {
        entity: &showcase.entity,
        description: &showcase.description,
        point: PointReport {
            point: showcase.point,
            distance: showcase.point.distance(),
        },
        record: &showcase.record,
    }
}
