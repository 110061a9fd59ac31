use crate::entities::MM2_PER_M2;

/// The wall onto which modules are mounted, edge-to-edge along its width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wall {
    pub id: usize,
    pub name: String,
    /// Width of the wall in mm
    pub width: u32,
    /// Height of the wall in mm
    pub height: u32,
}

impl Wall {
    pub fn new(id: usize, name: impl Into<String>, width: u32, height: u32) -> Self {
        Wall {
            id,
            name: name.into(),
            width,
            height,
        }
    }

    /// Area of the wall in m²
    pub fn area(&self) -> f32 {
        (self.width as f32 * self.height as f32) / MM2_PER_M2
    }
}
