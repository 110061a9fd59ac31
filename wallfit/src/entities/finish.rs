/// A surface finish that can be applied to a placed module (oak, walnut, matte white, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finish {
    pub id: usize,
    pub name: String,
    /// Surcharge in cents per m² of module face
    pub surcharge_per_m2: u64,
}

impl Finish {
    pub fn new(id: usize, name: impl Into<String>, surcharge_per_m2: u64) -> Self {
        Finish {
            id,
            name: name.into(),
            surcharge_per_m2,
        }
    }

    /// Surcharge in cents for a face of `width` x `height` mm, rounded to the nearest cent.
    pub fn surcharge(&self, width: u32, height: u32) -> u64 {
        let face_mm2 = width as u64 * height as u64;
        (self.surcharge_per_m2 * face_mm2 + 500_000) / 1_000_000
    }
}
