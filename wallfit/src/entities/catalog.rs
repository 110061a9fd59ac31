use crate::entities::{Finish, Module, Wall};
use crate::util::assertions::catalog_ids_correct;

/// Static description of a configurator session: the wall and everything that can be put on it.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub name: String,
    pub wall: Wall,
    /// Modules available in the palette, indexed by their id
    pub modules: Vec<Module>,
    /// Finishes that can be applied to placed modules, indexed by their id
    pub finishes: Vec<Finish>,
}

impl Catalog {
    pub fn new(name: String, wall: Wall, modules: Vec<Module>, finishes: Vec<Finish>) -> Self {
        assert!(catalog_ids_correct(&modules, &finishes));

        Self {
            name,
            wall,
            modules,
            finishes,
        }
    }

    pub fn module(&self, id: usize) -> &Module {
        &self.modules[id]
    }

    pub fn finish(&self, id: usize) -> &Finish {
        &self.finishes[id]
    }

    pub fn get_module(&self, id: usize) -> Option<&Module> {
        self.modules.get(id)
    }

    pub fn get_finish(&self, id: usize) -> Option<&Finish> {
        self.finishes.get(id)
    }

    /// Width of the narrowest module in the catalog, `None` if there are no modules
    pub fn narrowest_module_width(&self) -> Option<u32> {
        self.modules.iter().map(|m| m.width).min()
    }
}
